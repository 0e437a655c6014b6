//! The canonical demonstration network.
//!
//! A five-tier logistics chain — 6 suppliers, 5 warehouses, 4
//! distribution centers, 4 hubs, 10 retail stores — wired with 72
//! directed lanes whose costs span $4 to $28. Layer-skipping "direct"
//! and "cross" lanes provide the redundancy the resilience queries are
//! built to analyze.
//!
//! The ids (`S1..S6`, `W1..W5`, `D1..D4`, `H1..H4`, `R1..R10`), tier
//! assignments, and weights are a fixed contract relied on by embedders
//! and the seed-contract test suite; change them only with a matching
//! contract bump.

use crate::topology::{Tier, Topology};

/// Supplier → warehouse lanes.
const SUPPLY_LANES: &[(&str, &str, f64)] = &[
    ("S1", "W1", 10.0),
    ("S1", "W2", 15.0),
    ("S1", "W3", 20.0),
    ("S2", "W1", 12.0),
    ("S2", "W2", 18.0),
    ("S2", "W3", 14.0),
    ("S2", "W4", 22.0),
    ("S3", "W2", 13.0),
    ("S3", "W3", 17.0),
    ("S3", "W4", 16.0),
    ("S3", "W5", 19.0),
    ("S4", "W1", 16.0),
    ("S4", "W3", 15.0),
    ("S4", "W5", 14.0),
    ("S5", "W2", 11.0),
    ("S5", "W4", 13.0),
    ("S5", "W5", 17.0),
    ("S6", "W1", 18.0),
    ("S6", "W3", 12.0),
    ("S6", "W4", 15.0),
    ("S6", "W5", 20.0),
];

/// Warehouse → distribution-center lanes.
const DISTRIBUTION_LANES: &[(&str, &str, f64)] = &[
    ("W1", "D1", 5.0),
    ("W1", "D2", 7.0),
    ("W2", "D1", 6.0),
    ("W2", "D2", 5.0),
    ("W2", "D3", 8.0),
    ("W3", "D2", 6.0),
    ("W3", "D3", 5.0),
    ("W3", "D4", 7.0),
    ("W4", "D3", 6.0),
    ("W4", "D4", 5.0),
    ("W5", "D2", 9.0),
    ("W5", "D4", 6.0),
];

/// Distribution-center → hub lanes.
const HUB_LANES: &[(&str, &str, f64)] = &[
    ("D1", "H1", 4.0),
    ("D1", "H2", 6.0),
    ("D2", "H1", 5.0),
    ("D2", "H2", 4.0),
    ("D2", "H3", 7.0),
    ("D3", "H2", 5.0),
    ("D3", "H3", 4.0),
    ("D3", "H4", 6.0),
    ("D4", "H3", 5.0),
    ("D4", "H4", 4.0),
];

/// Hub → store lanes.
const RETAIL_LANES: &[(&str, &str, f64)] = &[
    ("H1", "R1", 8.0),
    ("H1", "R2", 6.0),
    ("H1", "R3", 10.0),
    ("H2", "R2", 7.0),
    ("H2", "R3", 5.0),
    ("H2", "R4", 9.0),
    ("H2", "R5", 11.0),
    ("H3", "R4", 6.0),
    ("H3", "R5", 8.0),
    ("H3", "R6", 7.0),
    ("H3", "R7", 10.0),
    ("H4", "R6", 9.0),
    ("H4", "R7", 7.0),
    ("H4", "R8", 8.0),
    ("H4", "R9", 11.0),
    ("H4", "R10", 12.0),
];

/// Layer-skipping direct lanes kept for redundancy.
const DIRECT_LANES: &[(&str, &str, f64)] = &[
    ("W1", "H1", 15.0),
    ("W2", "H2", 18.0),
    ("D1", "R1", 20.0),
    ("D2", "R3", 22.0),
    ("W3", "R5", 28.0),
    ("W5", "H4", 16.0),
];

/// Cross-connections between adjacent layers.
const CROSS_LANES: &[(&str, &str, f64)] = &[
    ("W1", "D3", 12.0),
    ("W4", "D1", 11.0),
    ("D1", "H3", 9.0),
    ("D4", "H1", 10.0),
    ("H1", "R5", 15.0),
    ("H2", "R7", 14.0),
    ("H3", "R2", 13.0),
];

/// Build the canonical 29-node, 72-edge network.
///
/// # Panics
///
/// Never in practice: the seed data is static and validated by the
/// seed-contract tests; a failure here would mean the constants above
/// were corrupted.
#[must_use]
pub fn default_network() -> Topology {
    match build() {
        Ok(topo) => topo,
        Err(err) => unreachable!("canonical seed data failed validation: {err}"),
    }
}

fn build() -> crate::error::Result<Topology> {
    let mut topo = Topology::new();

    for i in 1..=6 {
        topo.add_node(format!("S{i}"), Tier::Supplier, None)?;
    }
    for i in 1..=5 {
        topo.add_node(format!("W{i}"), Tier::Warehouse, None)?;
    }
    for i in 1..=4 {
        topo.add_node(format!("D{i}"), Tier::Distribution, None)?;
    }
    for i in 1..=4 {
        topo.add_node(format!("H{i}"), Tier::Hub, None)?;
    }
    for i in 1..=10 {
        topo.add_node(format!("R{i}"), Tier::Store, None)?;
    }

    for lanes in [
        SUPPLY_LANES,
        DISTRIBUTION_LANES,
        HUB_LANES,
        RETAIL_LANES,
        DIRECT_LANES,
        CROSS_LANES,
    ] {
        for &(src, dst, weight) in lanes {
            topo.add_edge(src, dst, weight, None)?;
        }
    }

    Ok(topo)
}

#[cfg(test)]
mod tests {
    use super::default_network;

    #[test]
    fn builds_without_panicking() {
        let topo = default_network();
        assert_eq!(topo.node_count(), 29);
        assert_eq!(topo.edge_count(), 72);
    }
}
