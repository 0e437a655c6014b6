//! Tier-to-tier cost matrix construction.

use crate::error::{NetworkError, Result};
use crate::topology::{Tier, Topology};

/// Sentinel cost for a missing direct edge.
///
/// Strictly greater than any achievable real total in the canonical
/// weight range ($4–$28 across at most a handful of pairings), so the
/// solver only selects it when forced — which the assignment layer then
/// reports as infeasible.
pub const UNREACHABLE_COST: f64 = 999.0;

/// A dense rectangular cost matrix between two tiers.
///
/// Row/column order is the sorted id order of each tier, making matrix
/// indices and results deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    /// Tier-A member ids (row labels), sorted ascending.
    pub rows: Vec<String>,
    /// Tier-B member ids (column labels), sorted ascending.
    pub cols: Vec<String>,
    /// `costs[i][j]` = weight of the direct edge `rows[i] -> cols[j]`,
    /// or [`UNREACHABLE_COST`] when absent.
    pub costs: Vec<Vec<f64>>,
}

/// Build the direct-edge cost matrix from `tier_a` rows to `tier_b`
/// columns.
///
/// # Errors
///
/// Returns [`NetworkError::EmptyTier`] if either tier has no members.
pub fn build_cost_matrix(topo: &Topology, tier_a: Tier, tier_b: Tier) -> Result<CostMatrix> {
    let rows = topo.tier_members(tier_a);
    if rows.is_empty() {
        return Err(NetworkError::EmptyTier(tier_a));
    }
    let cols = topo.tier_members(tier_b);
    if cols.is_empty() {
        return Err(NetworkError::EmptyTier(tier_b));
    }

    let costs = rows
        .iter()
        .map(|row| {
            cols.iter()
                .map(|col| topo.edge_weight(row, col).unwrap_or(UNREACHABLE_COST))
                .collect()
        })
        .collect();

    Ok(CostMatrix { rows, cols, costs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_rows_and_cols_are_sorted_and_dense() {
        let mut topo = Topology::new();
        for id in ["S2", "S1"] {
            topo.add_node(id, Tier::Supplier, None).expect("add");
        }
        for id in ["W2", "W1"] {
            topo.add_node(id, Tier::Warehouse, None).expect("add");
        }
        topo.add_edge("S1", "W2", 7.0, None).expect("edge");
        topo.add_edge("S2", "W1", 3.0, None).expect("edge");

        let matrix = build_cost_matrix(&topo, Tier::Supplier, Tier::Warehouse).expect("matrix");
        assert_eq!(matrix.rows, vec!["S1", "S2"]);
        assert_eq!(matrix.cols, vec!["W1", "W2"]);
        assert_eq!(matrix.costs[0], vec![UNREACHABLE_COST, 7.0]);
        assert_eq!(matrix.costs[1], vec![3.0, UNREACHABLE_COST]);
    }

    #[test]
    fn empty_sides_error() {
        let mut topo = Topology::new();
        topo.add_node("S1", Tier::Supplier, None).expect("add");
        assert_eq!(
            build_cost_matrix(&topo, Tier::Supplier, Tier::Hub).expect_err("no hubs"),
            NetworkError::EmptyTier(Tier::Hub)
        );
    }
}
