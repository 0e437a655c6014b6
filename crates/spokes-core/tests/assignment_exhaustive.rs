//! Exhaustive cross-checks for the assignment engine.
//!
//! Small tier sizes allow brute-forcing every one-to-one pairing, so the
//! Hungarian result can be verified against the true optimum rather than
//! against hardcoded expectations alone.

use spokes_core::error::NetworkError;
use spokes_core::query;
use spokes_core::seed::default_network;
use spokes_core::topology::{Tier, Topology};

fn bipartite(rows: &[&str], cols: &[&str], edges: &[(&str, &str, f64)]) -> Topology {
    let mut topo = Topology::new();
    for id in rows {
        topo.add_node(*id, Tier::Supplier, None).expect("add row node");
    }
    for id in cols {
        topo.add_node(*id, Tier::Warehouse, None).expect("add col node");
    }
    for (src, dst, weight) in edges {
        topo.add_edge(src, dst, *weight, None).expect("add edge");
    }
    topo
}

/// Brute-force the cheapest full matching over a dense 3×3 edge set.
fn brute_force_3x3(costs: &[[f64; 3]; 3]) -> f64 {
    let mut best = f64::INFINITY;
    for a in 0..3 {
        for b in 0..3 {
            for c in 0..3 {
                if a != b && b != c && a != c {
                    let total = costs[0][a] + costs[1][b] + costs[2][c];
                    if total < best {
                        best = total;
                    }
                }
            }
        }
    }
    best
}

#[test]
fn three_by_three_matches_brute_force() {
    let costs = [[8.0, 4.0, 7.0], [5.0, 2.0, 3.0], [9.0, 4.0, 8.0]];
    let topo = bipartite(
        &["A1", "A2", "A3"],
        &["B1", "B2", "B3"],
        &[
            ("A1", "B1", 8.0),
            ("A1", "B2", 4.0),
            ("A1", "B3", 7.0),
            ("A2", "B1", 5.0),
            ("A2", "B2", 2.0),
            ("A2", "B3", 3.0),
            ("A3", "B1", 9.0),
            ("A3", "B2", 4.0),
            ("A3", "B3", 8.0),
        ],
    );

    let report = query::optimal_assignment(&topo, Tier::Supplier, Tier::Warehouse).expect("solve");
    let expected = brute_force_3x3(&costs);
    assert!(
        (report.total_cost - expected).abs() < 1e-10,
        "solver {} vs brute force {expected}",
        report.total_cost
    );
    assert_eq!(report.pairs.len(), 3);
}

#[test]
fn solution_beats_every_other_feasible_pairing() {
    // Deliberately tie-heavy matrix: several pairings cost the same, the
    // solver's answer must still be no worse than any of them.
    let topo = bipartite(
        &["A1", "A2", "A3"],
        &["B1", "B2", "B3"],
        &[
            ("A1", "B1", 3.0),
            ("A1", "B2", 3.0),
            ("A1", "B3", 3.0),
            ("A2", "B1", 1.0),
            ("A2", "B2", 2.0),
            ("A2", "B3", 3.0),
            ("A3", "B1", 2.0),
            ("A3", "B2", 2.0),
            ("A3", "B3", 2.0),
        ],
    );
    let costs = [[3.0, 3.0, 3.0], [1.0, 2.0, 3.0], [2.0, 2.0, 2.0]];

    let report = query::optimal_assignment(&topo, Tier::Supplier, Tier::Warehouse).expect("solve");
    assert!((report.total_cost - brute_force_3x3(&costs)).abs() < 1e-10);
}

#[test]
fn seed_supplier_warehouse_assignment_is_the_known_optimum() {
    let topo = default_network();
    let report = query::optimal_assignment(&topo, Tier::Supplier, Tier::Warehouse).expect("solve");

    // Five warehouses, six suppliers: five pairs, S2 stays unmatched.
    assert_eq!(report.pairs.len(), 5);
    assert!((report.total_cost - 62.0).abs() < 1e-10);

    let pairs: Vec<(&str, &str)> = report
        .pairs
        .iter()
        .map(|pair| (pair.from.as_str(), pair.to.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("S1", "W1"),
            ("S3", "W2"),
            ("S4", "W5"),
            ("S5", "W4"),
            ("S6", "W3"),
        ]
    );
    assert!(!pairs.iter().any(|(from, _)| *from == "S2"));

    // Every matched pair is a real lane whose weight matches the store.
    for pair in &report.pairs {
        assert_eq!(topo.edge_weight(&pair.from, &pair.to), Some(pair.cost));
    }
}

#[test]
fn seed_assignment_beats_exhaustive_warehouse_permutations() {
    let topo = default_network();
    let suppliers = topo.tier_members(Tier::Supplier);
    let warehouses = topo.tier_members(Tier::Warehouse);
    let report = query::optimal_assignment(&topo, Tier::Supplier, Tier::Warehouse).expect("solve");

    // Enumerate every injective warehouse → supplier mapping.
    let n = suppliers.len();
    let mut best = f64::INFINITY;
    for a in 0..n {
        for b in 0..n {
            for c in 0..n {
                for d in 0..n {
                    for e in 0..n {
                        let picks = [a, b, c, d, e];
                        let mut dedup = picks.to_vec();
                        dedup.sort_unstable();
                        dedup.dedup();
                        if dedup.len() != 5 {
                            continue;
                        }
                        let total: Option<f64> = picks
                            .iter()
                            .zip(&warehouses)
                            .map(|(&s, w)| topo.edge_weight(&suppliers[s], w))
                            .sum();
                        if let Some(total) = total
                            && total < best
                        {
                            best = total;
                        }
                    }
                }
            }
        }
    }

    assert!((report.total_cost - best).abs() < 1e-10, "solver {} vs brute {best}", report.total_cost);
}

#[test]
fn rectangular_tiers_leave_the_surplus_unmatched() {
    let topo = bipartite(
        &["A1", "A2", "A3", "A4"],
        &["B1", "B2"],
        &[
            ("A1", "B1", 6.0),
            ("A2", "B1", 2.0),
            ("A2", "B2", 9.0),
            ("A3", "B2", 3.0),
            ("A4", "B1", 7.0),
            ("A4", "B2", 8.0),
        ],
    );
    let report = query::optimal_assignment(&topo, Tier::Supplier, Tier::Warehouse).expect("solve");
    assert_eq!(report.pairs.len(), 2);
    assert!((report.total_cost - 5.0).abs() < 1e-10);
}

#[test]
fn infeasible_when_edges_cannot_cover_the_smaller_tier() {
    // Three warehouses but all lanes point at B1.
    let topo = bipartite(
        &["A1", "A2", "A3"],
        &["B1", "B2", "B3"],
        &[("A1", "B1", 1.0), ("A2", "B1", 2.0), ("A3", "B1", 3.0)],
    );
    let err =
        query::optimal_assignment(&topo, Tier::Supplier, Tier::Warehouse).expect_err("infeasible");
    assert!(matches!(err, NetworkError::InfeasibleAssignment { .. }));
}

#[test]
fn empty_tiers_are_rejected() {
    let topo = bipartite(&["A1"], &[], &[]);
    assert_eq!(
        query::optimal_assignment(&topo, Tier::Supplier, Tier::Warehouse).expect_err("empty"),
        NetworkError::EmptyTier(Tier::Warehouse)
    );
    assert_eq!(
        query::optimal_assignment(&topo, Tier::Hub, Tier::Supplier).expect_err("empty"),
        NetworkError::EmptyTier(Tier::Hub)
    );
}
