//! Summary statistics for a network topology.
//!
//! # Statistics Provided
//!
//! - **`node_count` / `edge_count`**: totals for the live store.
//! - **`tier_counts`**: node count per tier, in flow order.
//! - **`density`**: `edge_count / (node_count * (node_count - 1))` —
//!   1.0 for a complete directed graph, 0.0 for 0 or 1 nodes.
//! - **weights**: min/max/mean over all edge weights, plus the total.
//! - **degrees**: mean total degree, and the busiest node by out- and
//!   in-degree (ties keep the lexicographically smallest id).
//! - **`connectivity_pct`**: percentage of (supplier, store) ordered
//!   pairs with at least one directed path. `None` when either tier is
//!   empty.
//! - **`mean_route_cost`**: mean shortest-path cost over all ordered
//!   reachable node pairs. `None` when no pair is reachable.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::path::dijkstra::distance_map;
use crate::topology::{Tier, Topology};

/// Summary statistics computed from a [`Topology`] by
/// [`NetworkStats::from_topology`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// Node count per tier, in flow order.
    pub tier_counts: BTreeMap<Tier, usize>,
    /// Edge density over ordered pairs.
    pub density: f64,
    /// Cheapest edge weight, if any edges exist.
    pub min_weight: Option<f64>,
    /// Most expensive edge weight, if any edges exist.
    pub max_weight: Option<f64>,
    /// Mean edge weight, if any edges exist.
    pub mean_weight: Option<f64>,
    /// Sum of all edge weights.
    pub total_weight: f64,
    /// Mean total degree (in + out) per node; 0.0 for an empty store.
    pub mean_degree: f64,
    /// Node with the most outgoing edges, with its out-degree.
    pub busiest_origin: Option<(String, usize)>,
    /// Node with the most incoming edges, with its in-degree.
    pub busiest_destination: Option<(String, usize)>,
    /// Percentage of supplier→store ordered pairs that are connected.
    pub connectivity_pct: Option<f64>,
    /// Mean shortest-path cost over all ordered reachable pairs.
    pub mean_route_cost: Option<f64>,
}

impl NetworkStats {
    /// Compute statistics for a topology.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_topology(topo: &Topology) -> Self {
        let node_count = topo.node_count();
        let edge_count = topo.edge_count();

        let mut tier_counts: BTreeMap<Tier, usize> = BTreeMap::new();
        for tier in Tier::ALL {
            tier_counts.insert(tier, topo.tier_members(tier).len());
        }

        let density = if node_count > 1 {
            edge_count as f64 / (node_count as f64 * (node_count as f64 - 1.0))
        } else {
            0.0
        };

        let weights: Vec<f64> = topo.edges().map(|(_, _, data)| data.weight).collect();
        let total_weight: f64 = weights.iter().sum();
        let min_weight = weights.iter().copied().reduce(f64::min);
        let max_weight = weights.iter().copied().reduce(f64::max);
        let mean_weight = if weights.is_empty() {
            None
        } else {
            Some(total_weight / weights.len() as f64)
        };

        let mean_degree = if node_count == 0 {
            0.0
        } else {
            // Every edge contributes one out- and one in-degree.
            2.0 * edge_count as f64 / node_count as f64
        };

        let ids = topo.node_ids();
        let busiest_origin = ids
            .iter()
            .map(|&id| (id.to_owned(), topo.out_degree(id)))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)));
        let busiest_destination = ids
            .iter()
            .map(|&id| (id.to_owned(), topo.in_degree(id)))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)));

        let (connectivity_pct, mean_route_cost) = reachability_aggregates(topo, &ids);

        Self {
            node_count,
            edge_count,
            tier_counts,
            density,
            min_weight,
            max_weight,
            mean_weight,
            total_weight,
            mean_degree,
            busiest_origin,
            busiest_destination,
            connectivity_pct,
            mean_route_cost,
        }
    }
}

/// One Dijkstra sweep per node feeds both the supplier→store
/// connectivity percentage and the mean route cost.
#[allow(clippy::cast_precision_loss)]
fn reachability_aggregates(topo: &Topology, ids: &[&str]) -> (Option<f64>, Option<f64>) {
    let suppliers = topo.tier_members(Tier::Supplier);
    let stores = topo.tier_members(Tier::Store);

    let mut reachable_pairs = 0_usize;
    let mut cost_sum = 0.0;
    let mut connected_supplier_store = 0_usize;

    for &source in ids {
        let dist = distance_map(topo, source);
        for &target in ids {
            if target == source {
                continue;
            }
            if let Some(cost) = dist.get(target) {
                reachable_pairs += 1;
                cost_sum += cost;
            }
        }
        if suppliers.iter().any(|s| s == source) {
            connected_supplier_store += stores.iter().filter(|t| dist.contains_key(*t)).count();
        }
    }

    let connectivity_pct = if suppliers.is_empty() || stores.is_empty() {
        None
    } else {
        let total_pairs = suppliers.len() * stores.len();
        Some(connected_supplier_store as f64 / total_pairs as f64 * 100.0)
    };

    let mean_route_cost = if reachable_pairs == 0 {
        None
    } else {
        Some(cost_sum / reachable_pairs as f64)
    };

    (connectivity_pct, mean_route_cost)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn small_net() -> Topology {
        let mut topo = Topology::new();
        topo.add_node("S1", Tier::Supplier, None).expect("add");
        topo.add_node("S2", Tier::Supplier, None).expect("add");
        topo.add_node("H1", Tier::Hub, None).expect("add");
        topo.add_node("R1", Tier::Store, None).expect("add");
        topo.add_edge("S1", "H1", 4.0, None).expect("edge");
        topo.add_edge("H1", "R1", 6.0, None).expect("edge");
        topo
    }

    #[test]
    fn counts_and_density() {
        let stats = NetworkStats::from_topology(&small_net());
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.tier_counts[&Tier::Supplier], 2);
        assert_eq!(stats.tier_counts[&Tier::Warehouse], 0);
        assert!((stats.density - 2.0 / 12.0).abs() < 1e-10);
    }

    #[test]
    fn weight_aggregates() {
        let stats = NetworkStats::from_topology(&small_net());
        assert_eq!(stats.min_weight, Some(4.0));
        assert_eq!(stats.max_weight, Some(6.0));
        assert_eq!(stats.mean_weight, Some(5.0));
        assert!((stats.total_weight - 10.0).abs() < 1e-10);
    }

    #[test]
    fn busiest_nodes() {
        let stats = NetworkStats::from_topology(&small_net());
        assert_eq!(stats.busiest_destination, Some(("H1".into(), 1)));
        // S1 and H1 tie at out-degree 1; lexicographically smaller id wins.
        assert_eq!(stats.busiest_origin, Some(("H1".into(), 1)));
    }

    #[test]
    fn connectivity_counts_only_supplier_store_pairs() {
        // S1 reaches R1, S2 reaches nothing: 1 of 2 pairs.
        let stats = NetworkStats::from_topology(&small_net());
        assert_eq!(stats.connectivity_pct, Some(50.0));
    }

    #[test]
    fn mean_route_cost_over_reachable_pairs() {
        // Reachable pairs: S1→H1 (4), S1→R1 (10), H1→R1 (6) → mean 20/3.
        let stats = NetworkStats::from_topology(&small_net());
        let mean = stats.mean_route_cost.expect("some pairs reachable");
        assert!((mean - 20.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn empty_store_degenerates_cleanly() {
        let stats = NetworkStats::from_topology(&Topology::new());
        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.min_weight, None);
        assert_eq!(stats.connectivity_pct, None);
        assert_eq!(stats.mean_route_cost, None);
        assert!(stats.density.abs() < 1e-10);
    }
}
