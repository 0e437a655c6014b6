//! Dijkstra shortest path with a deterministic tie-break.
//!
//! # Algorithm
//!
//! Classic lazy-deletion Dijkstra: a binary min-heap keyed by accumulated
//! cost drives relaxation through [`Topology::neighbors`]. Stale heap
//! entries are skipped on pop by comparing against the distance table.
//!
//! # Tie-breaking
//!
//! Weighted logistics graphs are full of equal-cost paths, so the winner
//! must not depend on hash ordering. Two rules make it deterministic:
//!
//! 1. Relaxation only replaces a predecessor on a *strictly* cheaper
//!    cost, so the first-discovered equal-cost path is kept.
//! 2. Heap entries carry a monotone insertion sequence number as the
//!    secondary key, so equal-cost frontier nodes pop in discovery order.
//!
//! Combined with the store's insertion-ordered adjacency, the result is
//! the path discovered first under ascending-cost, first-inserted-neighbor
//! order — stable for a fixed edge insertion order.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::instrument;

use crate::error::{NetworkError, Result};
use crate::topology::{RouteMask, Topology};

/// A resolved route: ordered node ids plus summed edge cost.
///
/// Self-contained query result; holds no references into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Node ids from source to target inclusive.
    pub nodes: Vec<String>,
    /// Sum of the constituent edge weights.
    pub cost: f64,
}

/// Heap entry ordered as a min-heap by `(cost, seq)`.
///
/// `seq` is the monotone insertion counter implementing the
/// first-discovered tie-break.
#[derive(Debug)]
struct Frontier {
    cost: f64,
    seq: u64,
    node: String,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the cheapest
        // (and, on ties, earliest-discovered) entry on top.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Shortest path from `source` to `target` over the live topology.
///
/// # Errors
///
/// Returns [`NetworkError::UnknownNode`] if either endpoint does not
/// exist, or [`NetworkError::NoPath`] if the target is unreachable.
#[instrument(skip(topo))]
pub fn shortest_path(topo: &Topology, source: &str, target: &str) -> Result<Route> {
    shortest_path_masked(topo, &RouteMask::new(), source, target)
}

/// Shortest path with a [`RouteMask`] overlay hiding nodes/edges.
///
/// Used directly by Yen's deviations and failure probes; a masked-out
/// endpoint behaves as unreachable, not as unknown.
///
/// # Errors
///
/// Returns [`NetworkError::UnknownNode`] if either endpoint does not
/// exist in the store, or [`NetworkError::NoPath`] if no unmasked path
/// connects the endpoints.
pub fn shortest_path_masked(
    topo: &Topology,
    mask: &RouteMask,
    source: &str,
    target: &str,
) -> Result<Route> {
    if !topo.contains(source) {
        return Err(NetworkError::UnknownNode(source.to_owned()));
    }
    if !topo.contains(target) {
        return Err(NetworkError::UnknownNode(target.to_owned()));
    }

    let no_path = || NetworkError::NoPath {
        from: source.to_owned(),
        target: target.to_owned(),
    };

    if mask.bans_node(source) || mask.bans_node(target) {
        return Err(no_path());
    }

    let mut dist: HashMap<String, f64> = HashMap::new();
    let mut prev: HashMap<String, String> = HashMap::new();
    let mut heap: BinaryHeap<Frontier> = BinaryHeap::new();
    let mut seq: u64 = 0;

    dist.insert(source.to_owned(), 0.0);
    heap.push(Frontier {
        cost: 0.0,
        seq,
        node: source.to_owned(),
    });

    while let Some(Frontier { cost, node, .. }) = heap.pop() {
        // Stale entry from an earlier, more expensive discovery.
        if dist.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        if node == target {
            return Ok(Route {
                nodes: reconstruct(&prev, source, target),
                cost,
            });
        }

        for (next, weight) in topo.neighbors(&node) {
            if mask.bans_node(next) || mask.bans_edge(&node, next) {
                continue;
            }

            let candidate = cost + weight;
            // Strictly-less keeps the first-discovered predecessor on ties.
            if dist.get(next).is_none_or(|&best| candidate < best) {
                dist.insert(next.to_owned(), candidate);
                prev.insert(next.to_owned(), node.clone());
                seq += 1;
                heap.push(Frontier {
                    cost: candidate,
                    seq,
                    node: next.to_owned(),
                });
            }
        }
    }

    Err(no_path())
}

/// Distance table from `source` to every reachable node (itself
/// included at 0.0). Used by the statistics layer for connectivity and
/// mean-cost aggregates.
pub(crate) fn distance_map(topo: &Topology, source: &str) -> HashMap<String, f64> {
    let mut dist: HashMap<String, f64> = HashMap::new();
    let mut heap: BinaryHeap<Frontier> = BinaryHeap::new();
    let mut seq: u64 = 0;

    if !topo.contains(source) {
        return dist;
    }

    dist.insert(source.to_owned(), 0.0);
    heap.push(Frontier {
        cost: 0.0,
        seq,
        node: source.to_owned(),
    });

    while let Some(Frontier { cost, node, .. }) = heap.pop() {
        if dist.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        for (next, weight) in topo.neighbors(&node) {
            let candidate = cost + weight;
            if dist.get(next).is_none_or(|&best| candidate < best) {
                dist.insert(next.to_owned(), candidate);
                seq += 1;
                heap.push(Frontier {
                    cost: candidate,
                    seq,
                    node: next.to_owned(),
                });
            }
        }
    }

    dist
}

/// Walk the predecessor table back from `target` to `source`.
fn reconstruct(prev: &HashMap<String, String>, source: &str, target: &str) -> Vec<String> {
    let mut nodes = vec![target.to_owned()];
    let mut cursor = target;
    while cursor != source {
        match prev.get(cursor) {
            Some(parent) => {
                nodes.push(parent.clone());
                cursor = parent;
            }
            None => {
                // Unreachable when called with a settled target.
                debug_assert!(false, "predecessor chain broken at `{cursor}`");
                break;
            }
        }
    }
    nodes.reverse();
    nodes
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Tier;

    fn topo_from(edges: &[(&str, &str, f64)]) -> Topology {
        let mut topo = Topology::new();
        let mut seen = Vec::new();
        for (src, dst, _) in edges {
            for id in [src, dst] {
                if !seen.contains(id) {
                    seen.push(id);
                    topo.add_node(*id, Tier::Hub, None).expect("add node");
                }
            }
        }
        for (src, dst, weight) in edges {
            topo.add_edge(src, dst, *weight, None).expect("add edge");
        }
        topo
    }

    #[test]
    fn prefers_cheap_indirect_over_expensive_direct() {
        // S1 → W1 → D1 costs 15, direct S1 → D1 costs 20.
        let topo = topo_from(&[("S1", "W1", 10.0), ("W1", "D1", 5.0), ("S1", "D1", 20.0)]);
        let route = shortest_path(&topo, "S1", "D1").expect("route");
        assert_eq!(route.nodes, vec!["S1", "W1", "D1"]);
        assert!((route.cost - 15.0).abs() < 1e-10);
    }

    #[test]
    fn unknown_endpoints_error() {
        let topo = topo_from(&[("A", "B", 1.0)]);
        assert_eq!(
            shortest_path(&topo, "Z", "B").expect_err("unknown source"),
            NetworkError::UnknownNode("Z".into())
        );
        assert_eq!(
            shortest_path(&topo, "A", "Z").expect_err("unknown target"),
            NetworkError::UnknownNode("Z".into())
        );
    }

    #[test]
    fn unreachable_target_is_no_path_not_empty_route() {
        // B → A exists, but nothing goes A → B.
        let topo = topo_from(&[("B", "A", 1.0)]);
        let err = shortest_path(&topo, "A", "B").expect_err("unreachable");
        assert!(matches!(err, NetworkError::NoPath { .. }));
    }

    #[test]
    fn source_equals_target_is_trivial() {
        let topo = topo_from(&[("A", "B", 1.0)]);
        let route = shortest_path(&topo, "A", "A").expect("trivial route");
        assert_eq!(route.nodes, vec!["A"]);
        assert!(route.cost.abs() < 1e-10);
    }

    #[test]
    fn equal_cost_tie_resolves_to_first_inserted_neighbor() {
        // Two cost-10 paths A→B→D and A→C→D. B was inserted before C,
        // so the deterministic winner must run through B.
        let topo = topo_from(&[
            ("A", "B", 5.0),
            ("A", "C", 5.0),
            ("B", "D", 5.0),
            ("C", "D", 5.0),
        ]);
        let route = shortest_path(&topo, "A", "D").expect("route");
        assert_eq!(route.nodes, vec!["A", "B", "D"]);
        assert!((route.cost - 10.0).abs() < 1e-10);
    }

    #[test]
    fn equal_cost_tie_follows_insertion_even_when_unfavorable() {
        // Same graph, opposite insertion order: C now wins the tie.
        let topo = topo_from(&[
            ("A", "C", 5.0),
            ("A", "B", 5.0),
            ("C", "D", 5.0),
            ("B", "D", 5.0),
        ]);
        let route = shortest_path(&topo, "A", "D").expect("route");
        assert_eq!(route.nodes, vec!["A", "C", "D"]);
    }

    #[test]
    fn mask_hides_nodes_and_edges() {
        let topo = topo_from(&[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 5.0)]);

        let mut mask = RouteMask::new();
        mask.ban_node("B");
        let route = shortest_path_masked(&topo, &mask, "A", "C").expect("detour");
        assert_eq!(route.nodes, vec!["A", "C"]);
        assert!((route.cost - 5.0).abs() < 1e-10);

        let mut mask = RouteMask::new();
        mask.ban_edge("A", "C");
        let route = shortest_path_masked(&topo, &mask, "A", "C").expect("via B");
        assert_eq!(route.nodes, vec!["A", "B", "C"]);

        let mut mask = RouteMask::new();
        mask.ban_node("B");
        mask.ban_edge("A", "C");
        let err = shortest_path_masked(&topo, &mask, "A", "C").expect_err("cut off");
        assert!(matches!(err, NetworkError::NoPath { .. }));
    }

    #[test]
    fn masked_endpoint_reports_no_path_not_unknown() {
        let topo = topo_from(&[("A", "B", 1.0)]);
        let mut mask = RouteMask::new();
        mask.ban_node("B");
        let err = shortest_path_masked(&topo, &mask, "A", "B").expect_err("masked target");
        assert!(matches!(err, NetworkError::NoPath { .. }));
    }

    #[test]
    fn zero_weight_edges_are_legal() {
        let topo = topo_from(&[("A", "B", 0.0), ("B", "C", 0.0)]);
        let route = shortest_path(&topo, "A", "C").expect("free route");
        assert_eq!(route.nodes, vec!["A", "B", "C"]);
        assert!(route.cost.abs() < 1e-10);
    }
}
