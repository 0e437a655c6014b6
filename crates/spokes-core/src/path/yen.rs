//! Yen's algorithm for ranked k-shortest simple paths.
//!
//! # Algorithm
//!
//! Starting from the Dijkstra shortest path, each iteration deviates from
//! the most recent accepted path at every prefix position ("spur node"):
//! edges that would reproduce an already-accepted path are banned, the
//! nodes of the root prefix are banned, and a spur path is computed from
//! the deviation point to the target. The cheapest unseen candidate is
//! accepted next.
//!
//! All temporary removals go through a [`RouteMask`] overlay — the shared
//! store is never mutated and nothing has to be restored, so concurrent
//! read-only queries remain safe.
//!
//! # Ordering
//!
//! Accepted paths come out in non-decreasing cost order. Equal-cost
//! candidates rank lexicographically by node sequence, making the full
//! result deterministic for a fixed topology.

use tracing::instrument;

use crate::error::{NetworkError, Result};
use crate::path::dijkstra::{Route, shortest_path, shortest_path_masked};
use crate::topology::{RouteMask, Topology};

/// Up to `k` cheapest simple paths from `source` to `target`, ascending
/// by cost. Fewer than `k` existing paths is not an error; `k == 0`
/// yields an empty list.
///
/// # Errors
///
/// Returns [`NetworkError::UnknownNode`] if either endpoint does not
/// exist, or [`NetworkError::NoPath`] if no path exists at all.
#[instrument(skip(topo))]
pub fn k_shortest_paths(topo: &Topology, source: &str, target: &str, k: usize) -> Result<Vec<Route>> {
    if !topo.contains(source) {
        return Err(NetworkError::UnknownNode(source.to_owned()));
    }
    if !topo.contains(target) {
        return Err(NetworkError::UnknownNode(target.to_owned()));
    }
    if k == 0 {
        return Ok(Vec::new());
    }

    let mut accepted = vec![shortest_path(topo, source, target)?];
    let mut candidates: Vec<Route> = Vec::new();

    while accepted.len() < k {
        let Some(last) = accepted.last().cloned() else {
            break;
        };

        for i in 0..last.nodes.len().saturating_sub(1) {
            let spur_node = &last.nodes[i];
            let root = &last.nodes[..=i];

            let mut mask = RouteMask::new();

            // Ban the next hop of every accepted path sharing this root,
            // so the spur cannot reproduce a path we already have.
            for path in &accepted {
                if path.nodes.len() > i + 1 && path.nodes[..=i] == *root {
                    mask.ban_edge(path.nodes[i].clone(), path.nodes[i + 1].clone());
                }
            }

            // Ban the root nodes (except the spur node itself) to keep
            // candidate paths simple.
            for node in &last.nodes[..i] {
                mask.ban_node(node.clone());
            }

            match shortest_path_masked(topo, &mask, spur_node, target) {
                Ok(spur) => {
                    let mut nodes = last.nodes[..i].to_vec();
                    nodes.extend(spur.nodes);
                    let candidate = Route {
                        cost: prefix_cost(topo, root) + spur.cost,
                        nodes,
                    };
                    push_candidate(&mut candidates, &accepted, candidate);
                }
                // This deviation point is exhausted; others may still work.
                Err(NetworkError::NoPath { .. }) => {}
                Err(err) => return Err(err),
            }
        }

        if candidates.is_empty() {
            break;
        }
        accepted.push(candidates.remove(0));
    }

    Ok(accepted)
}

/// Cost of the root prefix, summed over live store edges.
fn prefix_cost(topo: &Topology, nodes: &[String]) -> f64 {
    nodes
        .windows(2)
        .map(|pair| {
            topo.edge_weight(&pair[0], &pair[1]).unwrap_or_else(|| {
                // Root edges come from previously accepted paths, which
                // were resolved against this same (unmutated) store.
                debug_assert!(false, "root edge `{}` -> `{}` missing", pair[0], pair[1]);
                0.0
            })
        })
        .sum()
}

/// Insert a candidate in `(cost, node-sequence)` order, dropping
/// duplicates of accepted paths or of candidates already queued.
fn push_candidate(candidates: &mut Vec<Route>, accepted: &[Route], candidate: Route) {
    // Dedup on the node sequence alone: the same path rediscovered from a
    // different deviation point can carry an ulp-different float cost.
    if accepted.iter().any(|path| path.nodes == candidate.nodes)
        || candidates.iter().any(|queued| queued.nodes == candidate.nodes)
    {
        return;
    }
    let pos = candidates
        .binary_search_by(|queued| {
            queued
                .cost
                .total_cmp(&candidate.cost)
                .then_with(|| queued.nodes.cmp(&candidate.nodes))
        })
        .unwrap_or_else(|pos| pos);
    candidates.insert(pos, candidate);
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

    /// The classic Yen example graph: three distinct C→H routes.
    fn yen_graph() -> Topology {
        topo_from(&[
            ("C", "D", 3.0),
            ("C", "E", 2.0),
            ("D", "F", 4.0),
            ("E", "D", 1.0),
            ("E", "F", 2.0),
            ("E", "G", 3.0),
            ("F", "G", 2.0),
            ("F", "H", 1.0),
            ("G", "H", 2.0),
        ])
    }

    #[test]
    fn first_entry_matches_dijkstra() {
        let topo = yen_graph();
        let best = shortest_path(&topo, "C", "H").expect("dijkstra");
        let ranked = k_shortest_paths(&topo, "C", "H", 3).expect("yen");
        assert_eq!(ranked[0].nodes, best.nodes);
        assert!((ranked[0].cost - best.cost).abs() < 1e-10);
    }

    #[test]
    fn classic_example_yields_known_ranking() {
        let topo = yen_graph();
        let ranked = k_shortest_paths(&topo, "C", "H", 3).expect("yen");

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].nodes, vec!["C", "E", "F", "H"]);
        assert!((ranked[0].cost - 5.0).abs() < 1e-10);
        assert_eq!(ranked[1].nodes, vec!["C", "E", "G", "H"]);
        assert!((ranked[1].cost - 7.0).abs() < 1e-10);
        // Three cost-8 paths exist; the lexicographic tie-break ranks
        // C-D-F-H ahead of C-E-D-F-H and C-E-F-G-H.
        assert_eq!(ranked[2].nodes, vec!["C", "D", "F", "H"]);
        assert!((ranked[2].cost - 8.0).abs() < 1e-10);
    }

    #[test]
    fn costs_are_non_decreasing_and_paths_distinct() {
        let topo = yen_graph();
        let ranked = k_shortest_paths(&topo, "C", "H", 10).expect("yen");

        for pair in ranked.windows(2) {
            assert!(pair[0].cost <= pair[1].cost + 1e-10);
            assert_ne!(pair[0].nodes, pair[1].nodes);
        }
    }

    #[test]
    fn all_paths_are_simple() {
        let topo = yen_graph();
        for route in k_shortest_paths(&topo, "C", "H", 10).expect("yen") {
            let mut sorted = route.nodes.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), route.nodes.len(), "repeat in {:?}", route.nodes);
        }
    }

    #[test]
    fn fewer_paths_than_k_is_not_an_error() {
        let topo = topo_from(&[("A", "B", 1.0)]);
        let ranked = k_shortest_paths(&topo, "A", "B", 5).expect("yen");
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn zero_paths_is_no_path() {
        let topo = topo_from(&[("B", "A", 1.0)]);
        let err = k_shortest_paths(&topo, "A", "B", 3).expect_err("no path");
        assert!(matches!(err, NetworkError::NoPath { .. }));
    }

    #[test]
    fn k_zero_is_empty_but_still_validates_endpoints() {
        let topo = topo_from(&[("A", "B", 1.0)]);
        assert!(k_shortest_paths(&topo, "A", "B", 0).expect("empty").is_empty());
        assert!(matches!(
            k_shortest_paths(&topo, "A", "Z", 0).expect_err("unknown"),
            NetworkError::UnknownNode(_)
        ));
    }

    #[test]
    fn store_is_untouched_by_deviation_masks() {
        let topo = yen_graph();
        let edges_before = topo.edge_count();
        let _ = k_shortest_paths(&topo, "C", "H", 5).expect("yen");
        assert_eq!(topo.edge_count(), edges_before);
        assert_eq!(topo.node_count(), 6);
    }
}
