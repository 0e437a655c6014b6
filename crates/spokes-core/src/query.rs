//! The query facade: stateless orchestration over an explicit topology
//! handle.
//!
//! # Overview
//!
//! External collaborators (CLI, dashboards) call these functions with
//! primitive ids and counts and get back plain, serializable result
//! records — no engine types, no drawing coordinates, no live views into
//! the store. The facade reads the store, invokes the engines, and
//! translates their output; engines never call back into it.
//!
//! Every function takes `&Topology` explicitly. There is no process-wide
//! "current network"; whoever owns the handle decides what is queried.

use serde::Serialize;
use tracing::instrument;

use crate::assign;
use crate::error::{NetworkError, Result};
use crate::path::{self, Route};
use crate::resilience;
use crate::stats::NetworkStats;
use crate::topology::{Tier, Topology};

// ---------------------------------------------------------------------------
// Result records
// ---------------------------------------------------------------------------

/// One edge traversal within a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    /// Leg origin node id.
    pub from: String,
    /// Leg destination node id.
    pub to: String,
    /// Weight of the traversed edge.
    pub cost: f64,
}

/// A resolved route with its per-leg breakdown.
///
/// `nodes` and `legs` double as the highlight data handed to drawing
/// collaborators: the ordered node ids plus the edge pairs to emphasize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    /// Node ids from source to target inclusive.
    pub nodes: Vec<String>,
    /// Per-edge breakdown, in traversal order.
    pub legs: Vec<RouteLeg>,
    /// Sum of the leg costs.
    pub total_cost: f64,
}

impl RouteReport {
    fn from_route(topo: &Topology, route: Route) -> Self {
        let legs = route
            .nodes
            .windows(2)
            .map(|pair| RouteLeg {
                from: pair[0].clone(),
                to: pair[1].clone(),
                cost: topo.edge_weight(&pair[0], &pair[1]).unwrap_or_else(|| {
                    debug_assert!(false, "route edge `{}` -> `{}` missing", pair[0], pair[1]);
                    0.0
                }),
            })
            .collect();
        Self {
            nodes: route.nodes,
            legs,
            total_cost: route.cost,
        }
    }
}

/// One tier-A → tier-B pairing of an assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentPair {
    /// Tier-A node id.
    pub from: String,
    /// Tier-B node id.
    pub to: String,
    /// Direct edge weight of the pairing.
    pub cost: f64,
}

/// A solved minimum-cost assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentReport {
    /// Matched pairs, ascending by tier-A id.
    pub pairs: Vec<AssignmentPair>,
    /// Sum of the pair costs.
    pub total_cost: f64,
}

/// One entry of a centrality ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityEntry {
    /// Node id.
    pub id: String,
    /// Normalized betweenness score.
    pub score: f64,
}

/// Nodes ranked by betweenness centrality, descending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityRanking {
    /// `(id, score)` entries, descending by score, ties by id ascending.
    pub entries: Vec<CentralityEntry>,
}

/// Flow contributed by one source-tier node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceOutflow {
    /// Source-tier node id.
    pub id: String,
    /// Volume routed through this node.
    pub flow: f64,
}

/// Result of a tier-to-tier maximum-flow query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowReport {
    /// Aggregated source tier.
    pub source_tier: Tier,
    /// Aggregated sink tier.
    pub sink_tier: Tier,
    /// The maximum flow value.
    pub value: f64,
    /// Per-source breakdown, ascending by id.
    pub per_source: Vec<SourceOutflow>,
}

/// Before/after comparison for one simulated node failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReport {
    /// The node taken out of service.
    pub failed_node: String,
    /// Route before the failure, if the pair was routable.
    pub before: Option<RouteReport>,
    /// Route after the failure, if one survives.
    pub after: Option<RouteReport>,
    /// Percentage cost increase; `None` if either route is missing.
    pub cost_increase_pct: Option<f64>,
    /// True when the failure disconnected a previously routable pair.
    pub disconnected: bool,
}

// ---------------------------------------------------------------------------
// Facade functions
// ---------------------------------------------------------------------------

/// Cheapest route between two nodes.
///
/// # Errors
///
/// [`NetworkError::UnknownNode`] for a missing endpoint,
/// [`NetworkError::NoPath`] when the target is unreachable.
#[instrument(skip(topo))]
pub fn shortest_route(topo: &Topology, source: &str, target: &str) -> Result<RouteReport> {
    let route = path::shortest_path(topo, source, target)?;
    Ok(RouteReport::from_route(topo, route))
}

/// Up to `k` ranked alternative routes, ascending by cost.
///
/// # Errors
///
/// [`NetworkError::UnknownNode`] for a missing endpoint,
/// [`NetworkError::NoPath`] when no route exists at all.
#[instrument(skip(topo))]
pub fn alternative_routes(
    topo: &Topology,
    source: &str,
    target: &str,
    k: usize,
) -> Result<Vec<RouteReport>> {
    let routes = path::k_shortest_paths(topo, source, target, k)?;
    Ok(routes
        .into_iter()
        .map(|route| RouteReport::from_route(topo, route))
        .collect())
}

/// Minimum-cost assignment of `tier_a` members to `tier_b` members.
///
/// # Errors
///
/// [`NetworkError::EmptyTier`] when a tier has no members,
/// [`NetworkError::InfeasibleAssignment`] when no sentinel-free matching
/// exists.
#[instrument(skip(topo))]
pub fn optimal_assignment(topo: &Topology, tier_a: Tier, tier_b: Tier) -> Result<AssignmentReport> {
    let matching = assign::optimal_assignment(topo, tier_a, tier_b)?;
    Ok(AssignmentReport {
        pairs: matching
            .pairs
            .into_iter()
            .map(|pair| AssignmentPair {
                from: pair.from,
                to: pair.to,
                cost: pair.cost,
            })
            .collect(),
        total_cost: matching.total_cost,
    })
}

/// The `top_n` most critical nodes by betweenness centrality.
#[must_use]
#[instrument(skip(topo))]
pub fn critical_nodes(topo: &Topology, top_n: usize) -> CentralityRanking {
    CentralityRanking {
        entries: resilience::ranked_centrality(topo, top_n)
            .into_iter()
            .map(|entry| CentralityEntry {
                id: entry.id,
                score: entry.score,
            })
            .collect(),
    }
}

/// Maximum flow from `source_tier` to `sink_tier`.
///
/// # Errors
///
/// [`NetworkError::EmptyTier`] when a tier has no members.
#[instrument(skip(topo))]
pub fn max_flow(topo: &Topology, source_tier: Tier, sink_tier: Tier) -> Result<FlowReport> {
    let summary = resilience::max_flow(topo, source_tier, sink_tier)?;
    Ok(FlowReport {
        source_tier,
        sink_tier,
        value: summary.value,
        per_source: summary
            .per_source
            .into_iter()
            .map(|entry| SourceOutflow {
                id: entry.id,
                flow: entry.flow,
            })
            .collect(),
    })
}

/// Simulate the failure of one node for a source/target relation.
///
/// # Errors
///
/// [`NetworkError::UnknownNode`] if any of the three ids is absent from
/// the live topology.
#[instrument(skip(topo))]
pub fn simulate_failure(
    topo: &Topology,
    node_id: &str,
    source: &str,
    target: &str,
) -> Result<FailureReport> {
    let outcome = resilience::simulate_failure(topo, node_id, source, target)?;
    let cost_increase_pct = outcome.cost_increase_pct();
    let disconnected = outcome.disconnected();

    // The post-failure route references the reduced copy; resolve its
    // legs against a matching snapshot so the leg costs stay honest.
    let mut reduced = topo.snapshot();
    reduced.remove_node(node_id)?;

    Ok(FailureReport {
        failed_node: outcome.failed_node,
        before: outcome
            .before
            .map(|route| RouteReport::from_route(topo, route)),
        after: outcome
            .after
            .map(|route| RouteReport::from_route(&reduced, route)),
        cost_increase_pct,
        disconnected,
    })
}

/// Summary statistics for the topology.
#[must_use]
#[instrument(skip(topo))]
pub fn network_stats(topo: &Topology) -> NetworkStats {
    NetworkStats::from_topology(topo)
}

/// Number of distinct simple routes between two nodes using at most
/// `max_hops` edges — the redundancy metric. A node is never revisited
/// within a route; `source == target` counts zero routes.
///
/// # Errors
///
/// [`NetworkError::UnknownNode`] for a missing endpoint.
#[instrument(skip(topo))]
pub fn route_count(topo: &Topology, source: &str, target: &str, max_hops: usize) -> Result<usize> {
    if !topo.contains(source) {
        return Err(NetworkError::UnknownNode(source.to_owned()));
    }
    if !topo.contains(target) {
        return Err(NetworkError::UnknownNode(target.to_owned()));
    }

    let mut on_path = vec![source.to_owned()];
    Ok(count_simple(topo, source, target, max_hops, &mut on_path))
}

fn count_simple(
    topo: &Topology,
    current: &str,
    target: &str,
    remaining: usize,
    on_path: &mut Vec<String>,
) -> usize {
    if remaining == 0 {
        return 0;
    }

    let mut count = 0;
    for (next, _) in topo.neighbors(current) {
        if next == target {
            count += 1;
            continue;
        }
        if on_path.iter().any(|seen| seen == next) {
            continue;
        }
        on_path.push(next.to_owned());
        count += count_simple(topo, next, target, remaining - 1, on_path);
        on_path.pop();
    }
    count
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
