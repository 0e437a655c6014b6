//! Tier-aggregated maximum flow via Edmonds–Karp.
//!
//! # Overview
//!
//! Answers "how much volume can the `source_tier` push to the
//! `sink_tier`?" All source-tier nodes hang off one virtual source and
//! all sink-tier nodes feed one virtual sink; the virtual arcs are
//! unlimited unless the node itself declares a capacity attribute, which
//! then bounds its aggregate throughput. Real edges are bounded by their
//! capacity attribute, defaulting to [`DEFAULT_EDGE_CAPACITY`].
//!
//! # Algorithm
//!
//! Edmonds–Karp: BFS augmenting paths over a dense residual matrix until
//! no augmenting path remains. Nodes scan in sorted-id order so the
//! augmentation sequence — and the per-source breakdown — is
//! deterministic.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::error::{NetworkError, Result};
use crate::topology::{Tier, Topology};

/// Capacity assumed for edges with no explicit capacity attribute.
pub const DEFAULT_EDGE_CAPACITY: f64 = 100.0;

/// Residuals below this are treated as exhausted.
const RESIDUAL_EPS: f64 = 1e-9;

/// Flow leaving one source-tier node.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFlow {
    /// Source-tier node id.
    pub id: String,
    /// Volume routed through this node in the maximum flow.
    pub flow: f64,
}

/// Result of a tier-to-tier flow computation.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSummary {
    /// The maximum flow value.
    pub value: f64,
    /// Per-source-node outflow, ascending by id. Sums to `value`.
    pub per_source: Vec<SourceFlow>,
}

/// Maximum flow from `source_tier` to `sink_tier`.
///
/// Aggregating a tier against itself is degenerate (every node would sit
/// on both sides); the flow value is reported as zero in that case.
///
/// # Errors
///
/// Returns [`NetworkError::EmptyTier`] if either tier has no members.
#[instrument(skip(topo))]
pub fn max_flow(topo: &Topology, source_tier: Tier, sink_tier: Tier) -> Result<FlowSummary> {
    let sources = topo.tier_members(source_tier);
    if sources.is_empty() {
        return Err(NetworkError::EmptyTier(source_tier));
    }
    let sinks = topo.tier_members(sink_tier);
    if sinks.is_empty() {
        return Err(NetworkError::EmptyTier(sink_tier));
    }

    if source_tier == sink_tier {
        debug!(tier = %source_tier, "flow from a tier to itself is degenerate");
        return Ok(FlowSummary {
            value: 0.0,
            per_source: sources.into_iter().map(|id| SourceFlow { id, flow: 0.0 }).collect(),
        });
    }

    let ids: Vec<&str> = topo.node_ids();
    let n = ids.len();
    let v_src = n;
    let v_sink = n + 1;
    let total = n + 2;

    let index = |id: &str| ids.binary_search(&id).ok();

    // Dense residual and flow matrices over nodes + the two virtual ends.
    let mut residual = vec![vec![0.0_f64; total]; total];
    let mut flow = vec![vec![0.0_f64; total]; total];

    for (src, dst, data) in topo.edges() {
        if let (Some(u), Some(v)) = (index(src), index(dst)) {
            residual[u][v] = data.capacity.unwrap_or(DEFAULT_EDGE_CAPACITY);
        }
    }
    for id in &sources {
        if let Some(u) = index(id) {
            let cap = topo.node(id).and_then(|node| node.capacity);
            residual[v_src][u] = cap.unwrap_or(f64::INFINITY);
        }
    }
    for id in &sinks {
        if let Some(u) = index(id) {
            let cap = topo.node(id).and_then(|node| node.capacity);
            residual[u][v_sink] = cap.unwrap_or(f64::INFINITY);
        }
    }

    let mut value = 0.0;
    while let Some(parent) = augmenting_path(&residual, v_src, v_sink) {
        // Bottleneck along the found path. Every path crosses at least
        // one real (finite-capacity) edge because the tiers are disjoint.
        let mut bottleneck = f64::INFINITY;
        let mut node = v_sink;
        while node != v_src {
            let from = parent[node];
            bottleneck = bottleneck.min(residual[from][node]);
            node = from;
        }

        let mut node = v_sink;
        while node != v_src {
            let from = parent[node];
            residual[from][node] -= bottleneck;
            residual[node][from] += bottleneck;
            flow[from][node] += bottleneck;
            flow[node][from] -= bottleneck;
            node = from;
        }
        value += bottleneck;
    }

    let per_source = sources
        .into_iter()
        .map(|id| {
            let outflow = index(&id).map_or(0.0, |u| flow[v_src][u].max(0.0));
            SourceFlow { id, flow: outflow }
        })
        .collect();

    Ok(FlowSummary { value, per_source })
}

/// BFS over positive residuals; returns the parent table when the sink
/// is reachable.
fn augmenting_path(residual: &[Vec<f64>], v_src: usize, v_sink: usize) -> Option<Vec<usize>> {
    let total = residual.len();
    let mut parent = vec![usize::MAX; total];
    let mut queue = VecDeque::new();

    parent[v_src] = v_src;
    queue.push_back(v_src);

    while let Some(node) = queue.pop_front() {
        for next in 0..total {
            if parent[next] == usize::MAX && residual[node][next] > RESIDUAL_EPS {
                parent[next] = node;
                if next == v_sink {
                    return Some(parent);
                }
                queue.push_back(next);
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
