//! Failure-simulated rerouting.
//!
//! Removes one node from a *private snapshot* of the topology, re-runs
//! the path engine, and reports the before/after comparison. The live
//! store is never mutated and nothing is restored — the snapshot is
//! dropped with the query.

use tracing::instrument;

use crate::error::{NetworkError, Result};
use crate::path::{Route, shortest_path};
use crate::topology::Topology;

/// Before/after comparison for one simulated node failure.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureOutcome {
    /// The node taken out of service.
    pub failed_node: String,
    /// Shortest route before the failure, if one existed.
    pub before: Option<Route>,
    /// Shortest route after the failure; `None` means the failure
    /// disconnected the pair.
    pub after: Option<Route>,
}

impl FailureOutcome {
    /// Percentage cost increase caused by the failure.
    ///
    /// `None` when either route is missing or the original route was
    /// free (a percentage of zero cost is undefined).
    #[must_use]
    pub fn cost_increase_pct(&self) -> Option<f64> {
        match (&self.before, &self.after) {
            (Some(before), Some(after)) if before.cost > 0.0 => {
                Some((after.cost - before.cost) / before.cost * 100.0)
            }
            _ => None,
        }
    }

    /// True when the pair was routable before but not after the failure.
    #[must_use]
    pub const fn disconnected(&self) -> bool {
        self.before.is_some() && self.after.is_none()
    }
}

/// Simulate the failure of `node_id` for the `source -> target` relation.
///
/// Failing the source or target itself is a legal scenario and reports
/// as disconnection, not as an error.
///
/// # Errors
///
/// Returns [`NetworkError::UnknownNode`] if `node_id`, `source`, or
/// `target` is absent from the live topology.
#[instrument(skip(topo))]
pub fn simulate_failure(
    topo: &Topology,
    node_id: &str,
    source: &str,
    target: &str,
) -> Result<FailureOutcome> {
    for id in [node_id, source, target] {
        if !topo.contains(id) {
            return Err(NetworkError::UnknownNode(id.to_owned()));
        }
    }

    let before = match shortest_path(topo, source, target) {
        Ok(route) => Some(route),
        Err(NetworkError::NoPath { .. }) => None,
        Err(err) => return Err(err),
    };

    // Disposable working copy; the live store stays untouched.
    let mut working = topo.snapshot();
    working.remove_node(node_id)?;

    let after = if node_id == source || node_id == target {
        None
    } else {
        match shortest_path(&working, source, target) {
            Ok(route) => Some(route),
            Err(NetworkError::NoPath { .. }) => None,
            Err(err) => return Err(err),
        }
    };

    Ok(FailureOutcome {
        failed_node: node_id.to_owned(),
        before,
        after,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
