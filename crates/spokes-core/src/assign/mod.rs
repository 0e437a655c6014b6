//! Minimum-cost bipartite tier assignment.
//!
//! # Overview
//!
//! Builds a direct-edge cost matrix between two node tiers
//! ([`matrix::build_cost_matrix`]) and solves minimum-cost matching over
//! it with the Hungarian method ([`hungarian::solve_rectangular`]).
//! Tiers need not be equal size: `min(|A|, |B|)` pairs are matched and
//! the surplus side stays unmatched.
//!
//! Missing direct edges enter the matrix as [`matrix::UNREACHABLE_COST`],
//! a sentinel strictly above any achievable real total, so the solver
//! only ever picks one when no sentinel-free matching exists — which is
//! reported as [`NetworkError::InfeasibleAssignment`] rather than a
//! silently inflated cost.

pub mod hungarian;
pub mod matrix;

use tracing::instrument;

use crate::error::{NetworkError, Result};
use crate::topology::{Tier, Topology};

pub use matrix::{CostMatrix, UNREACHABLE_COST, build_cost_matrix};

/// One matched `(from, to, cost)` pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPair {
    /// Tier-A node id.
    pub from: String,
    /// Tier-B node id.
    pub to: String,
    /// Direct edge weight of the pairing.
    pub cost: f64,
}

/// The solved assignment: pairs ordered by tier-A id, plus total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Matching {
    /// Matched pairs, ascending by `from` id.
    pub pairs: Vec<MatchedPair>,
    /// Sum of the matched pair costs.
    pub total_cost: f64,
}

/// Minimum-cost assignment of `tier_a` members to `tier_b` members over
/// direct edges.
///
/// # Errors
///
/// Returns [`NetworkError::EmptyTier`] if either tier has no members, or
/// [`NetworkError::InfeasibleAssignment`] if every full matching would
/// need a pairing with no direct edge.
#[instrument(skip(topo))]
pub fn optimal_assignment(topo: &Topology, tier_a: Tier, tier_b: Tier) -> Result<Matching> {
    let matrix = build_cost_matrix(topo, tier_a, tier_b)?;
    let matched = hungarian::solve_rectangular(&matrix.costs);

    let mut pairs = Vec::with_capacity(matched.len());
    let mut total_cost = 0.0;

    for (row, col) in matched {
        let cost = matrix.costs[row][col];
        if cost >= UNREACHABLE_COST {
            return Err(NetworkError::InfeasibleAssignment {
                from_tier: tier_a,
                to_tier: tier_b,
            });
        }
        total_cost += cost;
        pairs.push(MatchedPair {
            from: matrix.rows[row].clone(),
            to: matrix.cols[col].clone(),
            cost,
        });
    }

    pairs.sort_unstable_by(|a, b| a.from.cmp(&b.from));
    Ok(Matching { pairs, total_cost })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
