//! Layered display coordinates for drawing collaborators.
//!
//! Assigns one column per tier (flow order, left to right) and spreads
//! each tier's members vertically around the axis, with a per-tier gap
//! tuned so dense tiers (stores) pack tighter than sparse ones. Pure
//! data out: node id, tier, x, y — the core's algorithms never see any
//! of this.

use serde::Serialize;

use spokes_core::topology::{Tier, Topology};

/// Display coordinates for one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePosition {
    /// Node id.
    pub id: String,
    /// Tier tag, for styling decisions downstream.
    pub tier: Tier,
    /// Column position (tier index spacing).
    pub x: f64,
    /// Row position, centered on zero per column.
    pub y: f64,
}

/// Horizontal spacing between tier columns.
const COLUMN_X: [f64; 5] = [0.0, 4.0, 8.0, 12.0, 16.0];

/// Vertical gap between members within each tier column.
const ROW_GAP: [f64; 5] = [2.0, 2.2, 2.3, 2.5, 1.6];

/// Compute layered positions for every node, ordered by tier column and
/// id.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layered_positions(topo: &Topology) -> Vec<NodePosition> {
    let mut positions = Vec::with_capacity(topo.node_count());

    for (column, tier) in Tier::ALL.into_iter().enumerate() {
        let members = topo.tier_members(tier);
        let count = members.len();
        for (row, id) in members.into_iter().enumerate() {
            let y = (row as f64 - (count.saturating_sub(1)) as f64 / 2.0) * ROW_GAP[column];
            positions.push(NodePosition {
                id,
                tier,
                x: COLUMN_X[column],
                y,
            });
        }
    }

    positions
}
