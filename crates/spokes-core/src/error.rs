//! Typed error kinds for topology mutation and queries.
//!
//! Every failure the core can report is one of the [`NetworkError`] kinds
//! below, returned synchronously to the caller. There are no silent
//! defaults: an unreachable target is a [`NetworkError::NoPath`], never an
//! empty path. Invariant violations inside the engines (e.g. an adjacency
//! entry pointing at a removed node) are programming errors and are *not*
//! mapped to these kinds; they abort the request via debug assertions.
//!
//! Each kind carries a stable `E####` code for machine parsing in JSON
//! output, plus an optional remediation hint for operators.

use crate::topology::Tier;

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// All user-facing failure kinds reported by the core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// A node with this id already exists in the store.
    #[error("node `{0}` already exists")]
    DuplicateNode(String),

    /// The referenced node id is not present in the store.
    #[error("unknown node `{0}`")]
    UnknownNode(String),

    /// An edge insertion carried a negative weight.
    #[error("invalid weight {weight} on edge `{src}` -> `{dst}`: weights must be non-negative")]
    InvalidWeight {
        /// Source node id of the rejected edge.
        src: String,
        /// Target node id of the rejected edge.
        dst: String,
        /// The offending weight.
        weight: f64,
    },

    /// Source and target exist but no directed path connects them.
    #[error("no path from `{from}` to `{target}`")]
    NoPath {
        /// Requested path source.
        from: String,
        /// Requested path target.
        target: String,
    },

    /// No full matching exists without resorting to unreachable pairings.
    #[error("no feasible assignment from {from_tier} to {to_tier}: too few direct connections")]
    InfeasibleAssignment {
        /// Row tier of the cost matrix.
        from_tier: Tier,
        /// Column tier of the cost matrix.
        to_tier: Tier,
    },

    /// An assignment or flow query named a tier with zero members.
    #[error("tier `{0}` has no members")]
    EmptyTier(Tier),
}

impl NetworkError {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DuplicateNode(_) => "E1001",
            Self::UnknownNode(_) => "E1002",
            Self::InvalidWeight { .. } => "E1003",
            Self::NoPath { .. } => "E2001",
            Self::InfeasibleAssignment { .. } => "E2002",
            Self::EmptyTier(_) => "E2003",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::DuplicateNode(_) => Some("Use a fresh id, or update the existing node instead."),
            Self::UnknownNode(_) => Some("Check the node id against the current topology."),
            Self::InvalidWeight { .. } => Some("Transport costs must be zero or positive."),
            Self::NoPath { .. } => None,
            Self::InfeasibleAssignment { .. } => {
                Some("Add direct edges between the two tiers, or shrink the smaller tier.")
            }
            Self::EmptyTier(_) => Some("Populate the tier before running assignment or flow queries."),
        }
    }
}
