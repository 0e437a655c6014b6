//! Mutable network topology and its read-only overlays.
//!
//! # Overview
//!
//! This module owns the network: tier-tagged nodes and directed, weighted
//! edges, held in an explicit adjacency-list store. Every query engine in
//! the crate reads the topology through this module; nothing else holds
//! graph state.
//!
//! ## Pipeline
//!
//! ```text
//! store::Topology           mutable owner (add/remove nodes and edges)
//!        ↓ neighbors()      O(out-degree) iteration, insertion order kept
//! path/assign/resilience    read-only borrows for the span of one query
//!        ↓ mask::RouteMask  copy-on-write overlay (Yen deviations,
//!                           failure probes) — the store never mutates
//!        ↓ snapshot()       deep copy for private mutation
//! ```
//!
//! ## Invariants
//!
//! - Every edge endpoint references a node present in the node set;
//!   inserting an edge with an unknown endpoint fails.
//! - Weights are non-negative (Dijkstra correctness depends on this).
//! - At most one edge per ordered `(src, dst)` pair; re-insertion
//!   overwrites weight and capacity, last write wins.
//! - A node's outgoing edges iterate in insertion order; the path engine's
//!   deterministic tie-break depends on this.

pub mod mask;
pub mod store;

pub use mask::RouteMask;
pub use store::{EdgeData, Node, Tier, Topology};
