//! Shortest-path engine: Dijkstra and Yen's ranked alternatives.
//!
//! # Overview
//!
//! Two entry points:
//!
//! - [`shortest_path`] — single-source Dijkstra over the topology store,
//!   with a documented deterministic tie-break.
//! - [`k_shortest_paths`] — Yen's algorithm for up to `k` ranked simple
//!   paths, built on [`shortest_path_masked`] and a [`RouteMask`] overlay
//!   instead of mutate-and-restore.
//!
//! Both borrow the store read-only and return self-contained [`Route`]
//! values (ids and cost, no live references).
//!
//! [`RouteMask`]: crate::topology::RouteMask

pub mod dijkstra;
pub mod yen;

pub use dijkstra::{Route, shortest_path, shortest_path_masked};
pub use yen::k_shortest_paths;
