#![forbid(unsafe_code)]
//! spokes-core: graph analytics for multi-tier logistics networks.
//!
//! # Overview
//!
//! The core models a logistics network as a directed, weighted graph and
//! answers four classes of queries against it:
//!
//! - single-source shortest cost path ([`path::shortest_path`])
//! - ranked alternative routes ([`path::k_shortest_paths`])
//! - minimum-cost bipartite tier assignment ([`assign`])
//! - criticality/resilience analysis ([`resilience`]: betweenness
//!   centrality, tier-aggregated max flow, failure-simulated rerouting)
//!
//! # Pipeline
//!
//! ```text
//! seed::default_network() / config::load_network()
//!        ↓
//! topology::Topology (mutable store, explicit handle — no globals)
//!        ↓  query::* facade
//! RouteReport / AssignmentReport / CentralityRanking / FlowReport /
//! FailureReport / NetworkStats  (self-contained, serializable records)
//! ```
//!
//! Engines borrow the store read-only for the duration of one query and
//! never retain references across mutations. Yen's algorithm and failure
//! simulation operate on a [`topology::RouteMask`] overlay or a private
//! snapshot, so read-only queries stay safe against a stable topology.
//!
//! # Conventions
//!
//! - **Errors**: typed [`error::NetworkError`] kinds via `thiserror`;
//!   `anyhow::Result` with context only at I/O boundaries (config files).
//! - **Logging**: `tracing` macros and `#[instrument]` on engine entry
//!   points; subscribers are installed by the embedding application.

pub mod assign;
pub mod config;
pub mod error;
pub mod path;
pub mod query;
pub mod resilience;
pub mod seed;
pub mod stats;
pub mod topology;

pub use error::{NetworkError, Result};
pub use topology::{Tier, Topology};
