//! The adjacency-list topology store.
//!
//! Nodes are keyed by string id. Outgoing edges live in per-node vectors
//! that preserve insertion order — the path engine's tie-break contract
//! ("first-inserted neighbor wins on equal cost") rests on that ordering.
//! Incoming edges are not indexed; `in_degree` and node removal scan the
//! adjacency lists, which is O(E) and acceptable at logistics-network
//! scale.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NetworkError, Result};

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// The role class of a node, ordered by flow direction through the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Origin of goods (`S*` in the canonical network).
    Supplier,
    /// Bulk storage (`W*`).
    Warehouse,
    /// Distribution center (`D*`).
    Distribution,
    /// Regional transshipment hub (`H*`).
    Hub,
    /// Retail endpoint (`R*`).
    Store,
}

impl Tier {
    /// All tiers in flow order.
    pub const ALL: [Self; 5] = [
        Self::Supplier,
        Self::Warehouse,
        Self::Distribution,
        Self::Hub,
        Self::Store,
    ];

    /// Lowercase name as used in config files and CLI arguments.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Supplier => "supplier",
            Self::Warehouse => "warehouse",
            Self::Distribution => "distribution",
            Self::Hub => "hub",
            Self::Store => "store",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "supplier" => Ok(Self::Supplier),
            "warehouse" => Ok(Self::Warehouse),
            "distribution" => Ok(Self::Distribution),
            "hub" => Ok(Self::Hub),
            "store" => Ok(Self::Store),
            other => Err(format!(
                "unknown tier `{other}` (expected supplier, warehouse, distribution, hub, or store)"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Node / EdgeData
// ---------------------------------------------------------------------------

/// Attributes of a node. Identity lives in the store's key, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Role class of the node.
    pub tier: Tier,
    /// Optional throughput capacity, consumed by flow queries.
    pub capacity: Option<f64>,
}

/// Attributes of a directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeData {
    /// Transport cost; non-negative by store invariant.
    pub weight: f64,
    /// Optional flow capacity; flow queries substitute a default if unset.
    pub capacity: Option<f64>,
}

// ---------------------------------------------------------------------------
// Topology
// ---------------------------------------------------------------------------

/// The mutable network: tier-tagged nodes plus directed weighted edges.
///
/// The store is the sole owner of graph state. Query engines borrow it
/// read-only; mutation goes through the five operations below. Cloning
/// (or [`Topology::snapshot`]) yields a fully independent copy suitable
/// for private mutation, e.g. failure simulation.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    nodes: HashMap<String, Node>,
    outgoing: HashMap<String, Vec<(String, EdgeData)>>,
    edge_count: usize,
}

impl Topology {
    /// Create an empty topology.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- mutation -----------------------------------------------------------

    /// Insert a node.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::DuplicateNode`] if the id is already present.
    pub fn add_node(&mut self, id: impl Into<String>, tier: Tier, capacity: Option<f64>) -> Result<()> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(NetworkError::DuplicateNode(id));
        }
        self.nodes.insert(id, Node { tier, capacity });
        Ok(())
    }

    /// Remove a node and cascade to all incident edges.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownNode`] if the id is absent.
    pub fn remove_node(&mut self, id: &str) -> Result<()> {
        if self.nodes.remove(id).is_none() {
            return Err(NetworkError::UnknownNode(id.to_owned()));
        }

        if let Some(out) = self.outgoing.remove(id) {
            self.edge_count -= out.len();
        }

        // Incoming edges are not indexed; scan every adjacency list.
        for targets in self.outgoing.values_mut() {
            let before = targets.len();
            targets.retain(|(dst, _)| dst != id);
            self.edge_count -= before - targets.len();
        }

        debug!(node = id, "removed node with incident edges");
        Ok(())
    }

    /// Insert a directed edge, or overwrite the existing one.
    ///
    /// Duplicate insertion for the same ordered pair is an update
    /// (last-write-wins on weight and capacity), never a second edge.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownNode`] if either endpoint is absent,
    /// or [`NetworkError::InvalidWeight`] if the weight is negative or not
    /// finite.
    pub fn add_edge(&mut self, src: &str, dst: &str, weight: f64, capacity: Option<f64>) -> Result<()> {
        if !self.nodes.contains_key(src) {
            return Err(NetworkError::UnknownNode(src.to_owned()));
        }
        if !self.nodes.contains_key(dst) {
            return Err(NetworkError::UnknownNode(dst.to_owned()));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(NetworkError::InvalidWeight {
                src: src.to_owned(),
                dst: dst.to_owned(),
                weight,
            });
        }

        let data = EdgeData { weight, capacity };
        let targets = self.outgoing.entry(src.to_owned()).or_default();

        if let Some((_, existing)) = targets.iter_mut().find(|(to, _)| to == dst) {
            *existing = data;
        } else {
            targets.push((dst.to_owned(), data));
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Remove a directed edge. A no-op (not an error) if the edge is
    /// absent, which keeps failure-simulation rollback trivial.
    pub fn remove_edge(&mut self, src: &str, dst: &str) {
        if let Some(targets) = self.outgoing.get_mut(src)
            && let Some(pos) = targets.iter().position(|(to, _)| to == dst)
        {
            targets.remove(pos);
            self.edge_count -= 1;
        }
    }

    // -- read access --------------------------------------------------------

    /// Outgoing `(target, weight)` pairs in insertion order. Empty — never
    /// an error — for a node with no outgoing edges or an unknown id.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.outgoing
            .get(id)
            .into_iter()
            .flatten()
            .map(|(dst, data)| (dst.as_str(), data.weight))
    }

    /// An independent deep copy of the full node/edge sets.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Whether a node with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Attributes of a node, if present.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All node ids, sorted ascending for deterministic iteration.
    #[must_use]
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Ids of all nodes in a tier, sorted ascending.
    #[must_use]
    pub fn tier_members(&self, tier: Tier) -> Vec<String> {
        let mut members: Vec<String> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.tier == tier)
            .map(|(id, _)| id.clone())
            .collect();
        members.sort_unstable();
        members
    }

    /// Attributes of the edge `src -> dst`, if present.
    #[must_use]
    pub fn edge(&self, src: &str, dst: &str) -> Option<&EdgeData> {
        self.outgoing
            .get(src)?
            .iter()
            .find(|(to, _)| to == dst)
            .map(|(_, data)| data)
    }

    /// Weight of the edge `src -> dst`, if present.
    #[must_use]
    pub fn edge_weight(&self, src: &str, dst: &str) -> Option<f64> {
        self.edge(src, dst).map(|data| data.weight)
    }

    /// Iterate over all edges as `(src, dst, data)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &EdgeData)> + '_ {
        self.outgoing.iter().flat_map(|(src, targets)| {
            targets
                .iter()
                .map(move |(dst, data)| (src.as_str(), dst.as_str(), data))
        })
    }

    /// Outgoing edge count of a node (0 for unknown ids).
    #[must_use]
    pub fn out_degree(&self, id: &str) -> usize {
        self.outgoing.get(id).map_or(0, Vec::len)
    }

    /// Incoming edge count of a node (0 for unknown ids). O(E) scan.
    #[must_use]
    pub fn in_degree(&self, id: &str) -> usize {
        self.outgoing
            .values()
            .flatten()
            .filter(|(dst, _)| dst == id)
            .count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
