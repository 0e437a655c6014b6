//! TOML-backed network definitions.
//!
//! Embedding applications can describe a topology as data instead of
//! code:
//!
//! ```toml
//! [[nodes]]
//! id = "S1"
//! tier = "supplier"
//!
//! [[nodes]]
//! id = "W1"
//! tier = "warehouse"
//! capacity = 250.0
//!
//! [[edges]]
//! src = "S1"
//! dst = "W1"
//! weight = 10.0
//! ```
//!
//! Definitions pass through the same store validation as the
//! programmatic API: unknown endpoints, duplicate ids, and negative
//! weights are rejected, not patched up.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::topology::{Tier, Topology};

/// One node entry of a network definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDef {
    /// Unique node id.
    pub id: String,
    /// Tier tag, lowercase (`supplier`, `warehouse`, ...).
    pub tier: Tier,
    /// Optional throughput capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
}

/// One edge entry of a network definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDef {
    /// Source node id.
    pub src: String,
    /// Target node id.
    pub dst: String,
    /// Transport cost; must be non-negative.
    pub weight: f64,
    /// Optional flow capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
}

/// A declarative network definition, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Node entries; ids must be unique.
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    /// Edge entries; endpoints must appear in `nodes`.
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

impl NetworkConfig {
    /// Materialize the definition into a topology.
    ///
    /// # Errors
    ///
    /// Propagates the store's validation failures: duplicate node ids,
    /// unknown edge endpoints, negative weights.
    pub fn into_topology(self) -> crate::error::Result<Topology> {
        let mut topo = Topology::new();
        for node in self.nodes {
            topo.add_node(node.id, node.tier, node.capacity)?;
        }
        for edge in self.edges {
            topo.add_edge(&edge.src, &edge.dst, edge.weight, edge.capacity)?;
        }
        Ok(topo)
    }

    /// Export a topology back into definition form, sorted by id for
    /// stable output.
    #[must_use]
    pub fn from_topology(topo: &Topology) -> Self {
        let nodes = topo
            .node_ids()
            .into_iter()
            .filter_map(|id| {
                topo.node(id).map(|node| NodeDef {
                    id: id.to_owned(),
                    tier: node.tier,
                    capacity: node.capacity,
                })
            })
            .collect();

        let mut edges: Vec<EdgeDef> = topo
            .edges()
            .map(|(src, dst, data)| EdgeDef {
                src: src.to_owned(),
                dst: dst.to_owned(),
                weight: data.weight,
                capacity: data.capacity,
            })
            .collect();
        edges.sort_unstable_by(|a, b| (&a.src, &a.dst).cmp(&(&b.src, &b.dst)));

        Self { nodes, edges }
    }
}

/// Read and materialize a TOML network definition from disk.
///
/// # Errors
///
/// Fails with context if the file cannot be read, does not parse as a
/// network definition, or fails store validation.
pub fn load_network(path: &Path) -> Result<Topology> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: NetworkConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    config
        .into_topology()
        .with_context(|| format!("Invalid network definition in {}", path.display()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
