//! Ring topology descriptions.
//!
//! A [`Topology`] lists the nodes of a token ring in ring order and can be
//! read from and written to JSON:
//!
//! ```json
//! {
//!   "first": "Filip",
//!   "nodes": [
//!     { "name": "Filip", "kind": "workstation" },
//!     { "name": "n1", "kind": "node" },
//!     { "name": "Hans", "kind": "workstation" },
//!     { "name": "Andy", "kind": "printer" }
//!   ]
//! }
//! ```

use crate::error::{Error, Result};
use crate::node::NodeKind;
use crate::ring::RingBuilder;
use crate::Network;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry of a topology description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default = "plain")]
    pub kind: NodeKind,
}

fn plain() -> NodeKind {
    NodeKind::Plain
}

/// Nodes of a ring in successor order, plus the node to start from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Name of the first node; defaults to the first listed node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    pub nodes: Vec<NodeSpec>,
}

impl Topology {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a topology description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading topology");
        Self::from_json(&json)
    }

    /// Describe a consistent network, starting at its first node.
    pub fn from_network(network: &Network) -> Result<Self> {
        network.check_consistency()?;
        let first = network
            .first_node()
            .ok_or_else(|| Error::Topology("network has no first node".into()))?;

        let nodes = network
            .walk(first)
            .map(|(_, node)| NodeSpec {
                name: node.name.clone(),
                kind: node.kind,
            })
            .collect();
        Ok(Self { first: None, nodes })
    }

    /// Wire the described ring into a consistent network.
    pub fn build(&self) -> Result<Network> {
        if self.nodes.is_empty() {
            return Err(Error::Topology("no nodes listed".into()));
        }

        let builder = self
            .nodes
            .iter()
            .fold(RingBuilder::new(), |builder, node| {
                builder.with_kind(node.name.clone(), node.kind)
            });
        match &self.first {
            Some(first) => builder.first(first.clone()).build(),
            None => builder.build(),
        }
    }
}
