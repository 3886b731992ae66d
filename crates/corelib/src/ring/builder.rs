//! Builder wiring an ordered list of nodes into a token ring.

use crate::error::{Error, Result};
use crate::node::NodeKind;
use crate::Network;

/// Builds a consistent [`Network`] from nodes listed in ring order.
///
/// Each node is linked to the one added after it and the last node links
/// back to the first. Every workstation is registered, and the first node is
/// the first one added unless [`RingBuilder::first`] names another.
///
/// # Example
///
/// ```rust
/// use corelib::RingBuilder;
///
/// let network = RingBuilder::new()
///     .workstation("Filip")
///     .printer("Andy")
///     .build()
///     .unwrap();
/// assert!(network.has_workstation("Filip"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RingBuilder {
    nodes: Vec<(String, NodeKind)>,
    first: Option<String>,
    capacity: usize,
}

impl RingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hint for the number of workstations the network will index.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, name: impl Into<String>, kind: NodeKind) -> Self {
        self.nodes.push((name.into(), kind));
        self
    }

    pub fn node(self, name: impl Into<String>) -> Self {
        self.with_kind(name, NodeKind::Plain)
    }

    pub fn workstation(self, name: impl Into<String>) -> Self {
        self.with_kind(name, NodeKind::Workstation)
    }

    pub fn printer(self, name: impl Into<String>) -> Self {
        self.with_kind(name, NodeKind::Printer)
    }

    /// Use the node called `name` as the network's first node.
    pub fn first(mut self, name: impl Into<String>) -> Self {
        self.first = Some(name.into());
        self
    }

    /// Assemble the network and verify it is consistent.
    pub fn build(self) -> Result<Network> {
        let workstations = self
            .nodes
            .iter()
            .filter(|(_, kind)| *kind == NodeKind::Workstation)
            .count();
        let mut network = Network::new(self.capacity.max(workstations).max(1));

        let mut ids = Vec::with_capacity(self.nodes.len());
        for (name, kind) in self.nodes {
            let id = network.add_node(name, kind)?;
            if kind == NodeKind::Workstation {
                network.register_workstation(id)?;
            }
            ids.push(id);
        }

        for (&from, &to) in ids.iter().zip(ids.iter().cycle().skip(1)) {
            network.link(from, to)?;
        }

        let first = match self.first {
            Some(name) => Some(network.find(&name).ok_or(Error::UnknownNode(name))?),
            None => ids.first().copied(),
        };
        if let Some(first) = first {
            network.set_first_node(first)?;
        }

        network.check_consistency()?;
        tracing::debug!(nodes = network.len(), "assembled token ring");
        Ok(network)
    }
}
