//! The token ring network.
//!
//! A [`Network`] owns every node in a flat arena, remembers a distinguished
//! first node, and keeps a name index of the workstations that may issue
//! requests. Assembly happens through [`Network::add_node`],
//! [`Network::link`], [`Network::register_workstation`] and
//! [`Network::set_first_node`] (or the [`RingBuilder`](crate::RingBuilder)
//! wrapping them); the request operations are in the traversal module.

use crate::error::{Error, Inconsistency, Result};
use crate::node::{Format, Node, NodeId, NodeKind};
use crate::render;
use crate::ring::{RingBuilder, RingWalk};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Upper bound on the storage reserved from a size hint.
const MAX_RESERVED: usize = 1024;

/// A token ring of named nodes.
///
/// # Invariants
///
/// A network is *consistent* (see [`Network::check_consistency`]) when the
/// first node lies on a single cycle that holds at least one workstation and
/// one printer, and the workstation index names exactly the workstations on
/// that cycle.
#[derive(Clone, Debug)]
pub struct Network {
    nodes: Vec<Node>,
    first: Option<NodeId>,
    workstations: HashMap<String, NodeId>,
}

impl Network {
    /// Create an empty network expecting about `size` workstations.
    ///
    /// The result is initialized but not yet consistent. The hint only
    /// reserves storage, capped at a small fixed amount.
    ///
    /// # Panics
    /// If `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "network size hint must be positive");
        let reserved = size.min(MAX_RESERVED);
        let network = Self {
            nodes: Vec::with_capacity(reserved * 2),
            first: None,
            workstations: HashMap::with_capacity(reserved),
        };
        debug_assert!(network.is_initialized());
        debug_assert!(!network.is_consistent());
        network
    }

    /// The fixed four node ring used for experiments:
    ///
    /// ```text
    /// Workstation Filip -> Node n1 -> Workstation Hans -> Printer Andy -> (Filip)
    /// ```
    pub fn default_example() -> Self {
        let network = RingBuilder::with_capacity(2)
            .workstation("Filip")
            .node("n1")
            .workstation("Hans")
            .printer("Andy")
            .build();

        match network {
            Ok(network) => network,
            Err(err) => unreachable!("default example is consistent: {err}"),
        }
    }

    /// Always true: a `Network` only exists once construction succeeded.
    pub fn is_initialized(&self) -> bool {
        true
    }

    // ------------------------------------------------------------------
    // Assembly
    // ------------------------------------------------------------------

    /// Add an unlinked node to the arena.
    pub fn add_node(&mut self, name: impl Into<String>, kind: NodeKind) -> Result<NodeId> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.find(&name).is_some() {
            return Err(Error::DuplicateName(name));
        }

        let id = NodeId(self.nodes.len());
        tracing::trace!(%id, %name, %kind, "adding node");
        self.nodes.push(Node::new(name, kind));
        Ok(id)
    }

    /// Make `to` the successor of `from`.
    pub fn link(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check_id(to)?;
        let node = self
            .nodes
            .get_mut(from.0)
            .ok_or_else(|| Error::UnknownNode(from.to_string()))?;
        node.next = Some(to);
        Ok(())
    }

    /// Index `id` under its name as a workstation able to issue requests.
    ///
    /// Any node can be registered; [`Network::has_workstation`] and the
    /// consistency check only accept entries whose kind is workstation.
    pub fn register_workstation(&mut self, id: NodeId) -> Result<()> {
        let name = self.get(id)?.name.clone();
        self.workstations.insert(name, id);
        Ok(())
    }

    pub fn set_first_node(&mut self, id: NodeId) -> Result<()> {
        self.check_id(id)?;
        self.first = Some(id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn first_node(&self) -> Option<NodeId> {
        self.first
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Id of the node called `name`, whether or not it is on the ring.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.matches_name(name))
            .map(NodeId)
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Names of the registered workstations, sorted.
    pub fn workstation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.workstations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Index entry for `name`, if it is a registered workstation.
    pub(crate) fn workstation(&self, name: &str) -> Option<NodeId> {
        self.workstations
            .get(name)
            .copied()
            .filter(|&id| self.nodes[id.0].is_workstation())
    }

    /// Answer whether a workstation called `name` is registered.
    pub fn has_workstation(&self, name: &str) -> bool {
        self.workstation(name).is_some()
    }

    /// Walk the ring starting at `start`.
    pub fn walk(&self, start: NodeId) -> RingWalk<'_> {
        RingWalk::new(&self.nodes, start)
    }

    /// The node following `id` on the ring.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(Node::next)
    }

    pub fn is_consistent(&self) -> bool {
        self.check_consistency().is_ok()
    }

    /// Verify the network is a consistent token ring, naming the first
    /// rule it breaks.
    ///
    /// Terminates on any link structure: the walk records visited nodes and
    /// stops at the first revisit, which must be the first node.
    pub fn check_consistency(&self) -> std::result::Result<(), Inconsistency> {
        if self.workstations.is_empty() {
            return Err(Inconsistency::NoWorkstations);
        }
        let first = self.first.ok_or(Inconsistency::NoFirstNode)?;

        // Entries are keyed by the node's own name at registration.
        for &id in self.workstations.values() {
            let node = &self.nodes[id.0];
            if !node.is_workstation() {
                return Err(Inconsistency::NotAWorkstation(node.name.clone()));
            }
        }

        let mut encountered = HashSet::with_capacity(self.nodes.len());
        let mut printers = 0;
        let mut current = first;
        while encountered.insert(current) {
            let node = &self.nodes[current.0];
            match node.kind {
                NodeKind::Workstation => {
                    if self.workstations.get(&node.name) != Some(&current) {
                        return Err(Inconsistency::Unregistered(node.name.clone()));
                    }
                }
                NodeKind::Printer => printers += 1,
                NodeKind::Plain | NodeKind::Unknown => {}
            }
            current = node
                .next
                .ok_or_else(|| Inconsistency::BrokenLink(node.name.clone()))?;
        }

        if current != first {
            return Err(Inconsistency::NotCircular(self.nodes[current.0].name.clone()));
        }
        if printers == 0 {
            return Err(Inconsistency::NoPrinter);
        }
        if let Some(off_ring) = self.workstations.values().find(|id| !encountered.contains(*id)) {
            return Err(Inconsistency::OffRing(self.nodes[off_ring.0].name.clone()));
        }
        Ok(())
    }

    fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    fn check_id(&self, id: NodeId) -> Result<()> {
        self.get(id).map(|_| ())
    }
}

/// Plain-text rendering of the ring starting at the first node.
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first {
            Some(first) => f.write_str(&render::render(self, first, Format::Text)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_network_is_not_consistent() {
        let network = Network::new(2);
        assert!(network.is_initialized());
        assert!(network.is_empty());
        assert_eq!(network.check_consistency(), Err(Inconsistency::NoWorkstations));
    }

    #[test]
    #[should_panic(expected = "size hint must be positive")]
    fn test_new_rejects_zero_size() {
        Network::new(0);
    }

    #[test]
    fn test_new_with_huge_size_hint() {
        let network = Network::new(usize::MAX);
        assert!(network.is_initialized());
        assert!(network.is_empty());
        assert!(!network.is_consistent());
    }

    #[test]
    fn test_add_node_rejects_bad_names() {
        let mut network = Network::new(1);
        network.add_node("Filip", NodeKind::Workstation).unwrap();

        assert!(matches!(network.add_node("", NodeKind::Plain), Err(Error::EmptyName)));
        assert!(matches!(
            network.add_node("Filip", NodeKind::Printer),
            Err(Error::DuplicateName(name)) if name == "Filip"
        ));
        assert_eq!(network.len(), 1);
    }

    #[test]
    fn test_link_rejects_unknown_ids() {
        let mut network = Network::new(1);
        let a = network.add_node("a", NodeKind::Plain).unwrap();

        assert!(matches!(network.link(a, NodeId(7)), Err(Error::UnknownNode(_))));
        assert!(matches!(network.link(NodeId(7), a), Err(Error::UnknownNode(_))));
        assert!(matches!(network.set_first_node(NodeId(3)), Err(Error::UnknownNode(_))));
    }

    #[test]
    fn test_default_example() {
        let network = Network::default_example();
        assert!(network.is_consistent());
        assert_eq!(network.len(), 4);
        assert_eq!(network.first_node(), network.find("Filip"));
        assert_eq!(network.workstation_names(), vec!["Filip", "Hans"]);
    }

    #[test]
    fn test_display_renders_plain_text() {
        assert_eq!(
            Network::default_example().to_string(),
            "Workstation Filip [Workstation] -> Node n1 [Node] -> Workstation Hans [Workstation] -> Printer Andy [Printer] ->  ... "
        );
        assert_eq!(Network::new(1).to_string(), "");
    }
}
