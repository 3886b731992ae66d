//! Iteration over the ring in successor order.

use crate::node::{Node, NodeId};

/// Iterator over node ids from a start node until the start would be
/// visited again.
///
/// The walk is bounded by the arena size, so it terminates even when the
/// links do not close into a cycle through the start node.
#[derive(Clone, Debug)]
pub struct RingWalk<'a> {
    nodes: &'a [Node],
    start: NodeId,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a> RingWalk<'a> {
    pub(crate) fn new(nodes: &'a [Node], start: NodeId) -> Self {
        let current = (start.0 < nodes.len()).then_some(start);
        Self {
            nodes,
            start,
            current,
            remaining: nodes.len(),
        }
    }
}

impl<'a> Iterator for RingWalk<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.current?;
        let node = self.nodes.get(id.0)?;
        self.remaining -= 1;
        self.current = node.next.filter(|&next| next != self.start);
        Some((id, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(_) => (0, Some(self.remaining)),
            None => (0, Some(0)),
        }
    }
}
