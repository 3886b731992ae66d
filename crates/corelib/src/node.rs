//! Node abstractions for the token ring.
//!
//! Nodes live in a flat arena owned by the [`Network`](crate::Network) and are
//! identified by a compact `NodeId` index. The successor link is such an
//! index, so the ring never needs shared ownership.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// Compact identifier for a node in the network arena.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node is able to do on the ring.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Only forwards packets.
    #[serde(rename = "node", alias = "plain")]
    Plain,
    /// May originate requests; registered by name in the network.
    Workstation,
    /// May be the destination of a print job.
    Printer,
    /// Kind string not recognised when loading a topology. Forwards like a
    /// plain node and renders the fallback label.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Plain => "Node",
            NodeKind::Workstation => "Workstation",
            NodeKind::Printer => "Printer",
            NodeKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Output format for a node label.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Format {
    /// `Workstation Filip [Workstation]`
    #[default]
    Text,
    /// `<workstation>Filip</workstation>` inside an HTML list item
    Html,
    /// `<workstation>Filip</workstation>` inside the `<network>` element
    Xml,
}

/// A member of the token ring.
#[derive(Clone, Debug)]
pub struct Node {
    /// Unique name within the network.
    pub name: String,
    pub kind: NodeKind,
    /// Successor on the ring; `None` until the ring is wired.
    pub(crate) next: Option<NodeId>,
}

impl Node {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            next: None,
        }
    }

    /// Successor on the ring, if wired.
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub fn is_workstation(&self) -> bool {
        self.kind == NodeKind::Workstation
    }

    pub fn is_printer(&self) -> bool {
        self.kind == NodeKind::Printer
    }

    /// True iff `name` is this node's name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name
    }

    /// Trace line for a node forwarding a packet to its successor.
    pub fn log_pass_through<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "\tNode '{}' passes packet on.", self.name)?;
        sink.flush()
    }

    /// Trace line for a node receiving a broadcast. The spelling is part of
    /// the trace format.
    pub fn accept_broadcast<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "\tNode '{}' accepts broadcase packet.", self.name)
    }

    /// Append the kind-specific label for this node.
    pub fn render_label(&self, buf: &mut String, format: Format) {
        let tagged = format != Format::Text;
        let (word, tag) = match self.kind {
            NodeKind::Plain => ("Node", "node"),
            NodeKind::Workstation => ("Workstation", "workstation"),
            NodeKind::Printer => ("Printer", "printer"),
            NodeKind::Unknown => {
                buf.push_str(match format {
                    Format::Html => "(Unexpected)",
                    Format::Text | Format::Xml => "<unknown></unknown>",
                });
                return;
            }
        };

        if tagged {
            buf.push('<');
            buf.push_str(tag);
            buf.push('>');
            buf.push_str(&self.name);
            buf.push_str("</");
            buf.push_str(tag);
            buf.push('>');
        } else {
            buf.push_str(word);
            buf.push(' ');
            buf.push_str(&self.name);
            buf.push_str(" [");
            buf.push_str(word);
            buf.push(']');
        }
    }
}
