//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling or loading a network.
///
/// Request operations never return these; a print job that cannot be
/// delivered is reported through its `false` return value and the trace.
#[derive(Debug, Error)]
pub enum Error {
    /// Node names must be non-empty
    #[error("Invalid node: name must not be empty")]
    EmptyName,
    /// Node names are unique within a network
    #[error("Invalid node: duplicate name '{0}'")]
    DuplicateName(String),
    /// Reference to a node that is not part of the network
    #[error("Invalid node: unknown node '{0}'")]
    UnknownNode(String),
    /// The assembled ring violates a consistency rule
    #[error("Inconsistent network: {0}")]
    Inconsistent(#[from] Inconsistency),
    /// Topology description is structurally invalid
    #[error("Topology error: {0}")]
    Topology(String),
    /// Topology description is not valid JSON
    #[error("Topology parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Reading a topology file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The consistency rule a network breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Inconsistency {
    #[error("no first node on the ring")]
    NoFirstNode,
    #[error("no workstations registered")]
    NoWorkstations,
    #[error("node '{0}' has no successor")]
    BrokenLink(String),
    #[error("ring revisits '{0}' before returning to the first node")]
    NotCircular(String),
    #[error("ring contains no printer")]
    NoPrinter,
    #[error("registered node '{0}' is not a workstation")]
    NotAWorkstation(String),
    #[error("registered workstation '{0}' is not on the ring")]
    OffRing(String),
    #[error("workstation '{0}' on the ring is not registered")]
    Unregistered(String),
}
