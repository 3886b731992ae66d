//! Core library for the token ring LAN simulation.
//!
//! This crate provides the fundamental abstractions for the simulation:
//! - Nodes and their kinds (plain node, workstation, printer)
//! - Packets and printer accounting
//! - The network arena and its consistency rules
//! - Broadcast and print traversal of the ring
//! - Plain text, HTML and XML renderings
//! - JSON topology descriptions

pub mod error;
pub mod network;
pub mod node;
pub mod packet;
pub mod render;
pub mod ring;
pub mod topology;
mod traversal;

pub use error::{Error, Inconsistency, Result};
pub use network::Network;
pub use node::{Format, Node, NodeId, NodeKind};
pub use packet::Packet;
pub use ring::{RingBuilder, RingWalk};
pub use topology::Topology;
