//! Token ring structure helpers.
//!
//! The ring itself is stored in the [`Network`](crate::Network) arena; this
//! module provides the shared walk over it and a builder that wires a ring
//! from an ordered list of nodes.

pub mod builder;
pub mod walk;

pub use builder::RingBuilder;
pub use walk::RingWalk;
