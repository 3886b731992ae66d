//! Command-line front end for the token ring LAN simulation.
//!
//! Provides commands for:
//! - Broadcasting a packet around the ring
//! - Submitting print jobs from a workstation
//! - Rendering the ring as text, HTML or XML
//! - Checking and exporting ring topologies

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult, RenderFormat};
pub use config::CliConfig;
