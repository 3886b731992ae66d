//! Command-line configuration.

use crate::commands::{Command, CommandResult};
use anyhow::Context;
use clap::{ArgAction, Parser};
use corelib::{Network, Topology};
use std::path::PathBuf;
use tracing::Level;

/// Simulate requests on a token ring LAN.
#[derive(Debug, Parser)]
#[command(name = "lan-sim", version)]
pub struct CliConfig {
    /// JSON topology file; the built-in example ring is used when omitted
    #[arg(short, long, global = true, value_name = "FILE")]
    pub topology: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// The network to run the command against.
    pub fn network(&self) -> anyhow::Result<Network> {
        let Some(path) = &self.topology else {
            return Ok(Network::default_example());
        };

        let topology = Topology::load(path)
            .with_context(|| format!("failed to read topology {}", path.display()))?;
        topology
            .build()
            .with_context(|| format!("topology {} is not a usable ring", path.display()))
    }

    pub fn run(&self) -> anyhow::Result<CommandResult> {
        let network = self.network()?;
        tracing::debug!(nodes = network.len(), command = ?self.command, "running command");
        self.command.execute(&network)
    }
}
