//! Subcommands and their execution.

use anyhow::{bail, ensure, Context};
use clap::{Subcommand, ValueEnum};
use corelib::{Format, Network, Topology};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Broadcast a packet from the first node around the whole ring
    Broadcast,
    /// Ask a workstation to print a document on a printer
    Print {
        workstation: String,
        document: String,
        printer: String,
    },
    /// Render the ring
    Render {
        #[arg(short, long, value_enum, default_value_t = RenderFormat::Text)]
        format: RenderFormat,
        /// Node to start from; defaults to the first node
        #[arg(short, long)]
        start: Option<String>,
    },
    /// Check that the network is a consistent token ring
    Check,
    /// Write the ring as a JSON topology
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Text,
    Html,
    Xml,
}

impl From<RenderFormat> for Format {
    fn from(format: RenderFormat) -> Self {
        match format {
            RenderFormat::Text => Format::Text,
            RenderFormat::Html => Format::Html,
            RenderFormat::Xml => Format::Xml,
        }
    }
}

/// What a command printed and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub output: String,
    pub success: bool,
}

impl CommandResult {
    fn new(output: String, success: bool) -> Self {
        Self { output, success }
    }
}

impl Command {
    pub fn execute(&self, network: &Network) -> anyhow::Result<CommandResult> {
        match self {
            Command::Broadcast => {
                ensure_consistent(network)?;
                let mut sink = Vec::new();
                let success = network.request_broadcast(&mut sink);
                Ok(CommandResult::new(into_string(sink), success))
            }
            Command::Print {
                workstation,
                document,
                printer,
            } => {
                ensure_consistent(network)?;
                ensure!(
                    network.has_workstation(workstation),
                    "'{workstation}' is not a registered workstation"
                );
                let mut sink = Vec::new();
                let success = network.request_print(workstation, document, printer, &mut sink);
                Ok(CommandResult::new(into_string(sink), success))
            }
            Command::Render { format, start } => {
                let start = match start {
                    Some(name) => match network.find(name) {
                        Some(id) => id,
                        None => bail!("no node called '{name}'"),
                    },
                    None => network.first_node().context("network has no first node")?,
                };
                let mut output = corelib::render::render(network, start, (*format).into());
                if !output.ends_with('\n') {
                    output.push('\n');
                }
                Ok(CommandResult::new(output, true))
            }
            Command::Check => Ok(match network.check_consistency() {
                Ok(()) => CommandResult::new(
                    format!(
                        "consistent token ring of {} nodes; workstations: {}\n",
                        network.len(),
                        network.workstation_names().join(", ")
                    ),
                    true,
                ),
                Err(reason) => CommandResult::new(format!("inconsistent: {reason}\n"), false),
            }),
            Command::Export => {
                let mut output = Topology::from_network(network)?.to_json()?;
                output.push('\n');
                Ok(CommandResult::new(output, true))
            }
        }
    }
}

fn ensure_consistent(network: &Network) -> anyhow::Result<()> {
    network
        .check_consistency()
        .context("network is not a consistent token ring")
}

fn into_string(trace: Vec<u8>) -> String {
    String::from_utf8_lossy(&trace).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::NodeKind;

    fn print(workstation: &str, printer: &str) -> Command {
        Command::Print {
            workstation: workstation.into(),
            document: "hello".into(),
            printer: printer.into(),
        }
    }

    #[test]
    fn test_broadcast() {
        let result = Command::Broadcast.execute(&Network::default_example()).unwrap();
        assert!(result.success);
        assert!(result.output.starts_with("Broadcast Request\n"));
        assert_eq!(result.output.matches("accepts broadcase packet.").count(), 4);
    }

    #[test]
    fn test_print_delivered() {
        let result = print("Filip", "Andy").execute(&Network::default_example()).unwrap();
        assert!(result.success);
        assert!(result.output.contains(">>> ASCII Print job delivered."));
    }

    #[test]
    fn test_print_not_found() {
        let result = print("Filip", "Ghost").execute(&Network::default_example()).unwrap();
        assert!(!result.success);
        assert!(result.output.contains("Destinition not found"));
    }

    #[test]
    fn test_print_from_unregistered_workstation() {
        let err = print("Andy", "Andy").execute(&Network::default_example()).unwrap_err();
        assert_eq!(err.to_string(), "'Andy' is not a registered workstation");
    }

    #[test]
    fn test_requests_on_inconsistent_network() {
        let mut network = Network::new(1);
        network.add_node("w", NodeKind::Workstation).unwrap();

        let err = Command::Broadcast.execute(&network).unwrap_err();
        assert!(err.to_string().contains("not a consistent token ring"));
        assert!(print("w", "p").execute(&network).is_err());
    }

    #[test]
    fn test_render_formats() {
        let network = Network::default_example();
        let render = |format, start: Option<&str>| {
            Command::Render {
                format,
                start: start.map(str::to_owned),
            }
            .execute(&network)
            .map(|result| result.output)
        };

        assert!(render(RenderFormat::Text, None)
            .unwrap()
            .starts_with("Workstation Filip [Workstation] -> "));
        assert!(render(RenderFormat::Text, Some("Andy"))
            .unwrap()
            .starts_with("Printer Andy [Printer] -> "));
        assert!(render(RenderFormat::Xml, None).unwrap().contains("<network>"));
        assert!(render(RenderFormat::Html, None).unwrap().contains("<UL>"));
        assert!(render(RenderFormat::Text, Some("Ghost")).is_err());
    }

    #[test]
    fn test_check() {
        let result = Command::Check.execute(&Network::default_example()).unwrap();
        assert!(result.success);
        assert_eq!(
            result.output,
            "consistent token ring of 4 nodes; workstations: Filip, Hans\n"
        );

        let result = Command::Check.execute(&Network::new(1)).unwrap();
        assert!(!result.success);
        assert_eq!(result.output, "inconsistent: no workstations registered\n");
    }

    #[test]
    fn test_export_round_trips() {
        let result = Command::Export.execute(&Network::default_example()).unwrap();
        let network = Topology::from_json(&result.output).unwrap().build().unwrap();
        assert_eq!(network.to_string(), Network::default_example().to_string());
    }
}
