//! CLI entry point for lan-sim.

use clap::Parser;
use cli::CliConfig;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let config = CliConfig::parse();
    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    let result = config.run()?;
    print!("{}", result.output);
    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
