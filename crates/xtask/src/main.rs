//! Development tasks for scenario authoring
//!
//! This binary operates on a persisted link store snapshot.
//! Run with: `cargo run -p xtask -- <command>`

mod commands;
mod store;

use anyhow::Result;
use clap::Parser;
use commands::{Audit, Clean, Graph, RebuildIcons, Summary};

/// Development tasks for scenario authoring
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for scenario stores", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print the location graph of a scenario
    Graph(Graph),

    /// Compare stored card icons with their projection
    Audit(Audit),

    /// Project every skill test and card link icon set again
    RebuildIcons(RebuildIcons),

    /// Show row counts and scenarios in the store
    Summary(Summary),

    /// Delete the store snapshot
    Clean(Clean),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SCENARIO_STORE_PATH and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Graph(cmd) => cmd.execute(),
        Command::Audit(cmd) => cmd.execute(),
        Command::RebuildIcons(cmd) => cmd.execute(),
        Command::Summary(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
    }
}
