//! Print the location graph of a scenario.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use scenario_core::{LocGraph, ScenarioId};

use crate::store::StoreArgs;

/// Print the location graph of a scenario
#[derive(Parser)]
pub struct Graph {
    /// Scenario id
    #[arg(value_name = "SCENARIO")]
    scenario: i64,

    #[command(flatten)]
    store: StoreArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tree")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Indented tree with edge lists
    Tree,
    /// JSON as served to scenario authors
    Json,
}

impl Graph {
    pub fn execute(self) -> Result<()> {
        let (service, _) = self.store.open()?;
        let scenario = ScenarioId(self.scenario);

        let report = service
            .graph_report(scenario)
            .with_context(|| format!("Failed to build graph for scenario {}", scenario))?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report.locations)?);
            }
            OutputFormat::Tree => {
                for location in &report.locations {
                    print_location(location);
                }
                if !report.dropped.is_empty() {
                    println!();
                    println!("{}", style("Dropped reveals:").bold().yellow());
                    for drop in &report.dropped {
                        println!(
                            "  card {} → location {} ({:?})",
                            drop.card, drop.location, drop.reason
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

fn print_location(location: &LocGraph) {
    let hidden = if location.hidden { " (hidden)" } else { "" };
    println!(
        "{} {}{}",
        style(location.id).bold().cyan(),
        style(&location.name).bold(),
        style(hidden).dim()
    );

    for card in &location.cards {
        println!("  {} {}", style(card.id).cyan(), card.description);
        print_edges("reveals", &card.reveals);
        print_edges("unlocks", &card.unlock_state_tokens);
        print_edges("unlocked by", &card.is_unlocked_state_tokens);
        print_edges("skill tests", &card.skill_tests);
    }
}

fn print_edges<T: std::fmt::Display>(label: &str, ids: &[T]) {
    if ids.is_empty() {
        return;
    }
    let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
    println!("    {} {}", style(format!("{}:", label)).dim(), ids.join(", "));
}
