//! Show row counts and scenarios in the store.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use scenario_runtime::{LinkStore, Tables};

use crate::store::StoreArgs;

/// Show row counts and scenarios in the store
#[derive(Parser)]
pub struct Summary {
    #[command(flatten)]
    store: StoreArgs,
}

impl Summary {
    pub fn execute(self) -> Result<()> {
        let (service, path) = self.store.open()?;
        let file_size = std::fs::metadata(&path)
            .with_context(|| format!("Failed to stat store: {}", path.display()))?
            .len();

        println!("{} {}", style("Store:").bold().cyan(), path.display());
        println!("{} {} bytes", style("File Size:").bold().cyan(), file_size);
        println!();

        service
            .store()
            .read(|tables| {
                print_summary(tables);
                Ok::<_, scenario_runtime::RepositoryError>(())
            })
            .context("Failed to read store")?;

        Ok(())
    }
}

fn print_summary(tables: &Tables) {
    println!("{}", style("Tables:").bold().yellow());
    for (table, rows) in tables.row_counts() {
        println!("  {:<14} {}", table, rows);
    }
    println!();

    println!("{}", style("Scenarios:").bold().yellow());
    for scenario in tables.scenarios.iter() {
        let locations = tables
            .locations
            .count_where(|l| l.scenario == scenario.id);
        let cards = tables.cards.count_where(|c| c.scenario == scenario.id);
        println!(
            "  {} {} ({} locations, {} cards)",
            style(scenario.id).cyan(),
            scenario.name,
            locations,
            cards
        );
    }
}
