//! Delete the store snapshot.
//!
//! Safety: Always prompts for confirmation before deletion.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::io::{self, Write};

use crate::store::StoreArgs;

/// Delete the store snapshot
#[derive(Parser, Debug)]
pub struct Clean {
    #[command(flatten)]
    store: StoreArgs,

    /// Skip confirmation prompt (dangerous!)
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let path = self.store.config().store_path;

        if !path.exists() {
            println!("{}", style("Nothing to clean - no snapshot yet").dim());
            return Ok(());
        }

        println!("The following will be deleted:");
        println!("  {} {}", style("→").cyan(), style(path.display()).bold());
        println!();

        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to delete: {}", path.display()))?;
        println!("{}", style("✓ Snapshot deleted").green().bold());

        Ok(())
    }
}

/// Prompt user for confirmation
fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
