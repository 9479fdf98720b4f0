//! Compare stored card icons with their projection.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::store::StoreArgs;

/// Compare stored card icons with their projection
#[derive(Parser)]
pub struct Audit {
    #[command(flatten)]
    store: StoreArgs,
}

impl Audit {
    pub fn execute(self) -> Result<()> {
        let (service, path) = self.store.open()?;
        let drift = service
            .audit_icon_sets()
            .context("Failed to audit icon sets")?;

        println!("{} {}", style("Store:").bold().cyan(), path.display());

        if drift.is_empty() {
            println!("{}", style("✓ Every icon set matches its relation").green());
            return Ok(());
        }

        println!(
            "{}",
            style(format!("✗ {} drifting icon(s)", drift.len()))
                .red()
                .bold()
        );
        for entry in &drift {
            println!("  {} {}", style("→").cyan(), entry);
        }
        println!();
        println!(
            "{}",
            style("Hint: run `cargo run -p xtask -- rebuild-icons` to project them again").dim()
        );

        anyhow::bail!("icon audit found {} problem(s)", drift.len())
    }
}
