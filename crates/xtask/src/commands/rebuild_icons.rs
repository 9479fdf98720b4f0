//! Project every owned icon set again.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::store::StoreArgs;

/// Project every skill test and card link icon set again
#[derive(Parser)]
pub struct RebuildIcons {
    #[command(flatten)]
    store: StoreArgs,
}

impl RebuildIcons {
    pub fn execute(self) -> Result<()> {
        let (service, path) = self.store.open()?;
        let report = service
            .rebuild_icon_sets()
            .context("Failed to rebuild icon sets")?;

        println!("{} {}", style("Store:").bold().cyan(), path.display());
        println!("  Removed icons:   {}", report.removed);
        println!("  Relations:       {}", report.relations);
        println!("  Inserted icons:  {}", report.inserted);
        println!();
        println!("{}", style("✓ Icon sets rebuilt").green().bold());

        Ok(())
    }
}
