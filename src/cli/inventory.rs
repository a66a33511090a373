use std::path::PathBuf;

use clap::Parser;

use super::Result;

/// List the configured player's inventory
#[derive(Debug, Parser)]
pub struct RunInventory {
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
}

impl RunInventory {
    pub fn run(&self) -> Result<()> {
        let items = super::game(self.config_file.as_ref())?.inventory().items()?;

        println!("{} items", items.len());
        for item in items {
            println!("{:>20}  def {} x{} ({})", item.item_id, item.item_def_id, item.quantity, item.origin);
        }
        Ok(())
    }
}
