use std::path::PathBuf;

use clap::Parser;

use super::Result;

/// Show an app's store page details
#[derive(Debug, Parser)]
pub struct RunStore {
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
    #[arg(short, long, help = "App ID to look up (defaults to the configured app)")]
    pub app_id: Option<u32>,
}

impl RunStore {
    pub fn run(&self) -> Result<()> {
        let game = super::game(self.config_file.as_ref())?;
        let app_id = self.app_id.unwrap_or(game.credentials().app_id);

        match game.store_of(app_id)? {
            Some(store) => {
                println!("{} ({}) [{}]", store.name, store.app_id, store.kind);
                println!("  {}", store.short_description);
                println!("  Developers: {}", store.developers.join(", "));
                println!("  Publishers: {}", store.publishers.join(", "));
                println!("  Free: {}, required age: {}, DLC: {}", store.is_free, store.required_age, store.dlc.len());
            }
            None => println!("No store entry for app {}", app_id),
        }
        Ok(())
    }
}
