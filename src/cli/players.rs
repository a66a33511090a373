use std::path::PathBuf;

use clap::Parser;

use super::Result;

/// Print how many players are in game right now
#[derive(Debug, Parser)]
pub struct RunPlayers {
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
}

impl RunPlayers {
    pub fn run(&self) -> Result<()> {
        let game = super::game(self.config_file.as_ref())?;

        println!("{} players in app {}", game.current_players()?, game.credentials().app_id);
        Ok(())
    }
}

/// Check whether the configured player owns the configured app
#[derive(Debug, Parser)]
pub struct RunOwns {
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
}

impl RunOwns {
    pub fn run(&self) -> Result<()> {
        let game = super::game(self.config_file.as_ref())?;
        let owner = game.credentials().steam_id.clone().unwrap_or_else(|| "<no steam id>".to_string());

        if game.check_app_ownership()? {
            println!("✅ {} owns app {}", owner, game.credentials().app_id);
        } else {
            println!("❌ {} does not own app {}", owner, game.credentials().app_id);
        }
        Ok(())
    }
}
