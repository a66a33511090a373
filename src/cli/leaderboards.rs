use std::path::PathBuf;

use clap::Parser;

use super::Result;

/// List the configured app's leaderboards
#[derive(Debug, Parser)]
pub struct RunLeaderboards {
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
}

impl RunLeaderboards {
    pub fn run(&self) -> Result<()> {
        let boards = super::game(self.config_file.as_ref())?
            .leaderboards()
            .leaderboards_for_game()?;

        println!("{} leaderboards", boards.len());
        for b in boards {
            println!("{:>10}  {} ({} entries, {}, {})", b.id, b.name, b.entries, b.sort_method, b.display_type);
        }
        Ok(())
    }
}
