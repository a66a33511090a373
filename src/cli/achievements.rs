use std::path::PathBuf;

use clap::Parser;

use super::Result;

/// List the configured player's achievements
#[derive(Debug, Parser)]
pub struct RunAchievements {
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
    #[arg(short, long, help = "List locked rather than unlocked achievements")]
    pub locked: bool,
}

impl RunAchievements {
    pub fn run(&self) -> Result<()> {
        let achievements = super::game(self.config_file.as_ref())?.achievements();

        let list = if self.locked { achievements.locked()? } else { achievements.unlocked()? };

        match list {
            Some(list) => {
                for a in list {
                    match a.unlocked_at {
                        Some(t) => println!("🏆 {} (unlocked {})", a.api_name, t),
                        None => println!("🔒 {}", a.api_name),
                    }
                }
            }
            None => println!("The configured player does not own this app"),
        }
        Ok(())
    }
}
