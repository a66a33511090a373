pub mod achievements;
pub mod inventory;
pub mod leaderboards;
pub mod players;
pub mod store;

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::config::{self, ConfigError};
use crate::game::Game;
use crate::steam::{SteamClient, SteamError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Steam(#[from] SteamError),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Parser)]
#[command(name = "steamworks-webapi")]
#[command(version = "0.1.0")]
enum Cli {
    Players(players::RunPlayers),
    Owns(players::RunOwns),
    Store(store::RunStore),
    Achievements(achievements::RunAchievements),
    Leaderboards(leaderboards::RunLeaderboards),
    Inventory(inventory::RunInventory),
}

impl Cli {
    fn run(&self) -> Result<()> {
        match self {
            Self::Players(cmd) => cmd.run(),
            Self::Owns(cmd) => cmd.run(),
            Self::Store(cmd) => cmd.run(),
            Self::Achievements(cmd) => cmd.run(),
            Self::Leaderboards(cmd) => cmd.run(),
            Self::Inventory(cmd) => cmd.run(),
        }
    }
}

/// Builds the root facade from the config file shared by every subcommand
pub(crate) fn game(config_file: Option<&PathBuf>) -> Result<Game> {
    let conf = config::read(config_file)?;

    Ok(Game::with_client(SteamClient::with_hosts(conf.hosts()), conf.credentials()))
}

pub fn cli_main() {
    if let Err(e) = Cli::parse().run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
