pub mod achievements;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod game;
pub mod gameserver;
pub mod inventory;
pub mod leaderboards;
pub mod models;
pub mod player;
pub mod serialize;
pub mod steam;
pub mod ugc;

pub use achievements::Achievements;
pub use credentials::{Credentials, Overrides};
pub use game::Game;
pub use gameserver::GameServer;
pub use inventory::Inventory;
pub use leaderboards::Leaderboards;
pub use player::Player;
pub use steam::{Hosts, Result, SteamClient, SteamError};
pub use ugc::Ugc;
