
use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::models::achievement::{AchievementSchema, PlayerAchievement};
use crate::models::gameserver::GameServerAccount;
use crate::models::leaderboard::{Leaderboard, LeaderboardEntries};
use crate::models::player::PlayerSummary;
use crate::models::ugc::PublishedFileDetails;
use crate::serialize::{bool_or_int, string_or_number};

/// The `{"response": {...}}` wrapper most endpoints use.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub response: T,
}

/// The `{"result": {...}}` wrapper of the partner leaderboard endpoints.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ResultCode {
    pub result: i32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AppOwnershipResponse {
    pub appownership: AppOwnership,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AppOwnership {
    #[serde(default)]
    pub apps: Vec<OwnedApp>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct OwnedApp {
    pub appid: u32,
    #[serde(deserialize_with = "bool_or_int")]
    pub ownsapp: bool,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub permanent: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CurrentPlayers {
    pub player_count: u32,
    #[serde(default)]
    pub result: i32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PlayerStatsResponse {
    pub playerstats: PlayerStats,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PlayerStats {
    #[serde(rename = "steamID", default)]
    pub steam_id: Option<String>,
    #[serde(rename = "gameName", default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub achievements: Vec<PlayerAchievement>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SchemaForGameResponse {
    pub game: GameSchema,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GameSchema {
    #[serde(rename = "gameName", default)]
    pub game_name: Option<String>,
    #[serde(rename = "gameVersion", default)]
    pub game_version: Option<String>,
    #[serde(rename = "availableGameStats", default)]
    pub available_game_stats: AvailableGameStats,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct AvailableGameStats {
    #[serde(default)]
    pub achievements: Vec<AchievementSchema>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LeaderboardList {
    #[serde(default)]
    pub result: i32,
    #[serde(default)]
    pub leaderboards: Vec<Leaderboard>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntriesResponse {
    #[serde(rename = "leaderboardEntryInformation")]
    pub information: LeaderboardEntries,
}

/// Inventory responses carry their items as a JSON document inside a string.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ItemJson {
    pub item_json: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ItemDefJson {
    pub itemdef_json: String,
}

/// One record of a decoded `item_json`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawItem {
    #[serde(deserialize_with = "string_or_number")]
    pub itemid: u64,
    #[serde(deserialize_with = "string_or_number")]
    pub quantity: u32,
    #[serde(deserialize_with = "string_or_number")]
    pub itemdefid: u64,
    #[serde(default)]
    pub acquired: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub state_changed_timestamp: String,
    #[serde(default)]
    pub dynamic_props: Option<Value>,
}

/// appdetails is keyed by the requested app id rather than wrapped in an envelope.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StoreResponse {
    #[serde(flatten)]
    pub results: HashMap<String, StoreEntry>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StoreEntry {
    pub success: bool,
    #[serde(default)]
    pub data: Option<StoreData>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct StoreData {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub required_age: u32,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub detailed_description: String,
    #[serde(default)]
    pub about_the_game: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub dlc: Vec<u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PublishedFileDetailsList {
    #[serde(default)]
    pub result: i32,
    #[serde(default)]
    pub resultcount: u32,
    #[serde(default)]
    pub publishedfiledetails: Vec<PublishedFileDetails>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AccountList {
    #[serde(default)]
    pub servers: Vec<GameServerAccount>,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub expires: u64,
    #[serde(default)]
    pub actor: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LoginToken {
    pub login_token: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PlayerSummaries {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}
