use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::serialize::{bool_or_int, string_or_number};

#[derive(Clone, Copy, Debug, Default, Display, EnumString, Deserialize, Serialize, PartialEq, Eq)]
pub enum SortMethod {
    #[default]
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, Default, Display, EnumString, Deserialize, Serialize, PartialEq, Eq)]
pub enum DisplayType {
    #[default]
    Numeric,
    TimeSeconds,
    TimeMilliSeconds,
}

/// How a submitted score is applied to an existing entry.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Deserialize, Serialize, PartialEq, Eq)]
pub enum ScoreMethod {
    #[default]
    KeepBest,
    ForceUpdate,
}

/// Which slice of a leaderboard `GetLeaderboardEntries` returns.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Deserialize, Serialize, PartialEq, Eq)]
pub enum DataRequest {
    #[default]
    RequestGlobal,
    RequestAroundUser,
    RequestFriends,
}

/// Settings used by `FindOrCreateLeaderboard`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardOptions {
    pub sort_method: SortMethod,
    pub display_type: DisplayType,
    pub create_if_not_found: bool,
    /// Scores can only be set through the web api
    pub only_trusted_writes: bool,
    /// Clients can only read their friends' scores
    pub only_friends_reads: bool,
}

impl Default for LeaderboardOptions {
    fn default() -> LeaderboardOptions {
        LeaderboardOptions {
            sort_method: SortMethod::Ascending,
            display_type: DisplayType::Numeric,
            create_if_not_found: true,
            only_trusted_writes: false,
            only_friends_reads: false,
        }
    }
}

// The listing and FindOrCreate endpoints name the same fields differently.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Leaderboard {
    #[serde(alias = "leaderBoardID", default, deserialize_with = "string_or_number")]
    pub id: u64,
    #[serde(alias = "leaderboardName", default)]
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(alias = "leaderBoardEntries", default)]
    pub entries: u64,
    #[serde(rename = "sortmethod", alias = "leaderBoardSortMethod", default)]
    pub sort_method: SortMethod,
    #[serde(rename = "displaytype", alias = "leaderBoardDisplayType", default)]
    pub display_type: DisplayType,
    #[serde(rename = "onlytrustedwrites", default, deserialize_with = "bool_or_int")]
    pub only_trusted_writes: bool,
    #[serde(rename = "onlyfriendsreads", default, deserialize_with = "bool_or_int")]
    pub only_friends_reads: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FoundLeaderboard {
    pub result: i32,
    #[serde(default)]
    pub leaderboard: Option<Leaderboard>,
}

/// Outcome of `SetLeaderboardScore`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScoreResult {
    pub result: i32,
    #[serde(default)]
    pub leaderboard_entry_count: u64,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub score_changed: bool,
    #[serde(default)]
    pub global_rank_previous: u64,
    #[serde(default)]
    pub global_rank_new: u64,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct LeaderboardEntries {
    #[serde(rename = "leaderboardID", default)]
    pub leaderboard_id: u64,
    #[serde(rename = "totalLeaderBoardEntryCount", default)]
    pub total: u64,
    #[serde(rename = "leaderboardEntries", default)]
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    #[serde(rename = "steamID")]
    pub steam_id: String,
    pub score: i64,
    pub rank: u64,
    #[serde(rename = "ugcid", default)]
    pub ugc_id: Option<String>,
    #[serde(rename = "detailData", default)]
    pub details: Option<String>,
}
