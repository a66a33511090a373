use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serialize::{string_or_number, ts_seconds_none_when_zero};

/// A persistent game server login owned by the publisher account.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GameServerAccount {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    #[serde(rename = "appid", default)]
    pub app_id: u32,
    #[serde(default)]
    pub login_token: String,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub is_expired: bool,
    #[serde(rename = "rt_last_logon", default, deserialize_with = "ts_seconds_none_when_zero")]
    pub last_logon: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreatedAccount {
    #[serde(rename = "steamid", deserialize_with = "string_or_number")]
    pub steam_id: u64,
    pub login_token: String,
}
