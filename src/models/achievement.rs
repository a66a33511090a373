use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serialize::{bool_or_int, ts_seconds_none_when_zero};

/// One achievement as recorded for a player.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlayerAchievement {
    #[serde(rename = "apiname")]
    pub api_name: String,
    #[serde(deserialize_with = "bool_or_int")]
    pub achieved: bool,
    #[serde(rename = "unlocktime", default, deserialize_with = "ts_seconds_none_when_zero")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Schema entry of an achievement, as configured by the publisher.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AchievementSchema {
    /// Api name; the key used by the stats endpoints
    pub name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "defaultvalue", default)]
    pub default_value: i64,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub hidden: bool,
    #[serde(default)]
    pub icon: String,
    #[serde(rename = "icongray", default)]
    pub icon_gray: String,
}
