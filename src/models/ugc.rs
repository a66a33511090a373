use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serialize::{bool_or_int, string_or_number, ts_seconds_none_when_zero};

/// A workshop item as described by `GetPublishedFileDetails`.
///
/// Files steam could not find come back with only an id and a `result` other than 1.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PublishedFileDetails {
    #[serde(rename = "publishedfileid", deserialize_with = "string_or_number")]
    pub published_file_id: u64,
    pub result: i32,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub creator_app_id: u32,
    #[serde(default)]
    pub consumer_app_id: u32,
    #[serde(default)]
    pub filename: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub file_size: u64,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub preview_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "ts_seconds_none_when_zero")]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "ts_seconds_none_when_zero")]
    pub time_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub visibility: u8,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub banned: bool,
    #[serde(default)]
    pub ban_reason: String,
    #[serde(default)]
    pub subscriptions: u64,
    #[serde(default)]
    pub favorited: u64,
    #[serde(default)]
    pub lifetime_subscriptions: u64,
    #[serde(default)]
    pub lifetime_favorited: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Tag {
    pub tag: String,
}
