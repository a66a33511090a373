use serde::{Deserialize, Serialize};

/// Public profile data of a player.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlayerSummary {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    #[serde(rename = "personaname", default)]
    pub persona_name: String,
    #[serde(rename = "profileurl", default)]
    pub profile_url: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(rename = "avatarmedium", default)]
    pub avatar_medium: String,
    #[serde(rename = "avatarfull", default)]
    pub avatar_full: String,
    /// 0 is offline, 1 online, 2 busy, 3 away, 4 snooze, 5 looking to trade, 6 looking to play
    #[serde(rename = "personastate", default)]
    pub persona_state: u8,
    /// 1 is private, 3 public
    #[serde(rename = "communityvisibilitystate", default)]
    pub visibility: u8,
}
