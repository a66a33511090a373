use serde::{Deserialize, Serialize};

/// Snapshot of an app's store page.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Store {
    pub app_id: u32,
    pub name: String,
    /// "game", "dlc", "demo", ...
    pub kind: String,
    pub required_age: u32,
    pub is_free: bool,
    pub detailed_description: String,
    pub about_the_game: String,
    pub short_description: String,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub dlc: Vec<u32>,
}
