use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::credentials::Credentials;
use crate::game::Game;
use crate::steam::SteamClient;

/// An item instance in a player's inventory.
#[derive(Clone, Debug)]
pub struct Item {
    pub item_id: u64,
    pub quantity: u32,
    pub item_def_id: u64,
    pub acquired: Option<DateTime<Utc>>,
    pub state: String,
    pub origin: String,
    pub state_changed: Option<DateTime<Utc>>,
    pub dynamic_props: Option<Value>,
    pub(crate) credentials: Credentials,
    pub(crate) client: SteamClient,
}

impl Item {
    /// Credentials of the inventory this item was read from
    pub fn owner(&self) -> &Credentials {
        &self.credentials
    }

    pub fn game(&self) -> Game {
        Game::with_client(self.client.clone(), self.credentials.clone())
    }
}

/// An item definition from the app's catalog, passed through as steam sent it.
#[derive(Clone, Debug)]
pub struct ItemInfo {
    pub definition: Value,
    pub(crate) credentials: Credentials,
    pub(crate) client: SteamClient,
}

impl ItemInfo {
    pub fn item_def_id(&self) -> Option<u64> {
        match self.definition.get("itemdefid")? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.definition.get("name")?.as_str()
    }

    /// "item", "bundle", "generator", ...
    pub fn kind(&self) -> Option<&str> {
        self.definition.get("type")?.as_str()
    }

    pub fn game(&self) -> Game {
        Game::with_client(self.client.clone(), self.credentials.clone())
    }
}

/// One dynamic property change sent to `ModifyItems`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ItemPropertyUpdate {
    #[serde(rename = "itemid")]
    pub item_id: String,
    pub property_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_value_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_value_bool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_value_int: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_value_float: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub remove_property: bool,
}

impl ItemPropertyUpdate {
    fn new(item_id: u64, property_name: &str) -> ItemPropertyUpdate {
        ItemPropertyUpdate {
            item_id: item_id.to_string(),
            property_name: property_name.to_string(),
            property_value_string: None,
            property_value_bool: None,
            property_value_int: None,
            property_value_float: None,
            remove_property: false,
        }
    }

    pub fn string(item_id: u64, property_name: &str, value: &str) -> ItemPropertyUpdate {
        ItemPropertyUpdate {
            property_value_string: Some(value.to_string()),
            ..ItemPropertyUpdate::new(item_id, property_name)
        }
    }

    pub fn bool(item_id: u64, property_name: &str, value: bool) -> ItemPropertyUpdate {
        ItemPropertyUpdate {
            property_value_bool: Some(value),
            ..ItemPropertyUpdate::new(item_id, property_name)
        }
    }

    pub fn int(item_id: u64, property_name: &str, value: i64) -> ItemPropertyUpdate {
        ItemPropertyUpdate {
            property_value_int: Some(value),
            ..ItemPropertyUpdate::new(item_id, property_name)
        }
    }

    pub fn float(item_id: u64, property_name: &str, value: f64) -> ItemPropertyUpdate {
        ItemPropertyUpdate {
            property_value_float: Some(value),
            ..ItemPropertyUpdate::new(item_id, property_name)
        }
    }

    pub fn remove(item_id: u64, property_name: &str) -> ItemPropertyUpdate {
        ItemPropertyUpdate {
            remove_property: true,
            ..ItemPropertyUpdate::new(item_id, property_name)
        }
    }
}
