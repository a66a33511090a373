
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::credentials::Credentials;
use crate::models::item::{Item, ItemInfo};
use crate::models::steam::{AppOwnershipResponse, RawItem, StoreData, StoreResponse};
use crate::models::store::Store;
use crate::steam::{Result, SteamClient};

// Inventory service timestamps, e.g. 20180713T130504Z
const INVENTORY_TIMESTAMP: &str = "%Y%m%dT%H%M%SZ";

pub(crate) fn parse_inventory_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }

    match NaiveDateTime::parse_from_str(raw, INVENTORY_TIMESTAMP) {
        Ok(ts) => Some(ts.and_utc()),
        Err(e) => {
            log::warn!("Ignoring unparseable inventory timestamp {:?}: {}", raw, e);
            None
        }
    }
}

/// Steam sends dynamic props as a JSON document inside a string; unwrap it when it is one.
fn decode_dynamic_props(props: Option<Value>) -> Option<Value> {
    match props {
        Some(Value::String(s)) => match serde_json::from_str(&s) {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!("dynamic_props is not JSON, keeping it as a string");
                Some(Value::String(s))
            }
        },
        other => other,
    }
}

pub(crate) fn extract_item(raw: RawItem, client: &SteamClient, credentials: &Credentials) -> Item {
    Item {
        item_id: raw.itemid,
        quantity: raw.quantity,
        item_def_id: raw.itemdefid,
        acquired: parse_inventory_timestamp(&raw.acquired),
        state: raw.state,
        origin: raw.origin,
        state_changed: parse_inventory_timestamp(&raw.state_changed_timestamp),
        dynamic_props: decode_dynamic_props(raw.dynamic_props),
        credentials: credentials.clone(),
        client: client.clone(),
    }
}

/// Second decoding pass over an `item_json` string.
pub(crate) fn decode_items(item_json: &str, client: &SteamClient, credentials: &Credentials) -> Result<Vec<Item>> {
    let raw: Vec<RawItem> = serde_json::from_str(item_json)?;

    Ok(
        raw
            .into_iter()
            .map(|r| extract_item(r, client, credentials))
            .collect()
    )
}

/// Second decoding pass over an `itemdef_json` string.
pub(crate) fn decode_item_defs(itemdef_json: &str, client: &SteamClient, credentials: &Credentials) -> Result<Vec<ItemInfo>> {
    let raw: Vec<Value> = serde_json::from_str(itemdef_json)?;

    Ok(
        raw
            .into_iter()
            .map(|definition| ItemInfo {
                definition,
                credentials: credentials.clone(),
                client: client.clone(),
            })
            .collect()
    )
}

pub(crate) fn extract_store(app_id: u32, data: StoreData) -> Store {
    Store {
        app_id,
        name: data.name,
        kind: data.kind,
        required_age: data.required_age,
        is_free: data.is_free,
        detailed_description: data.detailed_description,
        about_the_game: data.about_the_game,
        short_description: data.short_description,
        developers: data.developers,
        publishers: data.publishers,
        dlc: data.dlc,
    }
}

/// The store entry for `app_id`, if steam had one and reported success.
pub(crate) fn store_for_app(app_id: u32, mut res: StoreResponse) -> Option<Store> {
    let entry = res.results.remove(&app_id.to_string())?;

    match (entry.success, entry.data) {
        (true, Some(data)) => Some(extract_store(app_id, data)),
        _ => None,
    }
}

/// Ownership flag of `app_id`; apps missing from the list count as not owned.
pub(crate) fn owns_app(res: &AppOwnershipResponse, app_id: u32) -> bool {
    res.appownership
        .apps
        .iter()
        .find(|app| app.appid == app_id)
        .map(|app| app.ownsapp)
        .unwrap_or(false)
}
