use serde_json::json;

use crate::credentials::{Credentials, Overrides};
use crate::game::Game;
use crate::models::item::{Item, ItemInfo, ItemPropertyUpdate};
use crate::models::steam::{Envelope, ItemDefJson, ItemJson};
use crate::steam::conv;
use crate::steam::{Host, Params, Result, SteamClient, SteamError};

/// Optional arguments of `AddItem` / `AddPromoItem`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grant {
    /// JSON describing initial item properties
    pub item_props_json: Option<String>,
    /// Show a steam notification; for players who aren't in game
    pub notify: bool,
    /// Replaying a request id returns the original result instead of granting twice
    pub request_id: Option<u64>,
}

/// A player's inventory in the inventory service, and the app's item definitions.
#[derive(Clone, Debug)]
pub struct Inventory {
    client: SteamClient,
    credentials: Credentials,
}

impl Inventory {
    pub(crate) fn new(client: SteamClient, credentials: Credentials) -> Inventory {
        Inventory { client, credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn post_items(&self, path: &str, form: &Params) -> Result<Vec<Item>> {
        let res: Envelope<ItemJson> = self.client.post(Host::Partner, path, form)?;

        conv::decode_items(&res.response.item_json, &self.client, &self.credentials)
    }

    fn grant(&self, path: &str, item_def_ids: &[u64], grant: &Grant) -> Result<Vec<Item>> {
        let form = self.credentials
            .player_params()
            .with_list("itemdefid", item_def_ids)
            .with_opt("itempropsjson", grant.item_props_json.as_deref())
            .with_flag("notify", grant.notify)
            .with_opt("requestid", grant.request_id);

        self.post_items(path, &form)
    }

    /// Creates one instance of each item definition in the player's inventory. Bundles and
    /// generators are unpacked; every resulting item is returned.
    pub fn add_item(&self, item_def_ids: &[u64], grant: &Grant) -> Result<Vec<Item>> {
        self.grant("IInventoryService/AddItem/v1/", item_def_ids, grant)
    }

    pub fn add_promo_item(&self, item_def_ids: &[u64], grant: &Grant) -> Result<Vec<Item>> {
        self.grant("IInventoryService/AddPromoItem/v1/", item_def_ids, grant)
    }

    /// Stacks the player's items of the given definitions. Items under a trade or market
    /// restriction are skipped unless `force` is set.
    pub fn consolidate(&self, item_def_ids: &[u64], force: bool) -> Result<Vec<Item>> {
        let form = self.credentials
            .player_params()
            .with_list("itemdefid", item_def_ids)
            .with_flag("force", force);

        self.post_items("IInventoryService/Consolidate/v1/", &form)
    }

    /// Applies dynamic property updates. Steam rejects the call if the items changed after
    /// `timestamp` (unix seconds; 0 disables the check).
    pub fn modify_items(&self, updates: &[ItemPropertyUpdate], timestamp: i64) -> Result<Vec<Item>> {
        let input = json!({
            "steamid": self.credentials.steam_id,
            "timestamp": timestamp,
            "updates": updates,
        });
        let form = self.credentials.params().with("input_json", input);

        self.post_items("IInventoryService/ModifyItems/v1/", &form)
    }

    /// Crafts `output_item_def_id` from the given materials; returns the consumed and created
    /// items. `material_item_ids` and `material_quantities` pair up by index.
    pub fn exchange_item(
        &self,
        material_item_ids: &[u64],
        material_quantities: &[u32],
        output_item_def_id: u64,
    ) -> Result<Vec<Item>> {
        if material_item_ids.len() != material_quantities.len() {
            return Err(SteamError::Parameter(format!(
                "{} material items but {} quantities",
                material_item_ids.len(),
                material_quantities.len(),
            )));
        }

        let form = self.credentials
            .player_params()
            .with_list("materialsitemid", material_item_ids)
            .with_list("materialsquantity", material_quantities)
            .with("outputitemdefid", output_item_def_id);

        self.post_items("IInventoryService/ExchangeItem/v1/", &form)
    }

    pub fn items(&self) -> Result<Vec<Item>> {
        let res: Envelope<ItemJson> = self.client.get(
            Host::Partner,
            "IInventoryService/GetInventory/v1/",
            &self.credentials.player_params(),
        )?;

        conv::decode_items(&res.response.item_json, &self.client, &self.credentials)
    }

    pub fn item_defs(&self) -> Result<Vec<ItemInfo>> {
        let res: Envelope<ItemDefJson> = self.client.get(
            Host::Partner,
            "IInventoryService/GetItemDefs/v1/",
            &self.credentials.player_params(),
        )?;

        conv::decode_item_defs(&res.response.itemdef_json, &self.client, &self.credentials)
    }

    pub fn game(&self) -> Game {
        self.game_with(Overrides::default())
    }

    pub fn game_with(&self, overrides: Overrides) -> Game {
        Game::with_client(self.client.clone(), self.credentials.inherit(overrides))
    }
}
