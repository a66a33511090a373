use crate::achievements::Achievements;
use crate::credentials::{Credentials, Overrides};
use crate::gameserver::GameServer;
use crate::inventory::Inventory;
use crate::leaderboards::Leaderboards;
use crate::models::steam::{AppOwnershipResponse, CurrentPlayers, Envelope, StoreResponse};
use crate::models::store::Store;
use crate::player::Player;
use crate::steam::conv;
use crate::steam::{Host, Params, Result, SteamClient};
use crate::ugc::Ugc;

/// Entry point: a game (app) plus the credentials used to talk to steam about it.
///
/// Every factory hands its credentials down unchanged; the `_with` variants replace only the
/// fields set in the given `Overrides`.
#[derive(Clone, Debug)]
pub struct Game {
    client: SteamClient,
    credentials: Credentials,
}

impl Game {
    pub fn new(credentials: Credentials) -> Game {
        Game::with_client(SteamClient::new(), credentials)
    }

    pub fn with_client(client: SteamClient, credentials: Credentials) -> Game {
        Game { client, credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn client(&self) -> &SteamClient {
        &self.client
    }

    /// Whether the configured player owns this app. Apps steam doesn't list count as not owned.
    pub fn check_app_ownership(&self) -> Result<bool> {
        let res: AppOwnershipResponse = self.client.get(
            Host::Api,
            "ISteamUser/GetPublisherAppOwnership/v2/",
            &self.credentials.player_params(),
        )?;

        Ok(conv::owns_app(&res, self.credentials.app_id))
    }

    pub fn current_players(&self) -> Result<u32> {
        let res: Envelope<CurrentPlayers> = self.client.get(
            Host::Api,
            "ISteamUserStats/GetNumberOfCurrentPlayers/v1/",
            &self.credentials.params(),
        )?;

        Ok(res.response.player_count)
    }

    /// Store page of this game; `None` when steam has no (successful) entry for it.
    pub fn store(&self) -> Result<Option<Store>> {
        self.store_of(self.credentials.app_id)
    }

    pub fn store_of(&self, app_id: u32) -> Result<Option<Store>> {
        let params = Params::new().with("appids", app_id);
        let res: StoreResponse = self.client.get(Host::Store, "api/appdetails", &params)?;

        Ok(conv::store_for_app(app_id, res))
    }

    pub fn achievements(&self) -> Achievements {
        self.achievements_with(Overrides::default())
    }

    pub fn achievements_with(&self, overrides: Overrides) -> Achievements {
        Achievements::new(self.client.clone(), self.credentials.inherit(overrides))
    }

    pub fn leaderboards(&self) -> Leaderboards {
        self.leaderboards_with(Overrides::default())
    }

    pub fn leaderboards_with(&self, overrides: Overrides) -> Leaderboards {
        Leaderboards::new(self.client.clone(), self.credentials.inherit(overrides))
    }

    pub fn inventory(&self) -> Inventory {
        self.inventory_with(Overrides::default())
    }

    pub fn inventory_with(&self, overrides: Overrides) -> Inventory {
        Inventory::new(self.client.clone(), self.credentials.inherit(overrides))
    }

    pub fn ugc(&self, published_file_id: u64) -> Ugc {
        self.ugc_with(published_file_id, Overrides::default())
    }

    pub fn ugc_with(&self, published_file_id: u64, overrides: Overrides) -> Ugc {
        Ugc::new(self.client.clone(), self.credentials.inherit(overrides), published_file_id)
    }

    pub fn gameserver(&self) -> GameServer {
        self.gameserver_with(Overrides::default())
    }

    pub fn gameserver_with(&self, overrides: Overrides) -> GameServer {
        GameServer::new(self.client.clone(), self.credentials.inherit(overrides))
    }

    pub fn player(&self) -> Player {
        self.player_with(Overrides::default())
    }

    pub fn player_with(&self, overrides: Overrides) -> Player {
        Player::new(self.client.clone(), self.credentials.inherit(overrides))
    }

    /// A copy of this game with some credentials replaced.
    pub fn game_with(&self, overrides: Overrides) -> Game {
        Game::with_client(self.client.clone(), self.credentials.inherit(overrides))
    }
}
