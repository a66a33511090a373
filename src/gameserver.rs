use crate::credentials::{Credentials, Overrides};
use crate::game::Game;
use crate::models::gameserver::{CreatedAccount, GameServerAccount};
use crate::models::steam::{AccountList, Envelope, LoginToken};
use crate::steam::{Host, Result, SteamClient};

/// Persistent game server logins of the account that owns the api key.
#[derive(Clone, Debug)]
pub struct GameServer {
    client: SteamClient,
    credentials: Credentials,
}

impl GameServer {
    pub(crate) fn new(client: SteamClient, credentials: Credentials) -> GameServer {
        GameServer { client, credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn account_list(&self) -> Result<Vec<GameServerAccount>> {
        let res: Envelope<AccountList> = self.client.get(
            Host::Api,
            "IGameServersService/GetAccountList/v1/",
            &self.credentials.params(),
        )?;

        Ok(res.response.servers)
    }

    /// Creates a login for this game's servers; `memo` is free text to tell them apart.
    pub fn create_account(&self, memo: &str) -> Result<CreatedAccount> {
        let form = self.credentials.params().with("memo", memo);
        let res: Envelope<CreatedAccount> = self.client.post(
            Host::Api,
            "IGameServersService/CreateAccount/v1/",
            &form,
        )?;

        Ok(res.response)
    }

    pub fn set_memo(&self, server_steam_id: &str, memo: &str) -> Result<bool> {
        let form = self.credentials
            .params()
            .with("steamid", server_steam_id)
            .with("memo", memo);

        self.client.post_unit(Host::Api, "IGameServersService/SetMemo/v1/", &form)?;
        Ok(true)
    }

    /// Invalidates the old token and returns the new one.
    pub fn reset_login_token(&self, server_steam_id: &str) -> Result<String> {
        let form = self.credentials.params().with("steamid", server_steam_id);
        let res: Envelope<LoginToken> = self.client.post(
            Host::Api,
            "IGameServersService/ResetLoginToken/v1/",
            &form,
        )?;

        Ok(res.response.login_token)
    }

    pub fn delete_account(&self, server_steam_id: &str) -> Result<bool> {
        let form = self.credentials.params().with("steamid", server_steam_id);

        self.client.post_unit(Host::Api, "IGameServersService/DeleteAccount/v1/", &form)?;
        Ok(true)
    }

    pub fn game(&self) -> Game {
        self.game_with(Overrides::default())
    }

    pub fn game_with(&self, overrides: Overrides) -> Game {
        Game::with_client(self.client.clone(), self.credentials.inherit(overrides))
    }
}
