use crate::achievements::Achievements;
use crate::credentials::{Credentials, Overrides};
use crate::game::Game;
use crate::inventory::Inventory;
use crate::models::player::PlayerSummary;
use crate::models::steam::{Envelope, PlayerSummaries};
use crate::steam::{Host, Result, SteamClient};

/// A specific player: credentials whose steam id is that player's.
#[derive(Clone, Debug)]
pub struct Player {
    client: SteamClient,
    credentials: Credentials,
}

impl Player {
    pub(crate) fn new(client: SteamClient, credentials: Credentials) -> Player {
        Player { client, credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn steam_id(&self) -> Option<&str> {
        self.credentials.steam_id.as_deref()
    }

    /// Public profile, or `None` when there's no steam id or steam doesn't return the player.
    pub fn summary(&self) -> Result<Option<PlayerSummary>> {
        let steam_id = match self.steam_id() {
            Some(id) => id,
            None => return Ok(None),
        };

        let params = self.credentials.params().with("steamids", steam_id);
        let res: Envelope<PlayerSummaries> = self.client.get(
            Host::Api,
            "ISteamUser/GetPlayerSummaries/v2/",
            &params,
        )?;

        Ok(res.response.players.into_iter().find(|p| p.steam_id == steam_id))
    }

    pub fn achievements(&self) -> Achievements {
        Achievements::new(self.client.clone(), self.credentials.clone())
    }

    pub fn inventory(&self) -> Inventory {
        Inventory::new(self.client.clone(), self.credentials.clone())
    }

    pub fn game(&self) -> Game {
        self.game_with(Overrides::default())
    }

    pub fn game_with(&self, overrides: Overrides) -> Game {
        Game::with_client(self.client.clone(), self.credentials.inherit(overrides))
    }
}
