use crate::credentials::{Credentials, Overrides};
use crate::game::Game;
use crate::models::achievement::{AchievementSchema, PlayerAchievement};
use crate::models::steam::{PlayerStatsResponse, SchemaForGameResponse};
use crate::steam::{Host, Result, SteamClient, SteamError};

/// A player's achievements in one game, plus the game's achievement schema.
#[derive(Clone, Debug)]
pub struct Achievements {
    client: SteamClient,
    credentials: Credentials,
}

impl Achievements {
    pub(crate) fn new(client: SteamClient, credentials: Credentials) -> Achievements {
        Achievements { client, credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn player_achievements(&self) -> Result<Vec<PlayerAchievement>> {
        let res: PlayerStatsResponse = self.client.get(
            Host::Api,
            "ISteamUserStats/GetPlayerAchievements/v1/",
            &self.credentials.player_params(),
        )?;

        let stats = res.playerstats;
        if !stats.success {
            return Err(SteamError::Api(
                stats.error.unwrap_or_else(|| "GetPlayerAchievements failed".to_string())
            ));
        }

        Ok(stats.achievements)
    }

    /// Achievements filtered on `achieved`, or `None` if the player doesn't own the game.
    fn filtered(&self, achieved: bool) -> Result<Option<Vec<PlayerAchievement>>> {
        if !self.game().check_app_ownership()? {
            log::debug!("Player doesn't own app {}; not reading achievements", self.credentials.app_id);
            return Ok(None);
        }

        Ok(Some(
            self.player_achievements()?
                .into_iter()
                .filter(|a| a.achieved == achieved)
                .collect()
        ))
    }

    pub fn unlocked(&self) -> Result<Option<Vec<PlayerAchievement>>> {
        self.filtered(true)
    }

    pub fn locked(&self) -> Result<Option<Vec<PlayerAchievement>>> {
        self.filtered(false)
    }

    /// Schema of the achievement with api name `name`, if the game defines one.
    pub fn achievement_details(&self, name: &str) -> Result<Option<AchievementSchema>> {
        let res: SchemaForGameResponse = self.client.get(
            Host::Api,
            "ISteamUserStats/GetSchemaForGame/v2/",
            &self.credentials.params(),
        )?;

        Ok(
            res.game
                .available_game_stats
                .achievements
                .into_iter()
                .find(|a| a.name == name)
        )
    }

    /// False both when the achievement is locked and when the player doesn't own the game.
    pub fn has_unlocked(&self, name: &str) -> Result<bool> {
        Ok(
            self.unlocked()?
                .map(|unlocked| unlocked.iter().any(|a| a.api_name == name))
                .unwrap_or(false)
        )
    }

    pub fn game(&self) -> Game {
        self.game_with(Overrides::default())
    }

    pub fn game_with(&self, overrides: Overrides) -> Game {
        Game::with_client(self.client.clone(), self.credentials.inherit(overrides))
    }
}
