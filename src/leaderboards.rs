use crate::credentials::{Credentials, Overrides};
use crate::game::Game;
use crate::models::leaderboard::{
    DataRequest,
    FoundLeaderboard,
    Leaderboard,
    LeaderboardEntries,
    LeaderboardOptions,
    ScoreMethod,
    ScoreResult,
};
use crate::models::steam::{Envelope, LeaderboardEntriesResponse, LeaderboardList, ResultCode, ResultEnvelope};
use crate::steam::{Host, Params, Result, SteamClient, SteamError};

// Steam's limit on the game-specific score details
const MAX_DETAILS_LEN: usize = 256;

/// Leaderboard management; mutations go through the partner api.
#[derive(Clone, Debug)]
pub struct Leaderboards {
    client: SteamClient,
    credentials: Credentials,
}

impl Leaderboards {
    pub(crate) fn new(client: SteamClient, credentials: Credentials) -> Leaderboards {
        Leaderboards { client, credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn result_is_ok(&self, path: &str, form: &Params) -> Result<bool> {
        let res: ResultEnvelope<ResultCode> = self.client.post(Host::Partner, path, form)?;

        Ok(res.result.result == 1)
    }

    /// True if steam reports the leaderboard deleted.
    pub fn delete_leaderboard(&self, name: &str) -> Result<bool> {
        let form = self.credentials.params().with("name", name);

        self.result_is_ok("ISteamLeaderboards/DeleteLeaderboard/v1/", &form)
    }

    pub fn find_or_create_leaderboard(&self, name: &str, options: &LeaderboardOptions) -> Result<FoundLeaderboard> {
        let form = self.credentials
            .params()
            .with("name", name)
            .with("sortmethod", options.sort_method)
            .with("displaytype", options.display_type)
            .with_flag("createifnotfound", options.create_if_not_found)
            .with_flag("onlytrustedwrites", options.only_trusted_writes)
            .with_flag("onlyfriendsreads", options.only_friends_reads);

        let res: ResultEnvelope<FoundLeaderboard> = self.client.post(
            Host::Partner,
            "ISteamLeaderboards/FindOrCreateLeaderboard/v2/",
            &form,
        )?;

        Ok(res.result)
    }

    /// Removes every entry; true if steam reports success.
    pub fn reset_leaderboard(&self, leaderboard_id: u64) -> Result<bool> {
        let form = self.credentials.params().with("leaderboardid", leaderboard_id);

        self.result_is_ok("ISteamLeaderboards/ResetLeaderboard/v1/", &form)
    }

    /// Sets the configured player's score. `details` is limited to 256 bytes.
    pub fn set_leaderboard_score(
        &self,
        leaderboard_id: u64,
        score: i64,
        method: ScoreMethod,
        details: Option<&str>,
    ) -> Result<ScoreResult> {
        if let Some(d) = details {
            if d.len() > MAX_DETAILS_LEN {
                return Err(SteamError::Parameter(
                    format!("score details are {} bytes, at most {} allowed", d.len(), MAX_DETAILS_LEN)
                ));
            }
        }

        let form = self.credentials
            .player_params()
            .with("leaderboardid", leaderboard_id)
            .with("score", score)
            .with("scoremethod", method)
            .with_opt("details", details);

        let res: ResultEnvelope<ScoreResult> = self.client.post(
            Host::Partner,
            "ISteamLeaderboards/SetLeaderboardScore/v1/",
            &form,
        )?;

        Ok(res.result)
    }

    pub fn leaderboards_for_game(&self) -> Result<Vec<Leaderboard>> {
        let res: Envelope<LeaderboardList> = self.client.get(
            Host::Api,
            "ISteamLeaderboards/GetLeaderboardsForGame/v2/",
            &self.credentials.params(),
        )?;

        if res.response.result != 1 {
            return Err(SteamError::Api(format!("GetLeaderboardsForGame returned result {}", res.response.result)));
        }

        Ok(res.response.leaderboards)
    }

    /// Entries ranked `range_start..=range_end`, relative to the player for `RequestAroundUser`.
    pub fn leaderboard_entries(
        &self,
        leaderboard_id: u64,
        range_start: i64,
        range_end: i64,
        request: DataRequest,
    ) -> Result<LeaderboardEntries> {
        if range_start > range_end {
            return Err(SteamError::Parameter(format!("empty range {}..{}", range_start, range_end)));
        }

        let params = self.credentials
            .player_params()
            .with("leaderboardid", leaderboard_id)
            .with("rangestart", range_start)
            .with("rangeend", range_end)
            .with("datarequest", request);

        let res: LeaderboardEntriesResponse = self.client.get(
            Host::Partner,
            "ISteamLeaderboards/GetLeaderboardEntries/v1/",
            &params,
        )?;

        Ok(res.information)
    }

    pub fn game(&self) -> Game {
        self.game_with(Overrides::default())
    }

    pub fn game_with(&self, overrides: Overrides) -> Game {
        Game::with_client(self.client.clone(), self.credentials.inherit(overrides))
    }
}
