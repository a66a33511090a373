use crate::credentials::{Credentials, Overrides};
use crate::game::Game;
use crate::models::steam::{Envelope, PublishedFileDetailsList};
use crate::models::ugc::PublishedFileDetails;
use crate::player::Player;
use crate::steam::{Host, Params, Result, SteamClient};

/// One published workshop file.
///
/// The `IPublishedFileService` mutations answer with an empty body, so their `true` only
/// means steam accepted the request (2xx); any other status is returned as an error.
#[derive(Clone, Debug)]
pub struct Ugc {
    client: SteamClient,
    credentials: Credentials,
    published_file_id: u64,
}

impl Ugc {
    pub(crate) fn new(client: SteamClient, credentials: Credentials, published_file_id: u64) -> Ugc {
        Ugc { client, credentials, published_file_id }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn published_file_id(&self) -> u64 {
        self.published_file_id
    }

    /// The same facade bound to another published file.
    pub fn file(&self, published_file_id: u64) -> Ugc {
        Ugc::new(self.client.clone(), self.credentials.clone(), published_file_id)
    }

    fn file_params(&self) -> Params {
        self.credentials.params().with("publishedfileid", self.published_file_id)
    }

    fn update(&self, path: &str, form: &Params) -> Result<bool> {
        self.client.post_unit(Host::Partner, path, form)?;
        Ok(true)
    }

    /// `reason` is only shown to admins.
    pub fn update_ban_status(&self, banned: bool, reason: &str) -> Result<bool> {
        let form = self.file_params()
            .with_flag("banned", banned)
            .with("reason", reason);

        self.update("IPublishedFileService/UpdateBanStatus/v1/", &form)
    }

    /// Incompatible files are hidden from hubs and profiles but stay reachable by link.
    pub fn update_incompatible_status(&self, incompatible: bool) -> Result<bool> {
        let form = self.file_params().with_flag("incompatible", incompatible);

        self.update("IPublishedFileService/UpdateIncompatibleStatus/v1/", &form)
    }

    pub fn update_tags(&self, add_tags: &[&str], remove_tags: &[&str]) -> Result<bool> {
        let form = self.file_params()
            .with_list("add_tags", add_tags)
            .with_list("remove_tags", remove_tags);

        self.update("IPublishedFileService/UpdateTags/v1/", &form)
    }

    /// Subscribes the configured player to the file.
    pub fn subscribe(&self) -> Result<bool> {
        let form = self.file_params().with_opt("steamid", self.credentials.steam_id.as_deref());

        self.update("IPublishedFileService/SubscribePublishedFile/v1/", &form)
    }

    pub fn unsubscribe(&self) -> Result<bool> {
        let form = self.file_params().with_opt("steamid", self.credentials.steam_id.as_deref());

        self.update("IPublishedFileService/UnsubscribePublishedFile/v1/", &form)
    }

    /// `None` if steam doesn't know the file.
    pub fn details(&self) -> Result<Option<PublishedFileDetails>> {
        let form = self.credentials
            .params()
            .with("itemcount", 1)
            .with_list("publishedfileids", [self.published_file_id]);

        let res: Envelope<PublishedFileDetailsList> = self.client.post(
            Host::Partner,
            "ISteamRemoteStorage/GetPublishedFileDetails/v1/",
            &form,
        )?;

        Ok(
            res.response
                .publishedfiledetails
                .into_iter()
                .next()
                .filter(|d| d.result == 1)
        )
    }

    /// The player who published the file, carrying this facade's api key and app id.
    pub fn creator(&self) -> Result<Option<Player>> {
        Ok(
            self.details()?
                .map(|d| Player::new(
                    self.client.clone(),
                    self.credentials.inherit(Overrides::default().steam_id(&d.creator)),
                ))
        )
    }

    pub fn game(&self) -> Game {
        self.game_with(Overrides::default())
    }

    pub fn game_with(&self, overrides: Overrides) -> Game {
        Game::with_client(self.client.clone(), self.credentials.inherit(overrides))
    }
}
