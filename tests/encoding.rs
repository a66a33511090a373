mod utils;

use std::sync::Arc;

use mockall::*;

use steamworks_webapi::{Game, Hosts, SteamClient, SteamError};
use steamworks_webapi::models::leaderboard::ScoreMethod;
use steamworks_webapi::steam::{HttpHandling, Params, Result};

mock! {
    pub Http {}

    impl HttpHandling for Http {
        fn get(&self, url: &str, params: &Params) -> Result<String>;
        fn post_form(&self, url: &str, form: &Params) -> Result<String>;
    }
}

const BASE: &str = "https://steam.test";

fn game(http: MockHttp) -> Game {
    let client = SteamClient::with_http(Arc::new(http), Hosts::single(BASE));

    Game::with_client(client, utils::credentials())
}

#[test]
fn test_ownership_query() {
    let mut http = MockHttp::new();
    let body = utils::fixture("ownership/app-ownership-1.json");

    http.expect_get()
        .times(1)
        .withf(|url, params| {
            url == "https://steam.test/ISteamUser/GetPublisherAppOwnership/v2/"
                && params.get("key") == Some(utils::API_KEY)
                && params.get("appid") == Some("480")
                && params.get("steamid") == Some(utils::STEAM_ID)
        })
        .returning(move |_, _| Ok(body.clone()));

    assert!(game(http).check_app_ownership().unwrap());
}

#[test]
fn test_score_details_left_out_when_absent() {
    let mut http = MockHttp::new();
    let body = utils::fixture("leaderboards/set-score-1.json");

    http.expect_post_form()
        .times(1)
        .withf(|url, form| {
            url == "https://steam.test/ISteamLeaderboards/SetLeaderboardScore/v1/"
                && form.get("scoremethod") == Some("ForceUpdate")
                && form.get("score") == Some("-5")
                && form.get("details").is_none()
        })
        .returning(move |_, _| Ok(body.clone()));

    let res = game(http)
        .leaderboards()
        .set_leaderboard_score(2468, -5, ScoreMethod::ForceUpdate, None)
        .unwrap();

    assert_eq!(res.global_rank_new, 7);
}

#[test]
fn test_details_request_lists_file_id() {
    let mut http = MockHttp::new();
    let body = utils::fixture("ugc/details-1.json");

    http.expect_post_form()
        .times(1)
        .withf(|_, form| {
            form.get("itemcount") == Some("1")
                && form.get("publishedfileids[0]") == Some("1234567890")
                && form.get("publishedfileids[1]").is_none()
        })
        .returning(move |_, _| Ok(body.clone()));

    let details = game(http).ugc(1234567890).details().unwrap();

    assert!(details.is_some());
}

#[test]
fn test_store_has_no_credentials() {
    let mut http = MockHttp::new();
    let body = utils::fixture("store/app-details-730.json");

    http.expect_get()
        .times(1)
        .withf(|url, params| {
            url == "https://steam.test/api/appdetails"
                && params.get("appids") == Some("730")
                && params.get("key").is_none()
                && params.len() == 1
        })
        .returning(move |_, _| Ok(body.clone()));

    let store = game(http).store_of(730).unwrap().unwrap();

    assert_eq!(store.app_id, 730);
}

#[test]
fn test_validation_skips_network() {
    let mut http = MockHttp::new();
    http.expect_post_form().never();
    http.expect_get().never();

    let game = game(http);

    assert!(matches!(
        game.leaderboards().set_leaderboard_score(1, 1, ScoreMethod::KeepBest, Some("x".repeat(257).as_str())),
        Err(SteamError::Parameter(_)),
    ));
    assert!(matches!(
        game.leaderboards().leaderboard_entries(1, 10, 0, Default::default()),
        Err(SteamError::Parameter(_)),
    ));
    assert!(matches!(
        game.inventory().exchange_item(&[1], &[], 2),
        Err(SteamError::Parameter(_)),
    ));
}

#[test]
fn test_http_error_propagates() {
    let mut http = MockHttp::new();

    http.expect_get()
        .returning(|_, _| Err(SteamError::Status(503)));

    assert!(matches!(game(http).current_players(), Err(SteamError::Status(503))));
}
