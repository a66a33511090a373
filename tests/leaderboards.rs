mod utils;

use tokio;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{body_string_contains, method, path, query_param};

use steamworks_webapi::SteamError;
use steamworks_webapi::models::leaderboard::{
    DataRequest,
    DisplayType,
    LeaderboardOptions,
    ScoreMethod,
    SortMethod,
};

async fn mock_post(endpoint: &str, fixture: &str) -> MockServer {
    let mock_steam = MockServer::start().await;
    let response = utils::fixture(fixture);

    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .mount(&mock_steam)
        .await;

    mock_steam
}

#[tokio::test]
async fn test_delete_leaderboard_success() {
    let mock_steam = mock_post("/ISteamLeaderboards/DeleteLeaderboard/v1/", "leaderboards/result-ok.json").await;
    let leaderboards = utils::game(&mock_steam).leaderboards();

    assert!(leaderboards.delete_leaderboard("Feet Traveled").unwrap());
}

#[tokio::test]
async fn test_delete_leaderboard_failure() {
    let mock_steam = mock_post("/ISteamLeaderboards/DeleteLeaderboard/v1/", "leaderboards/result-failed.json").await;
    let leaderboards = utils::game(&mock_steam).leaderboards();

    assert!(!leaderboards.delete_leaderboard("Feet Traveled").unwrap());
}

#[tokio::test]
async fn test_delete_leaderboard_sends_form() {
    let mock_steam = MockServer::start().await;
    let response = utils::fixture("leaderboards/result-ok.json");

    Mock::given(method("POST"))
        .and(path("/ISteamLeaderboards/DeleteLeaderboard/v1/"))
        .and(body_string_contains("key=STEAM+API+KEY"))
        .and(body_string_contains("appid=480"))
        .and(body_string_contains("name=Feet+Traveled"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .expect(1)
        .mount(&mock_steam)
        .await;

    let leaderboards = utils::game(&mock_steam).leaderboards();

    assert!(leaderboards.delete_leaderboard("Feet Traveled").unwrap());
}

#[tokio::test]
async fn test_reset_leaderboard_success() {
    let mock_steam = mock_post("/ISteamLeaderboards/ResetLeaderboard/v1/", "leaderboards/result-ok.json").await;
    let leaderboards = utils::game(&mock_steam).leaderboards();

    assert!(leaderboards.reset_leaderboard(2468).unwrap());
}

#[tokio::test]
async fn test_reset_leaderboard_failure() {
    let mock_steam = mock_post("/ISteamLeaderboards/ResetLeaderboard/v1/", "leaderboards/result-failed.json").await;
    let leaderboards = utils::game(&mock_steam).leaderboards();

    assert!(!leaderboards.reset_leaderboard(2468).unwrap());
}

#[tokio::test]
async fn test_find_or_create_leaderboard() {
    let mock_steam = MockServer::start().await;
    let response = utils::fixture("leaderboards/find-or-create-1.json");

    Mock::given(method("POST"))
        .and(path("/ISteamLeaderboards/FindOrCreateLeaderboard/v2/"))
        .and(body_string_contains("sortmethod=Descending"))
        .and(body_string_contains("displaytype=Numeric"))
        .and(body_string_contains("createifnotfound=1"))
        .and(body_string_contains("onlytrustedwrites=1"))
        .and(body_string_contains("onlyfriendsreads=0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .mount(&mock_steam)
        .await;

    let leaderboards = utils::game(&mock_steam).leaderboards();
    let options = LeaderboardOptions {
        sort_method: SortMethod::Descending,
        only_trusted_writes: true,
        ..LeaderboardOptions::default()
    };

    let found = leaderboards.find_or_create_leaderboard("Feet Traveled", &options).unwrap();
    let board = found.leaderboard.unwrap();

    assert_eq!(found.result, 1);
    assert_eq!(board.id, 2468);
    assert_eq!(board.name, "Feet Traveled");
    assert_eq!(board.entries, 42);
    assert_eq!(board.sort_method, SortMethod::Descending);
    assert_eq!(board.display_type, DisplayType::Numeric);
    assert!(board.only_trusted_writes);
}

#[tokio::test]
async fn test_set_leaderboard_score() {
    let mock_steam = MockServer::start().await;
    let response = utils::fixture("leaderboards/set-score-1.json");

    Mock::given(method("POST"))
        .and(path("/ISteamLeaderboards/SetLeaderboardScore/v1/"))
        .and(body_string_contains("steamid=76561197960287930"))
        .and(body_string_contains("leaderboardid=2468"))
        .and(body_string_contains("score=9001"))
        .and(body_string_contains("scoremethod=ForceUpdate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .mount(&mock_steam)
        .await;

    let leaderboards = utils::game(&mock_steam).leaderboards();
    let result = leaderboards.set_leaderboard_score(2468, 9001, ScoreMethod::ForceUpdate, None).unwrap();

    assert_eq!(result.result, 1);
    assert!(result.score_changed);
    assert_eq!(result.global_rank_new, 7);
    assert_eq!(result.leaderboard_entry_count, 43);
}

#[test]
fn test_set_leaderboard_score_details_too_long() {
    let leaderboards = steamworks_webapi::Game::new(utils::credentials()).leaderboards();
    let details = "x".repeat(257);

    let actual = leaderboards.set_leaderboard_score(1, 1, ScoreMethod::KeepBest, Some(&details));

    assert!(matches!(actual, Err(SteamError::Parameter(_))));
}

#[tokio::test]
async fn test_leaderboards_for_game() {
    let mock_steam = MockServer::start().await;
    let response = utils::fixture("leaderboards/leaderboards-for-game-1.json");

    Mock::given(method("GET"))
        .and(path("/ISteamLeaderboards/GetLeaderboardsForGame/v2/"))
        .and(query_param("appid", "480"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .mount(&mock_steam)
        .await;

    let boards = utils::game(&mock_steam).leaderboards().leaderboards_for_game().unwrap();

    assert_eq!(boards.len(), 2);
    assert_eq!(boards[0].display_name, Some("Feet Traveled".to_string()));
    assert_eq!(boards[1].name, "Quickest Win");
    assert_eq!(boards[1].display_type, DisplayType::TimeSeconds);
}

#[tokio::test]
async fn test_leaderboard_entries() {
    let mock_steam = MockServer::start().await;
    let response = utils::fixture("leaderboards/entries-1.json");

    Mock::given(method("GET"))
        .and(path("/ISteamLeaderboards/GetLeaderboardEntries/v1/"))
        .and(query_param("leaderboardid", "2468"))
        .and(query_param("rangestart", "0"))
        .and(query_param("rangeend", "10"))
        .and(query_param("datarequest", "RequestGlobal"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .mount(&mock_steam)
        .await;

    let leaderboards = utils::game(&mock_steam).leaderboards();
    let entries = leaderboards.leaderboard_entries(2468, 0, 10, DataRequest::RequestGlobal).unwrap();

    assert_eq!(entries.total, 42);
    assert_eq!(entries.entries.len(), 2);
    assert_eq!(entries.entries[0].steam_id, utils::STEAM_ID);
    assert_eq!(entries.entries[0].rank, 1);
}

#[test]
fn test_leaderboard_entries_empty_range() {
    let leaderboards = steamworks_webapi::Game::new(utils::credentials()).leaderboards();

    let actual = leaderboards.leaderboard_entries(1, 10, 0, DataRequest::RequestAroundUser);

    assert!(matches!(actual, Err(SteamError::Parameter(_))));
}
