#![allow(dead_code)]

use std::fs;

use wiremock::MockServer;

use steamworks_webapi::{Credentials, Game, Hosts, SteamClient};

pub const API_KEY: &str = "STEAM API KEY";
pub const APP_ID: u32 = 480;
pub const STEAM_ID: &str = "76561197960287930";

/// Convenience func to get a fixture from the standard path, as a string
pub fn fixture(s: &str) -> String {
    fs::read_to_string(format!("test/fixtures/{}", s)).unwrap()
}

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, APP_ID, Some(STEAM_ID))
}

/// A game whose api, partner and store hosts all point at the mock server
pub fn game(mock_steam: &MockServer) -> Game {
    let client = SteamClient::with_hosts(Hosts::single(&format!("http://{}", mock_steam.address())));

    Game::with_client(client, credentials())
}
