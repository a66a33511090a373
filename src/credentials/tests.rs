use super::*;

fn parent() -> Credentials {
    Credentials::new("PARENT KEY", 480, Some("76561197960287930"))
}

#[test]
fn inherit_without_overrides() {
    let actual = parent().inherit(Overrides::default());

    assert_eq!(actual, parent());
}

#[test]
fn inherit_overrides_only_given_fields() {
    let actual = parent().inherit(Overrides::default().app_id(730));

    let expected = Credentials {
        api_key: "PARENT KEY".to_string(),
        app_id: 730,
        steam_id: Some("76561197960287930".to_string()),
    };
    assert_eq!(actual, expected);
}

#[test]
fn inherit_overrides_everything() {
    let overrides = Overrides::default()
        .api_key("OTHER KEY")
        .app_id(570)
        .steam_id("76561198000000000");

    let expected = Credentials::new("OTHER KEY", 570, Some("76561198000000000"));
    assert_eq!(parent().inherit(overrides), expected);
}

#[test]
fn inherit_keeps_missing_steam_id_absent() {
    let creds = Credentials::new("KEY", 480, None);

    assert_eq!(creds.inherit(Overrides::default()).steam_id, None);
}

#[test]
fn player_params_skip_missing_steam_id() {
    let with_id = parent().player_params();
    let without_id = Credentials::new("KEY", 480, None).player_params();

    assert_eq!(with_id.get("steamid"), Some("76561197960287930"));
    assert_eq!(with_id.get("appid"), Some("480"));
    assert_eq!(without_id.get("steamid"), None);
    assert_eq!(without_id.get("key"), Some("KEY"));
}
