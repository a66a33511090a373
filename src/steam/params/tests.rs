use super::*;

#[test]
fn flags_encode_as_digits() {
    let params = Params::new().with_flag("notify", true).with_flag("force", false);

    assert_eq!(params.get("notify"), Some("1"));
    assert_eq!(params.get("force"), Some("0"));
}

#[test]
fn absent_options_are_skipped() {
    let params = Params::new()
        .with_opt("requestid", None::<u64>)
        .with_opt("itempropsjson", Some("{}"));

    assert_eq!(params.len(), 1);
    assert_eq!(params.get("requestid"), None);
    assert_eq!(params.get("itempropsjson"), Some("{}"));
}

#[test]
fn lists_are_indexed() {
    let params = Params::new().with_list("itemdefid", [100u64, 200, 300]);

    let actual: Vec<(&str, &str)> = params.iter().collect();
    let expected = vec![
        ("itemdefid[0]", "100"),
        ("itemdefid[1]", "200"),
        ("itemdefid[2]", "300"),
    ];

    assert_eq!(actual, expected);
}

#[test]
fn empty_list_adds_nothing() {
    let params = Params::new().with_list("add_tags", Vec::<String>::new());

    assert!(params.is_empty());
}

#[test]
fn names_hide_values() {
    let params = Params::new().with("key", "SECRET").with("appid", 480);

    assert_eq!(params.names(), "key,appid");
}
