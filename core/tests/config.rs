use pricewatch_core::{
    config::{DashboardConfig, DrawRange},
    view::SUGGESTED_RATIO,
    WatchError,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn defaults_match_the_dashboard_constants() {
    let config = DashboardConfig::default();
    assert_eq!(config.data_file, "menu_prices.csv");
    assert_eq!(config.suggested_ratio, 0.95);
    assert_eq!(config.suggested_ratio, SUGGESTED_RATIO);
    assert_eq!(config.demo.regions, vec!["Karnataka", "Tamil Nadu", "Telangana"]);
    assert_eq!(config.demo.dishes.len(), 6);
    assert_eq!(config.demo.base_price, DrawRange::new(100, 220));
    assert_eq!(config.live_jitter, DrawRange::new(-5, 5));
    assert_eq!(config.default_account.username, "admin");
    config.validate().unwrap();
}

#[test]
fn partial_file_keeps_defaults_for_missing_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pricewatch.json");
    fs::write(
        &path,
        r#"{ "data_file": "kitchen.csv", "demo": { "dishes": ["Thali"] } }"#,
    )
    .unwrap();

    let config = DashboardConfig::load(path.to_str().unwrap()).unwrap();
    assert_eq!(config.data_file, "kitchen.csv");
    assert_eq!(config.demo.dishes, vec!["Thali"]);
    assert_eq!(config.demo.regions.len(), 3);
    assert_eq!(config.live_jitter, DrawRange::new(-5, 5));
}

#[test]
fn inverted_range_is_rejected() {
    let config = DashboardConfig {
        live_jitter: DrawRange::new(5, -5),
        ..DashboardConfig::default()
    };
    match config.validate() {
        Err(WatchError::InvalidInput(msg)) => assert!(msg.contains("live_jitter"), "{msg}"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn empty_catalog_is_rejected() {
    let mut config = DashboardConfig::default();
    config.demo.regions.clear();
    assert!(matches!(config.validate(), Err(WatchError::InvalidInput(_))));
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    match DashboardConfig::load(path.to_str().unwrap()) {
        Err(WatchError::Other(e)) => assert!(e.to_string().contains("Cannot read"), "{e}"),
        other => panic!("expected Other, got {other:?}"),
    }
}

#[test]
fn malformed_config_json_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pricewatch.json");
    fs::write(&path, r#"{ "data_file": 42 }"#).unwrap();

    assert!(matches!(
        DashboardConfig::load(path.to_str().unwrap()),
        Err(WatchError::Serialization(_))
    ));
}
