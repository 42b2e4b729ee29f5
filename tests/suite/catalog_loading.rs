//! Config file and external catalog loading.

use std::fs;
use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;

use zenpulse_config::{ConfigError, ZenConfig, affirmation_delay, load_catalog, parse_catalog};
use zenpulse_engine::{App, Artwork, SubscriptionProvider};

use crate::common::SMALL_CATALOG;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn config_points_at_an_external_catalog() {
    let dir = TempDir::new().expect("tempdir");
    let catalog_path = write(&dir, "catalog.toml", SMALL_CATALOG);
    let config_path = write(
        &dir,
        "config.toml",
        &format!(
            "[app]\nreduced_motion = true\n\n[affirmations]\ndelay_ms = 200\n\n[content]\ncatalog = {:?}\n",
            catalog_path.display().to_string()
        ),
    );

    let config = ZenConfig::load_from(&config_path).expect("config loads");
    assert_eq!(config.catalog_path().as_deref(), Some(catalog_path.as_path()));
    assert!(config.ui_options().reduced_motion);
    assert_eq!(affirmation_delay(Some(&config)), Duration::from_millis(200));

    let catalog = load_catalog(Some(&config)).expect("catalog loads");
    let titles: Vec<&str> = catalog
        .meditations()
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, ["Quiet Start", "Long Night"]);
    assert_eq!(catalog.free_count(), 1);
}

#[test]
fn external_catalog_drives_the_app() {
    let catalog = parse_catalog(SMALL_CATALOG, Path::new("small.toml")).expect("valid");
    let mut app = App::new(
        catalog,
        SubscriptionProvider::in_memory(),
        zenpulse_engine::UiOptions::default(),
        Duration::from_millis(10),
    );

    let views = app.card_views().expect("provided");
    assert!(!views[0].locked);
    assert!(views[1].locked);
    // Remote images have no local rendering.
    assert_eq!(views[1].item.artwork(), Artwork::Placeholder);

    app.open_paywall();
    assert_eq!(app.terms_line(), "Then 40/year. Cancel anytime.");
}

#[test]
fn missing_catalog_file_is_a_read_error() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("nope.toml");
    let config_path = write(
        &dir,
        "config.toml",
        &format!("[content]\ncatalog = {:?}\n", missing.display().to_string()),
    );
    let config = ZenConfig::load_from(&config_path).expect("config loads");

    let err = load_catalog(Some(&config)).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.path(), &missing);
}

#[test]
fn duplicate_ids_are_rejected_with_the_file_name() {
    let broken = SMALL_CATALOG.replace("id = \"b\"", "id = \"a\"");
    let err = parse_catalog(&broken, Path::new("dup.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Catalog { .. }));
    let message = err.to_string();
    assert!(message.contains("dup.toml"), "{message}");
    assert!(message.contains("duplicate meditation id"), "{message}");
}

#[test]
fn malformed_config_is_a_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let config_path = write(&dir, "config.toml", "[app\nascii_only = true\n");
    let err = ZenConfig::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
