use super::*;

#[test]
fn default_config_has_one_active_tab() {
    let config = SiteConfig::default();
    assert_eq!(config.tabs.iter().filter(|t| t.active).count(), 1);
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.player.seek_step_secs, 5.0);
    assert_eq!(config.player.default_volume, 0.7);
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = SiteConfig::from_json(r#"{ "title": "Demo", "theme": { "storage_key": "site-theme" } }"#).unwrap();
    assert_eq!(config.title, "Demo");
    assert_eq!(config.theme.storage_key, "site-theme");
    assert_eq!(config.theme.transition_delay_ms, 100);
    assert_eq!(config.player, PlayerConfig::default());
    assert_eq!(config.tabs, SiteConfig::default().tabs);
}

#[test]
fn from_json_reads_tabs_and_tracks() {
    let raw = r#"{
        "tabs": [
            { "id": "a", "label": "A" },
            { "id": "b", "label": "B", "active": true,
              "tracks": [{ "src": "/b.mp3", "title": "Bee" }] }
        ]
    }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.tabs.len(), 2);
    assert!(!config.tabs[0].active);
    assert!(config.tabs[1].active);
    assert_eq!(config.tabs[1].tracks[0].src, "/b.mp3");
    assert_eq!(config.tabs[1].tracks[0].title, "Bee");
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid site config"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_without_browser_returns_defaults() {
    assert_eq!(SiteConfig::load(), SiteConfig::default());
}
