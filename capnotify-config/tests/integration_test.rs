//! Integration tests for capnotify-config

use capnotify_config::*;
use std::fs;

#[test]
fn test_settings_survive_reload_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capnotify.json");

    {
        let config = NotificationConfig::open(&path).unwrap();
        config
            .set_webhook_url("https://api.telegram.org/bot123/sendMessage")
            .unwrap();
        config.set_chat_id("-100123").unwrap();
        config.set_enabled(true).unwrap();
    }

    let reloaded = NotificationConfig::open(&path).unwrap();
    assert_eq!(
        reloaded.webhook_url(),
        "https://api.telegram.org/bot123/sendMessage"
    );
    assert_eq!(reloaded.chat_id(), "-100123");
    assert!(reloaded.is_enabled());
}

#[test]
fn test_settings_survive_reload_yaml_and_toml() {
    let dir = tempfile::tempdir().unwrap();

    for name in ["capnotify.yaml", "capnotify.toml"] {
        let path = dir.path().join(name);

        let config = NotificationConfig::open(&path).unwrap();
        config.set_chat_id("555").unwrap();
        config.set_enabled(false).unwrap();

        let reloaded = NotificationConfig::open(&path).unwrap();
        assert_eq!(reloaded.chat_id(), "555", "{}", name);
        assert!(!reloaded.is_enabled(), "{}", name);
    }
}

#[test]
fn test_persisted_file_uses_wire_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capnotify.json");

    let config = NotificationConfig::open(&path).unwrap();
    config.set_chat_id("42").unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["general"]["telegram_chat_id"], "42");
    assert_eq!(raw["general"]["telegram_webhook"], "");
    assert_eq!(raw["general"]["telegram_enabled"], false);
}

#[test]
fn test_unrelated_settings_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capnotify.json");
    fs::write(
        &path,
        r#"{"general": {"domain": "example.org", "https_port": 443}, "blacklist": {"mode": "unauth"}}"#,
    )
    .unwrap();

    let config = NotificationConfig::open(&path).unwrap();
    config.set_enabled(true).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["general"]["domain"], "example.org");
    assert_eq!(raw["general"]["https_port"], 443);
    assert_eq!(raw["general"]["telegram_enabled"], true);
    assert_eq!(raw["blacklist"]["mode"], "unauth");
}

#[test]
fn test_unsupported_extension() {
    let result = NotificationConfig::open("settings.ini");
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::ParseError("telegram_enabled".to_string());
    let display = format!("{}", err);
    assert!(display.contains("telegram_enabled"));
}
