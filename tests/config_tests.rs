//! Integration tests for loading and saving the config file

use penmate::config::{Config, ConfigManager};
use std::fs;
use tempfile::TempDir;
use tokio_test::assert_ok;

#[test]
fn test_missing_file_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = ConfigManager::new(temp_dir.path());

    assert_ok!(manager.load());

    assert_eq!(manager.get_config(), &Config::default());
    assert!(manager.get_config().editor.show_line_numbers);
    assert_eq!(manager.get_config().editor.check_threshold, 10);
    assert!(manager.get_config().ui.show_ad_banner);
    assert_eq!(manager.get_config().ui.toast_duration_ms, 3000);
    assert!(!manager.path().exists());
}

#[test]
fn test_load_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    let mut manager = ConfigManager::new(&nested);

    assert_ok!(manager.load());

    assert!(nested.is_dir());
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();

    let mut manager = ConfigManager::new(temp_dir.path());
    {
        let config = manager.get_config_mut();
        config.editor.check_threshold = 25;
        config.ui.show_ad_banner = false;
        config
            .assistant
            .dictionary
            .insert("thier".to_string(), "their".to_string());
        config.assistant.negative_words.push("gloomy".to_string());
    }
    manager.save().unwrap();
    assert_eq!(manager.path(), temp_dir.path().join("config.json"));

    let mut reloaded = ConfigManager::new(temp_dir.path());
    assert_ok!(reloaded.load());

    assert_eq!(reloaded.get_config(), manager.get_config());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "editor": { "check_threshold": 3 }, "assistant": { "positive_words": ["glad"] } }"#,
    )
    .unwrap();

    let mut manager = ConfigManager::new(temp_dir.path());
    assert_ok!(manager.load());
    let config = manager.into_config();

    assert_eq!(config.editor.check_threshold, 3);
    assert!(config.editor.show_line_numbers);
    assert_eq!(config.assistant.positive_words, vec!["glad"]);
    assert!(config.assistant.dictionary.is_empty());
    assert!(config.ui.show_ad_banner);
}

#[test]
fn test_invalid_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.json"), "{ not json").unwrap();

    let mut manager = ConfigManager::new(temp_dir.path());
    let err = manager.load().unwrap_err();

    assert!(err.to_string().contains("Failed to parse config"));
    assert_eq!(manager.get_config(), &Config::default());
}
