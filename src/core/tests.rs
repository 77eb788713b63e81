use super::*;
use bevy::log::Level;

#[test]
fn test_pause_sources_stack() {
    let mut paused = GameplayPaused::default();
    assert!(!paused.is_paused());

    paused.toggle("menu");
    paused.toggle("dialog");
    paused.toggle("menu");
    assert!(paused.is_paused());

    paused.toggle("dialog");
    assert!(!paused.is_paused());
}

#[test]
fn test_pause_toggle() {
    let mut paused = GameplayPaused::default();
    assert!(paused.toggle("menu"));
    assert!(paused.is_paused());
    assert!(!paused.toggle("menu"));
    assert!(!paused.is_paused());
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = GameConfig::parse(
        "config.ron",
        r#"(tick_hz: 120.0, rng_seed: 42, window: (title: "Test"))"#,
    )
    .expect("config parses");

    assert_eq!(config.tick_hz, 120.0);
    assert_eq!(config.rng_seed, Some(42));
    assert_eq!(config.seed(), 42);
    assert_eq!(config.window.title, "Test");
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.content_dir, "assets/data");
}

#[test]
fn test_config_rejects_non_positive_tick_rate() {
    let error = GameConfig::parse("config.ron", "(tick_hz: 0.0)").expect_err("zero rate");
    assert!(error.message.contains("tick_hz"));
}

#[test]
fn test_missing_config_falls_back() {
    let path = std::env::temp_dir().join("hollowreach_missing_config.ron");
    let (config, error) = GameConfig::load_or_default(&path);
    assert_eq!(config, GameConfig::default());
    assert!(error.is_some());
}

#[test]
fn test_log_level_parsing() {
    let mut config = GameConfig::default();
    config.log_level = "debug".to_string();
    assert_eq!(config.level(), Level::DEBUG);
    config.log_level = "loud".to_string();
    assert_eq!(config.level(), Level::INFO);
}
