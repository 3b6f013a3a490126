use std::fs;

use brickfall_posts::core::config::config::GameConfig;

#[test]
fn shipped_config_matches_defaults() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron").expect("load shipped config");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty());
}

#[test]
fn partial_file_keeps_defaults_for_missing_keys() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("partial.ron");
    let ron = r#"
        (
            api: (base_url: "https://posts.example"),
            minigame: (tick_ms: 50, spawn_chance: 0.5),
        )
    "#;
    fs::write(&path, ron).expect("write temp ron");

    let (cfg, err) = GameConfig::load_or_default(&path);
    assert!(err.is_none(), "unexpected error: {err:?}");
    assert_eq!(cfg.api.endpoint(), "https://posts.example/api/external");
    assert_eq!(cfg.minigame.tick_ms, 50);
    assert_eq!(cfg.minigame.spawn_chance, 0.5);
    assert_eq!(cfg.minigame.lanes, 5);
    assert_eq!(cfg.minigame.catch_threshold, 280);
    assert_eq!(cfg.confetti.duration_secs, 5.0);
    assert_eq!(cfg.content.card_image, "images/rubics.jpg");
}

#[test]
fn missing_or_broken_file_falls_back_with_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (cfg, err) = GameConfig::load_or_default(dir.path().join("absent.ron"));
    assert_eq!(cfg, GameConfig::default());
    assert!(err.unwrap().contains("read config"));

    let broken = dir.path().join("broken.ron");
    fs::write(&broken, "( minigame: ( lanes: \"five\" ) )").expect("write");
    let (cfg, err) = GameConfig::load_or_default(&broken);
    assert_eq!(cfg, GameConfig::default());
    assert!(err.unwrap().contains("parse RON"));
}

#[test]
fn validation_flags_inconsistent_minigame() {
    let mut cfg = GameConfig::default();
    cfg.minigame.start_lane = 7;
    cfg.minigame.spawn_chance = 1.5;
    cfg.minigame.catch_threshold = 300;
    cfg.content.columns = 0;
    let warnings = cfg.validate();
    assert_eq!(warnings.len(), 4, "{warnings:#?}");
    assert!(warnings.iter().any(|w| w.contains("start_lane")));
    assert!(warnings.iter().any(|w| w.contains("spawn_chance")));
    assert!(warnings.iter().any(|w| w.contains("catch_threshold")));
    assert!(warnings.iter().any(|w| w.contains("columns")));
}
