//! Tests for loading game configuration from disk.

use std::io::Write;
use strictly_tictactoe::{GameConfig, GameError, GameState, KeySettings, Player};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "dimension = 4").unwrap();
    writeln!(file, "[keys]").unwrap();
    writeln!(file, "empty = 0").unwrap();
    writeln!(file, "o = 1").unwrap();
    writeln!(file, "x = -1").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.playable_dimension(), Some(4));
    assert_eq!(config.keys(), &KeySettings::new(0, 1, -1));

    let keys = config.keys().to_keys().unwrap();
    let mut game = GameState::with_keys(4, keys).unwrap();
    game.play(0, 0);
    assert_eq!(game.grid().get(0, 0), Ok(-1));
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_config_with_colliding_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[keys]\nempty = 1\nx = 1").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(
        config.keys().to_keys(),
        Err(GameError::InvalidConfiguration {
            collided: "empty and X".to_string(),
            value: 1,
        })
    );
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
