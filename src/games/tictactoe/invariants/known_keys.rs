//! Known keys invariant: every tile holds one of the three keys.

use super::super::GameState;
use super::Invariant;

/// Invariant: every cell decodes to empty, X or O.
pub struct KnownKeysInvariant;

impl Invariant<GameState> for KnownKeysInvariant {
    fn holds(game: &GameState) -> bool {
        let keys = game.keys();
        game.grid()
            .cells()
            .iter()
            .all(|&value| keys.decode(value).is_some())
    }

    fn description() -> &'static str {
        "Every tile holds the empty, X or O key"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(KnownKeysInvariant::holds(&GameState::new(3).unwrap()));
    }

    #[test]
    fn test_foreign_value_violates() {
        let mut game = GameState::new(3).unwrap();
        game.grid.set(2, 2, 17).unwrap();
        assert!(!KnownKeysInvariant::holds(&game));
    }
}
