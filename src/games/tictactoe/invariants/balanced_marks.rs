//! Balanced marks invariant: X leads O by at most one pawn.

use super::super::{GameState, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: X has the same number of pawns as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let keys = game.keys();
        let x_count = game.grid().count(keys.player(Player::X));
        let o_count = game.grid().count(keys.player(Player::O));

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Pawn balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many pawns as O, or one more"
    }
}
