//! Turn count invariant: one occupied tile per completed turn.

use super::super::GameState;
use super::Invariant;

/// Invariant: the number of occupied tiles equals the turn counter.
///
/// Tiles only go from empty to occupied and each successful placement
/// advances the counter by exactly one, so the two always agree.
pub struct TurnCountInvariant;

impl Invariant<GameState> for TurnCountInvariant {
    fn holds(game: &GameState) -> bool {
        let grid = game.grid();
        let occupied = grid.cells().len() - grid.count(game.keys().empty());
        occupied == game.turn_count()
    }

    fn description() -> &'static str {
        "Occupied tiles match the number of turns played"
    }
}
