//! Draw detection logic for tic-tac-toe.

use super::super::board::Grid;
use super::super::{GameError, TileKeys};
use super::win::check_winner;
use tracing::instrument;

/// Checks if any tile is still empty.
#[instrument(skip(grid, keys))]
pub fn has_space_left(grid: &Grid, keys: &TileKeys) -> bool {
    grid.any(keys.empty())
}

/// A full grid with no winner is a draw.
#[instrument(skip(grid, keys))]
pub fn is_draw(grid: &Grid, keys: &TileKeys) -> Result<bool, GameError> {
    Ok(!has_space_left(grid, keys) && check_winner(grid, keys)?.is_none())
}
