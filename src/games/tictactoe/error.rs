//! Errors raised by the tic-tac-toe core.

use super::game::MAX_DIMENSION;
use derive_more::{Display, Error};

/// Error that can occur while configuring or inspecting a game.
///
/// Playing an occupied or off-board tile is not an error; see
/// [`GameState::play`](super::GameState::play).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Two or more tile keys share a value.
    #[display("Invalid tile keys: {} share the value {}", collided, value)]
    InvalidConfiguration {
        /// Which keys collided.
        collided: String,
        /// The shared value.
        value: i32,
    },

    /// Board dimension too large to allocate.
    #[display("Board dimension {} exceeds the maximum of {}", dimension, MAX_DIMENSION)]
    InvalidDimension {
        /// Requested dimension.
        dimension: usize,
    },

    /// Direct cell access outside the grid.
    #[display(
        "Coordinates ({}, {}) are outside the board; both must be between 0 and {}",
        x,
        y,
        dimension.saturating_sub(1)
    )]
    OutOfRange {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
        /// Board dimension.
        dimension: usize,
    },

    /// A cell holds a value that is none of the three tile keys.
    #[display("Tile ({}, {}) holds unknown value {}", x, y, value)]
    InvalidTile {
        /// Column of the tile.
        x: usize,
        /// Row of the tile.
        y: usize,
        /// The offending value.
        value: i32,
    },
}
