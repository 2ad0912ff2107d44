//! Tic-tac-toe on an N×N board.

mod board;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use board::{Cell, Grid, LineGroup};
pub use error::GameError;
pub use game::{GameState, MAX_DIMENSION, MIN_DIMENSION};
pub use types::{GameStatus, Player, Tile, TileKeys};
