//! Strictly Tic-Tac-Toe library - N×N tic-tac-toe for two players
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe core: grid, turns, win and draw detection
//! - **Config**: TOML settings for board size and tile keys
//! - **Console**: text front end that prompts for moves and prints the board
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, Player};
//!
//! let mut game = GameState::new(3)?;
//! for (x, y) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
//!     game.play(x, y);
//! }
//! assert_eq!(game.winner()?, Some(Player::X));
//! # Ok::<(), strictly_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, KeySettings};

// Crate-level exports - Console front end
pub use console::Console;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::invariants::{
    BalancedMarksInvariant, Invariant, InvariantSet, InvariantViolation, KnownKeysInvariant,
    TicTacToeInvariants, TurnCountInvariant,
};
pub use games::tictactoe::rules::{check_winner, group_winners, has_space_left, is_draw};
pub use games::tictactoe::{
    Cell, GameError, GameState, GameStatus, Grid, LineGroup, MAX_DIMENSION, MIN_DIMENSION, Player,
    Tile, TileKeys,
};
