//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a grid according to
//! tic-tac-toe rules. Rules are separated from grid storage so they work
//! for any board size and any valid key encoding.

pub mod draw;
pub mod win;

pub use draw::{has_space_left, is_draw};
pub use win::{check_winner, group_winners};
