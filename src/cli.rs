//! Command-line interface for strictly_tictactoe.

use clap::Parser;

/// Strictly Tic-Tac-Toe - two players, one console, any board size
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player N×N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Board dimension (prompted for when absent or below 3)
    #[arg(short, long)]
    pub dimension: Option<usize>,

    /// Integer key for empty tiles
    #[arg(long, allow_hyphen_values = true)]
    pub empty_key: Option<i32>,

    /// Integer key for O's pawns
    #[arg(long, allow_hyphen_values = true)]
    pub o_key: Option<i32>,

    /// Integer key for X's pawns
    #[arg(long, allow_hyphen_values = true)]
    pub x_key: Option<i32>,
}
