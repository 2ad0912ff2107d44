//! Strictly Tic-Tac-Toe - console game
//!
//! Reads the board size and moves from stdin, prints the board to stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io;
use strictly_tictactoe::{Console, GameConfig, GameState};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    run_game(&config)
}

/// Merges the optional config file with command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let base = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    let keys = base
        .keys()
        .with_overrides(cli.empty_key, cli.o_key, cli.x_key);
    Ok(base.with_dimension(cli.dimension).with_keys(keys))
}

/// Runs one game on stdin/stdout.
#[instrument(skip(config))]
fn run_game(config: &GameConfig) -> Result<()> {
    let keys = config
        .keys()
        .to_keys()
        .context("Cannot set up the board")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let dimension = match config.playable_dimension() {
        Some(dimension) => dimension,
        None => console.read_dimension()?,
    };

    info!(dimension, "Starting game");
    let mut game = GameState::with_keys(dimension, keys)?;
    let status = console.run(&mut game)?;
    info!(?status, "Session over");
    Ok(())
}
