//! Console front end: prompts for integers and prints the board.

use crate::games::tictactoe::{GameState, GameStatus, MAX_DIMENSION, MIN_DIMENSION};
use anyhow::{Context, Result, bail};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Reads whitespace-separated integers from `input` and writes prompts and
/// boards to `output`.
///
/// Malformed tokens are discarded and the prompt repeats. Running out of
/// input is an error.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read from input")?;
            if read == 0 {
                bail!("Input ended before the game finished");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Reads one integer, or `None` if the next token is not an integer.
    fn next_integer(&mut self) -> Result<Option<i64>> {
        let token = self.next_token()?;
        let parsed = token.parse::<i64>().ok();
        if parsed.is_none() {
            debug!(%token, "Discarded malformed input");
        }
        Ok(parsed)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")
    }

    fn show(&mut self, game: &GameState) -> Result<()> {
        let board = game.render()?;
        writeln!(self.output, "{}\n", board).context("Failed to write board")
    }

    /// Prompts until an integer between [`MIN_DIMENSION`] and
    /// [`MAX_DIMENSION`] is entered.
    #[instrument(skip(self))]
    pub fn read_dimension(&mut self) -> Result<usize> {
        loop {
            self.prompt("Enter board dimensions : ")?;
            if let Some(value) = self.next_integer()?
                && let Ok(dimension) = usize::try_from(value)
                && (MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension)
            {
                return Ok(dimension);
            }
        }
    }

    /// Prompts the current player for coordinates.
    ///
    /// Values are only loosely filtered to `0..=dimension`; the game itself
    /// rejects anything that is not a playable tile.
    #[instrument(skip(self, game), fields(player = %game.current_player()))]
    pub fn read_coordinates(&mut self, game: &GameState) -> Result<(i64, i64)> {
        let limit = i64::try_from(game.dimension()).unwrap_or(i64::MAX);
        loop {
            writeln!(self.output, "It is {}'s turn!", game.current_player())?;
            writeln!(self.output, "Place a pawn at coordinates")?;

            self.prompt("x : ")?;
            let Some(x) = self.next_integer()? else {
                continue;
            };
            self.prompt("y : ")?;
            let Some(y) = self.next_integer()? else {
                continue;
            };

            if (0..=limit).contains(&x) && (0..=limit).contains(&y) {
                return Ok((x, y));
            }
            debug!(x, y, "Coordinates outside the board");
        }
    }

    /// Plays a game to completion and announces the result.
    #[instrument(skip_all, fields(dimension = game.dimension()))]
    pub fn run(&mut self, game: &mut GameState) -> Result<GameStatus> {
        self.show(game)?;

        while !game.is_over()? {
            let (x, y) = self.read_coordinates(game)?;
            if !game.play(x, y) {
                debug!(x, y, "Tile not playable, asking again");
            }
            self.show(game)?;
        }

        let status = game.status()?;
        match status {
            GameStatus::Won(player) => writeln!(self.output, "Player {} wins!", player)?,
            GameStatus::Draw => writeln!(self.output, "It's a draw!")?,
            GameStatus::InProgress => {}
        }
        info!(?status, turns = game.turn_count(), "Game finished");
        Ok(status)
    }
}
