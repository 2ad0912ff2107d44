//! Game engine for N×N tic-tac-toe.
//!
//! [`GameState`] owns the grid, the turn counter and the key encoding.
//! Illegal placements are silent no-ops so a driver can simply re-prompt.

use super::board::Grid;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::{check_winner, has_space_left};
use super::{GameError, GameStatus, Player, Tile, TileKeys};
use tracing::{debug, info, instrument};

/// Smallest board a game is played on.
pub const MIN_DIMENSION: usize = 3;

/// Largest board a game can be created with.
pub const MAX_DIMENSION: usize = 100;

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) grid: Grid,
    pub(super) keys: TileKeys,
    pub(super) turn_count: usize,
}

impl GameState {
    /// Creates a game on a `dimension × dimension` board with the default keys.
    ///
    /// Callers are expected to pass a dimension of at least [`MIN_DIMENSION`].
    /// Anything above [`MAX_DIMENSION`] is rejected.
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, GameError> {
        Self::with_keys(dimension, TileKeys::default())
    }

    /// Creates a game using a custom key encoding.
    #[instrument]
    pub fn with_keys(dimension: usize, keys: TileKeys) -> Result<Self, GameError> {
        let grid = Grid::new(dimension, keys.empty())?;
        info!(dimension, "New game");
        Ok(Self {
            grid,
            keys,
            turn_count: 0,
        })
    }

    /// Side length of the board.
    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    /// Number of successful placements so far.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Key encoding used by the grid.
    pub fn keys(&self) -> &TileKeys {
        &self.keys
    }

    /// Raw grid of keys.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Player whose turn it is: X on even turns, O on odd turns.
    pub fn current_player(&self) -> Player {
        if self.turn_count % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Decoded tile at `(x, y)`.
    pub fn tile(&self, x: i64, y: i64) -> Result<Tile, GameError> {
        let (col, row) = self.grid.cell(x, y)?;
        let value = self.grid.at((col, row));
        self.keys.decode(value).ok_or(GameError::InvalidTile {
            x: col,
            y: row,
            value,
        })
    }

    /// Whether `(x, y)` is on the board and still empty.
    pub fn is_playable(&self, x: i64, y: i64) -> bool {
        matches!(self.grid.get(x, y), Ok(value) if value == self.keys.empty())
    }

    /// Places the current player's pawn at `(x, y)`.
    ///
    /// Returns `false` without touching any state when the tile is occupied
    /// or off the board.
    #[instrument(skip(self), fields(player = %self.current_player(), turn = self.turn_count))]
    pub fn play(&mut self, x: i64, y: i64) -> bool {
        if !self.is_playable(x, y) {
            debug!("Tile not playable");
            return false;
        }

        let key = self.keys.player(self.current_player());
        if let Err(e) = self.grid.set(x, y, key) {
            debug!(error = %e, "Placement rejected by grid");
            return false;
        }
        self.turn_count += 1;
        debug!("Pawn placed");

        debug_assert!(
            TicTacToeInvariants::check_all(self).is_ok(),
            "Invariant violated after placement at ({x}, {y})"
        );
        true
    }

    /// Whether any tile is still empty.
    pub fn has_space_left(&self) -> bool {
        has_space_left(&self.grid, &self.keys)
    }

    /// Player holding a completed row, column or diagonal.
    ///
    /// `Ok(None)` covers both an ongoing game and a draw; use
    /// [`has_space_left`](Self::has_space_left) to tell them apart.
    pub fn winner(&self) -> Result<Option<Player>, GameError> {
        check_winner(&self.grid, &self.keys)
    }

    /// Overall status derived from the winner and the remaining space.
    #[instrument(skip(self))]
    pub fn status(&self) -> Result<GameStatus, GameError> {
        let status = match self.winner()? {
            Some(player) => GameStatus::Won(player),
            None if self.has_space_left() => GameStatus::InProgress,
            None => GameStatus::Draw,
        };
        Ok(status)
    }

    /// Whether the game has ended in a win or a draw.
    pub fn is_over(&self) -> Result<bool, GameError> {
        Ok(self.status()? != GameStatus::InProgress)
    }

    /// Renders the board as rows of `_`, `O` and `X` separated by spaces.
    ///
    /// There is no trailing newline after the last row.
    pub fn render(&self) -> Result<String, GameError> {
        let dimension = self.dimension();
        let mut rows = Vec::with_capacity(dimension);
        for (y, row) in self.grid.cells().chunks(dimension.max(1)).enumerate() {
            let symbols = row
                .iter()
                .enumerate()
                .map(|(x, &value)| {
                    self.keys
                        .decode(value)
                        .map(|tile| tile.symbol().to_string())
                        .ok_or(GameError::InvalidTile { x, y, value })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(symbols.join(" "));
        }
        Ok(rows.join("\n"))
    }
}
