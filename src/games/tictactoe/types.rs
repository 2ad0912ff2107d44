//! Core domain types for tic-tac-toe.

use super::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Player in the game.
///
/// Iteration order is X then O, which is also the order in which wins are
/// reported when both could be detected at once.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

/// Decoded contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Nobody has played here yet.
    Empty,
    /// Tile claimed by a player.
    Occupied(Player),
}

impl Tile {
    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '_',
            Tile::Occupied(Player::X) => 'X',
            Tile::Occupied(Player::O) => 'O',
        }
    }

    /// Returns the owner of the tile, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Tile::Empty => None,
            Tile::Occupied(player) => Some(player),
        }
    }
}

/// Integer tags used to encode tiles in the grid.
///
/// The three values are always pairwise distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileKeys {
    empty: i32,
    o: i32,
    x: i32,
}

impl TileKeys {
    /// Default encoding: empty = -1, O = 0, X = 1.
    pub const DEFAULT: TileKeys = TileKeys {
        empty: -1,
        o: 0,
        x: 1,
    };

    /// Builds a key triple, rejecting any pair of equal keys.
    #[instrument]
    pub fn new(empty: i32, o: i32, x: i32) -> Result<Self, GameError> {
        let collision = if empty == o && o == x {
            Some(("empty, O and X", empty))
        } else if empty == o {
            Some(("empty and O", empty))
        } else if empty == x {
            Some(("empty and X", empty))
        } else if o == x {
            Some(("O and X", o))
        } else {
            None
        };

        if let Some((collided, value)) = collision {
            warn!(collided, value, "Rejected tile key configuration");
            return Err(GameError::InvalidConfiguration {
                collided: collided.to_string(),
                value,
            });
        }

        Ok(Self { empty, o, x })
    }

    /// Key marking an empty tile.
    pub fn empty(&self) -> i32 {
        self.empty
    }

    /// Key marking a tile owned by O.
    pub fn o(&self) -> i32 {
        self.o
    }

    /// Key marking a tile owned by X.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Key identifying the given player's pawns.
    pub fn player(&self, player: Player) -> i32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Encodes a tile as its integer key.
    pub fn encode(&self, tile: Tile) -> i32 {
        match tile {
            Tile::Empty => self.empty,
            Tile::Occupied(player) => self.player(player),
        }
    }

    /// Decodes an integer key, returning `None` for values outside the triple.
    pub fn decode(&self, value: i32) -> Option<Tile> {
        if value == self.empty {
            Some(Tile::Empty)
        } else if value == self.x {
            Some(Tile::Occupied(Player::X))
        } else if value == self.o {
            Some(Tile::Occupied(Player::O))
        } else {
            None
        }
    }
}

impl Default for TileKeys {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Every tile is taken and nobody completed a line.
    Draw,
}
