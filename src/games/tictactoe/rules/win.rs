//! Win detection logic for tic-tac-toe.

use super::super::board::{Cell, Grid, LineGroup};
use super::super::{GameError, Player, Tile, TileKeys};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Decodes every cell of a line.
fn decode_line(grid: &Grid, keys: &TileKeys, line: &[Cell]) -> Result<Vec<Tile>, GameError> {
    line.iter()
        .map(|&(x, y)| {
            let value = grid.at((x, y));
            keys.decode(value)
                .ok_or(GameError::InvalidTile { x, y, value })
        })
        .collect()
}

/// Player owning every tile of the line, if there is one.
///
/// A line with any empty tile is never a win.
fn line_owner(tiles: &[Tile]) -> Option<Player> {
    let owner = tiles.first()?.owner()?;
    tiles
        .iter()
        .all(|tile| *tile == Tile::Occupied(owner))
        .then_some(owner)
}

/// Players holding a complete line within one group.
#[instrument(skip(grid, keys))]
pub fn group_winners(
    grid: &Grid,
    keys: &TileKeys,
    group: LineGroup,
) -> Result<Vec<Player>, GameError> {
    let mut winners = Vec::new();
    for line in group.lines(grid.dimension()) {
        let tiles = decode_line(grid, keys, &line)?;
        if let Some(player) = line_owner(&tiles)
            && !winners.contains(&player)
        {
            winners.push(player);
        }
    }
    Ok(winners)
}

/// Checks if there is a winner on the grid.
///
/// Rows, columns and both diagonals are evaluated independently. X is
/// reported ahead of O should both hold a complete line.
#[instrument(skip(grid, keys))]
pub fn check_winner(grid: &Grid, keys: &TileKeys) -> Result<Option<Player>, GameError> {
    let mut winners = Vec::new();
    for group in LineGroup::iter() {
        let found = group_winners(grid, keys, group)?;
        if !found.is_empty() {
            debug!(%group, ?found, "Completed line");
        }
        winners.extend(found);
    }
    Ok(Player::iter().find(|player| winners.contains(player)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(dimension: usize, keys: &TileKeys, marks: &[(i64, i64, Player)]) -> Grid {
        let mut grid = Grid::new(dimension, keys.empty()).unwrap();
        for &(x, y, player) in marks {
            grid.set(x, y, keys.player(player)).unwrap();
        }
        grid
    }

    #[test]
    fn test_no_winner_empty_board() {
        let keys = TileKeys::default();
        let grid = Grid::new(3, keys.empty()).unwrap();
        assert_eq!(check_winner(&grid, &keys), Ok(None));
    }

    #[test]
    fn test_winner_row() {
        let keys = TileKeys::default();
        let grid = grid_with(3, &keys, &[(0, 1, Player::X), (1, 1, Player::X), (2, 1, Player::X)]);
        assert_eq!(check_winner(&grid, &keys), Ok(Some(Player::X)));
        assert_eq!(group_winners(&grid, &keys, LineGroup::Rows), Ok(vec![Player::X]));
        assert_eq!(group_winners(&grid, &keys, LineGroup::Columns), Ok(vec![]));
    }

    #[test]
    fn test_winner_column_reports_o() {
        let keys = TileKeys::default();
        let grid = grid_with(3, &keys, &[(2, 0, Player::O), (2, 1, Player::O), (2, 2, Player::O)]);
        assert_eq!(check_winner(&grid, &keys), Ok(Some(Player::O)));
    }

    #[test]
    fn test_winner_anti_diagonal_large_board() {
        let keys = TileKeys::default();
        let marks: Vec<_> = (0..5).map(|i| (4 - i, i, Player::O)).collect();
        let grid = grid_with(5, &keys, &marks);
        assert_eq!(check_winner(&grid, &keys), Ok(Some(Player::O)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let keys = TileKeys::default();
        let grid = grid_with(3, &keys, &[(0, 0, Player::X), (1, 0, Player::X)]);
        assert_eq!(check_winner(&grid, &keys), Ok(None));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let keys = TileKeys::default();
        let grid = grid_with(3, &keys, &[(0, 0, Player::X), (1, 0, Player::O), (2, 0, Player::X)]);
        assert_eq!(check_winner(&grid, &keys), Ok(None));
    }

    #[test]
    fn test_x_takes_precedence() {
        let keys = TileKeys::default();
        let grid = grid_with(
            3,
            &keys,
            &[
                (0, 0, Player::O),
                (1, 0, Player::O),
                (2, 0, Player::O),
                (0, 2, Player::X),
                (1, 2, Player::X),
                (2, 2, Player::X),
            ],
        );
        assert_eq!(check_winner(&grid, &keys), Ok(Some(Player::X)));
    }

    #[test]
    fn test_custom_keys_win() {
        let keys = TileKeys::new(0, 1, -1).unwrap();
        let grid = grid_with(4, &keys, &[(0, 0, Player::O), (1, 1, Player::O), (2, 2, Player::O), (3, 3, Player::O)]);
        assert_eq!(check_winner(&grid, &keys), Ok(Some(Player::O)));
    }

    #[test]
    fn test_unknown_value_is_invalid_tile() {
        let keys = TileKeys::default();
        let mut grid = Grid::new(3, keys.empty()).unwrap();
        grid.set(1, 2, 42).unwrap();
        assert_eq!(
            check_winner(&grid, &keys),
            Err(GameError::InvalidTile { x: 1, y: 2, value: 42 })
        );
    }
}
