//! Square grid storage for tic-tac-toe.
//!
//! The grid stores raw integer keys in row-major order. It knows nothing
//! about players or turns; [`GameState`](super::GameState) layers the rules
//! on top and is the only writer during a game.

use super::error::GameError;
use super::game::MAX_DIMENSION;
use tracing::instrument;

/// A cell coordinate: `(x, y)` where `x` is the column and `y` the row.
pub type Cell = (usize, usize);

/// The four independent groups of lines evaluated for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum LineGroup {
    /// Every row.
    Rows,
    /// Every column.
    Columns,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl LineGroup {
    /// Cells of every line in this group for a board of `dimension`.
    pub fn lines(self, dimension: usize) -> Vec<Vec<Cell>> {
        match self {
            LineGroup::Rows => (0..dimension)
                .map(|y| (0..dimension).map(|x| (x, y)).collect())
                .collect(),
            LineGroup::Columns => (0..dimension)
                .map(|x| (0..dimension).map(|y| (x, y)).collect())
                .collect(),
            LineGroup::MainDiagonal => vec![(0..dimension).map(|i| (i, i)).collect()],
            LineGroup::AntiDiagonal => {
                vec![(0..dimension).map(|i| (dimension - 1 - i, i)).collect()]
            }
        }
    }
}

/// Fixed-size `dimension × dimension` grid of tile keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Allocates a grid with every cell set to `fill`.
    ///
    /// Fails when `dimension` exceeds [`MAX_DIMENSION`] or its square
    /// overflows `usize`.
    #[instrument]
    pub fn new(dimension: usize, fill: i32) -> Result<Self, GameError> {
        let len = dimension
            .checked_mul(dimension)
            .filter(|_| dimension <= MAX_DIMENSION)
            .ok_or(GameError::InvalidDimension { dimension })?;
        Ok(Self {
            dimension,
            cells: vec![fill; len],
        })
    }

    /// Side length of the grid.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    /// Validates `(x, y)` into an in-range cell.
    pub fn cell(&self, x: i64, y: i64) -> Result<Cell, GameError> {
        let in_range = |v: i64| usize::try_from(v).ok().filter(|v| *v < self.dimension);
        match (in_range(x), in_range(y)) {
            (Some(col), Some(row)) => Ok((col, row)),
            _ => Err(GameError::OutOfRange {
                x,
                y,
                dimension: self.dimension,
            }),
        }
    }

    fn index(&self, x: i64, y: i64) -> Result<usize, GameError> {
        let (col, row) = self.cell(x, y)?;
        Ok(row * self.dimension + col)
    }

    /// Reads the key stored at `(x, y)`.
    pub fn get(&self, x: i64, y: i64) -> Result<i32, GameError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Writes `value` at `(x, y)`.
    #[instrument(skip(self))]
    pub fn set(&mut self, x: i64, y: i64, value: i32) -> Result<(), GameError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Key at an in-range cell produced by [`LineGroup::lines`] or a row scan.
    pub(super) fn at(&self, (x, y): Cell) -> i32 {
        self.cells[y * self.dimension + x]
    }

    /// Whether any cell still holds `key`.
    pub fn any(&self, key: i32) -> bool {
        self.cells.contains(&key)
    }

    /// Number of cells holding `key`.
    pub fn count(&self, key: i32) -> usize {
        self.cells.iter().filter(|&&v| v == key).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_filled() {
        let grid = Grid::new(4, -1).unwrap();
        assert_eq!(grid.cells().len(), 16);
        assert!(grid.cells().iter().all(|&v| v == -1));
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = Grid::new(3, -1).unwrap();
        grid.set(2, 1, 1).unwrap();
        assert_eq!(grid.get(2, 1), Ok(1));
        assert_eq!(grid.at((2, 1)), 1);
        assert_eq!(grid.cells()[5], 1);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::new(3, -1).unwrap();
        assert_eq!(
            grid.get(3, 0),
            Err(GameError::OutOfRange {
                x: 3,
                y: 0,
                dimension: 3
            })
        );
        assert!(grid.get(0, -1).is_err());
        assert!(grid.set(-1, 2, 1).is_err());
        assert!(grid.set(0, 10, 1).is_err());
        assert!(grid.cells().iter().all(|&v| v == -1));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert_eq!(
            Grid::new(MAX_DIMENSION + 1, -1),
            Err(GameError::InvalidDimension {
                dimension: MAX_DIMENSION + 1
            })
        );
        assert!(Grid::new(usize::MAX, -1).is_err());
        assert!(Grid::new(MAX_DIMENSION, -1).is_ok());
    }

    #[test]
    fn test_cell_validates_coordinates() {
        let grid = Grid::new(3, -1).unwrap();
        assert_eq!(grid.cell(2, 0), Ok((2, 0)));
        assert!(grid.cell(-1, 0).is_err());
        assert!(grid.cell(0, 3).is_err());
    }

    #[test]
    fn test_line_groups() {
        assert_eq!(LineGroup::Rows.lines(3)[1], vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(LineGroup::Columns.lines(3)[2], vec![(2, 0), (2, 1), (2, 2)]);
        assert_eq!(
            LineGroup::MainDiagonal.lines(4),
            vec![vec![(0, 0), (1, 1), (2, 2), (3, 3)]]
        );
        assert_eq!(
            LineGroup::AntiDiagonal.lines(3),
            vec![vec![(2, 0), (1, 1), (0, 2)]]
        );
        assert_eq!(LineGroup::Rows.lines(5).len(), 5);
    }
}
