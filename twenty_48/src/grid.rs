use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {col}) holds {value}, which is not a tile")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

/// Largest tile a `u32` cell can hold. It never merges, since its double does
/// not fit.
pub const MAX_TILE: u32 = 1 << 31;

/// Rectangular board of tile values. `0` is an empty cell, every other cell
/// is a power of two from 2 up to [`MAX_TILE`]. A grid without rows has no
/// columns either.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")
)]
pub struct Grid {
    rows: Vec<Vec<u32>>,
    cols: usize,
}

pub fn is_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid::from_rows_unchecked(vec![vec![0; cols]; rows], cols)
    }

    /// Build a grid from nested rows, rejecting ragged input and values that
    /// can never appear on a board.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            if let Some((c, &value)) = row.iter().enumerate().find(|(_, v)| !is_tile(**v)) {
                return Err(GridError::InvalidTile {
                    row: r,
                    col: c,
                    value,
                });
            }
        }
        Ok(Grid::from_rows_unchecked(rows, cols))
    }

    // rows are already known to be rectangular
    fn from_rows_unchecked(rows: Vec<Vec<u32>>, cols: usize) -> Self {
        let cols = if rows.is_empty() { 0 } else { cols };
        Self { rows, cols }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<u32>> {
        self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        self.rows[row][col] = value;
    }

    pub fn cells(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Row-major positions of every empty cell.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, v)| **v == 0)
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    pub fn has_empty(&self) -> bool {
        self.cells().any(|v| v == 0)
    }

    pub fn max_tile(&self) -> u32 {
        self.cells().max().unwrap_or(0)
    }

    pub fn sum(&self) -> u64 {
        self.cells().map(u64::from).sum()
    }

    pub fn transpose(&self) -> Grid {
        let rows = (0..self.cols)
            .map(|c| self.rows.iter().map(|row| row[c]).collect())
            .collect();
        Grid::from_rows_unchecked(rows, self.rows.len())
    }

    pub fn reverse_rows(&self) -> Grid {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Grid::from_rows_unchecked(rows, self.cols)
    }

    pub(crate) fn map_rows(&self, mut f: impl FnMut(&[u32]) -> Vec<u32>) -> Grid {
        let rows = self.rows.iter().map(|row| f(row)).collect();
        Grid::from_rows_unchecked(rows, self.cols)
    }

    fn print_row(f: &mut impl fmt::Write, row: &[u32]) -> fmt::Result {
        for &tile in row.iter() {
            match tile {
                0 => write!(f, "|{: ^5}", " ")?,
                t => write!(f, "|{: ^5}", t)?,
            }
        }
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(4, 4)
    }
}

impl TryFrom<Vec<Vec<u32>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u32>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            Grid::print_row(f, row)?;
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
