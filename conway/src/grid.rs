// grid.rs - Grid types for Conway's Game of Life

use std::fmt;

use crate::error::{InvalidGridError, OutOfBoundsError};

// Default canvas: 960x640 pixels at 10 pixels per cell
pub const DEFAULT_ROWS: usize = 64;
pub const DEFAULT_COLS: usize = 96;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Persisted integer form (0 or 1).
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl TryFrom<i64> for Cell {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(other),
        }
    }
}

/// A fixed-size rectangular matrix of cells, stored row-major.
///
/// The dimensions are set at construction and never change. Every way of
/// building a `Grid` from outside data goes through [`Grid::from_rows`], so
/// a `Grid` value is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid of the given dimensions.
    ///
    /// A grid with no cells is always 0x0, whichever dimension was zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        let (rows, cols) = if rows == 0 || cols == 0 { (0, 0) } else { (rows, cols) };
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Caller guarantees `cells.len() == rows * cols`.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Build a grid from raw row-major integer rows.
    ///
    /// Fails on ragged rows or any value other than 0 or 1. An empty slice,
    /// or rows with no cells, produce a 0x0 grid.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, InvalidGridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(InvalidGridError::RaggedRow {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                let cell = Cell::try_from(value)
                    .map_err(|value| InvalidGridError::NonBinaryCell { row: r, col: c, value })?;
                cells.push(cell);
            }
        }

        if cells.is_empty() {
            return Ok(Self::new(0, 0));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Grid with the listed `(row, col)` cells alive.
    pub fn with_alive(
        rows: usize,
        cols: usize,
        alive: &[(usize, usize)],
    ) -> Result<Self, OutOfBoundsError> {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Raw rows of 0/1 integers, the persisted representation.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.row_slices()
            .map(|row| row.iter().map(|cell| cell.as_u8()).collect())
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.contains(row, col) {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set one cell in place.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), OutOfBoundsError> {
        if !self.contains(row, col) {
            return Err(OutOfBoundsError {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[row * self.cols + col] = cell;
        Ok(())
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Iterate over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / cols, i % cols, cell))
    }

    /// Coordinates of every live cell, row-major.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|&(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    fn row_slices(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }
}

impl fmt::Display for Grid {
    /// `#` for alive, `.` for dead, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
