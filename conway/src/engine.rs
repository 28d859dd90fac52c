//! Grid evolution engine.
//!
//! Pure functions over [`Grid`]: every call borrows its input and returns a
//! fresh grid. The evaluator is a full rescan of every cell each generation.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::OutOfBoundsError;
use crate::grid::{Cell, Grid};

/// How neighborhoods are counted at the grid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Off-grid neighbors are dead.
    #[default]
    Clamped,
    /// Off-grid neighbors wrap to the opposite edge.
    Toroidal,
}

/// What happened to one cell between two generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellTransition {
    /// Alive, now dead.
    Dying,
    /// Dead, now alive.
    Born,
    /// Alive and stays alive.
    Surviving,
    /// Dead and stays dead.
    StillDead,
}

impl CellTransition {
    pub fn between(old: Cell, new: Cell) -> Self {
        match (old, new) {
            (Cell::Alive, Cell::Dead) => CellTransition::Dying,
            (Cell::Dead, Cell::Alive) => CellTransition::Born,
            (Cell::Alive, Cell::Alive) => CellTransition::Surviving,
            (Cell::Dead, Cell::Dead) => CellTransition::StillDead,
        }
    }

    /// State of the cell after the transition.
    pub fn next_cell(self) -> Cell {
        match self {
            CellTransition::Born | CellTransition::Surviving => Cell::Alive,
            CellTransition::Dying | CellTransition::StillDead => Cell::Dead,
        }
    }
}

/// Per-cell transitions for one generation, same shape as the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionMap {
    rows: usize,
    cols: usize,
    transitions: Vec<CellTransition>,
}

impl TransitionMap {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellTransition> {
        if row < self.rows && col < self.cols {
            Some(self.transitions[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterate over `(row, col, transition)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellTransition)> + '_ {
        let cols = self.cols;
        self.transitions
            .iter()
            .enumerate()
            .map(move |(i, &t)| (i / cols, i % cols, t))
    }

    /// Number of cells in the given category.
    pub fn count(&self, kind: CellTransition) -> usize {
        self.transitions.iter().filter(|&&t| t == kind).count()
    }
}

/// Number of live cells among the eight around `(row, col)`.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize, boundary: Boundary) -> u8 {
    let (rows, cols) = grid.dimensions();
    if rows == 0 || cols == 0 {
        return 0;
    }
    let mut count = 0;

    for dr in [-1isize, 0, 1] {
        for dc in [-1isize, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }
            let neighbor = match boundary {
                Boundary::Clamped => row
                    .checked_add_signed(dr)
                    .zip(col.checked_add_signed(dc)),
                Boundary::Toroidal => Some((wrap(row, dr, rows), wrap(col, dc, cols))),
            };
            if let Some((nr, nc)) = neighbor {
                if grid.is_alive(nr, nc) {
                    count += 1;
                }
            }
        }
    }
    count
}

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}

/// Next state of one cell under B3/S23.
pub fn apply_rule(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                     // Birth
        _ => Cell::Dead,                                    // Death or stays dead
    }
}

/// Compute the next generation.
pub fn next_generation(grid: &Grid, boundary: Boundary) -> Grid {
    let (rows, cols) = grid.dimensions();
    let cells = grid
        .iter()
        .map(|(row, col, cell)| apply_rule(cell, live_neighbors(grid, row, col, boundary)))
        .collect();
    let next = Grid::from_cells(rows, cols, cells);

    trace!(rows, cols, population = next.population(), "computed next generation");
    next
}

/// Compute the next generation and report what happened to every cell.
pub fn next_generation_with_transitions(grid: &Grid, boundary: Boundary) -> (Grid, TransitionMap) {
    let next = next_generation(grid, boundary);
    let transitions = grid
        .iter()
        .zip(next.iter())
        .map(|((_, _, old), (_, _, new))| CellTransition::between(old, new))
        .collect();

    let map = TransitionMap {
        rows: grid.rows(),
        cols: grid.cols(),
        transitions,
    };
    (next, map)
}

/// Copy of `grid` with one cell set.
pub fn apply_cell_edit(
    grid: &Grid,
    row: usize,
    col: usize,
    cell: Cell,
) -> Result<Grid, OutOfBoundsError> {
    let mut edited = grid.clone();
    edited.set(row, col, cell)?;
    Ok(edited)
}

/// All-dead grid, used for reset and the initial state.
pub fn clear(rows: usize, cols: usize) -> Grid {
    Grid::new(rows, cols)
}
