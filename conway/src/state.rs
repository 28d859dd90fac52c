//! Simulation state owned by the front-end.
//!
//! [`SimulationState`] bundles the grid with the generation counter, the
//! run/pause flag and the boundary mode. The engine stays stateless; this
//! type calls into it and applies the bookkeeping rules around each command.

use std::path::Path;

use tracing::{debug, info};

use crate::engine::{self, Boundary, TransitionMap};
use crate::error::{FormatError, OutOfBoundsError};
use crate::grid::{Cell, Grid};
use crate::{patterns, persist};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    grid: Grid,
    generation: u64,
    running: bool,
    boundary: Boundary,
}

impl SimulationState {
    /// All-dead grid at generation 0, paused.
    pub fn new(rows: usize, cols: usize, boundary: Boundary) -> Self {
        Self {
            grid: engine::clear(rows, cols),
            generation: 0,
            running: false,
            boundary,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.boundary = boundary;
    }

    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        debug!(running = self.running, "toggled simulation");
        self.running
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Advance one generation and return what changed.
    pub fn step(&mut self) -> TransitionMap {
        let (next, transitions) = engine::next_generation_with_transitions(&self.grid, self.boundary);
        self.grid = next;
        self.generation += 1;
        debug!(generation = self.generation, population = self.grid.population(), "stepped");
        transitions
    }

    /// Kill every cell, reset the counter and pause.
    pub fn clear(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.grid = engine::clear(rows, cols);
        self.generation = 0;
        self.running = false;
        info!("cleared grid");
    }

    /// Paint one cell alive or dead.
    pub fn paint(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), OutOfBoundsError> {
        self.grid.set(row, col, cell)
    }

    /// Swap in a whole new grid of the same dimensions.
    ///
    /// Resets the counter and pauses. On a dimension mismatch nothing changes.
    pub fn replace(&mut self, grid: Grid) -> Result<(), FormatError> {
        persist::check_dimensions(&grid, self.grid.rows(), self.grid.cols())?;
        self.grid = grid;
        self.generation = 0;
        self.running = false;
        Ok(())
    }

    pub fn load_preset(&mut self, id: &str) -> Result<(), FormatError> {
        let pattern = patterns::find(id)?;
        let grid = pattern.to_grid(self.grid.rows(), self.grid.cols())?;
        self.replace(grid)?;
        info!(preset = id, "loaded preset");
        Ok(())
    }

    /// Load a saved grid. On any failure the current state is kept.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), FormatError> {
        let path = path.as_ref();
        let grid = persist::load(path, self.grid.rows(), self.grid.cols())?;
        self.replace(grid)?;
        info!(path = %path.display(), "loaded grid from file");
        Ok(())
    }

    /// Pause and write the grid to `path`.
    pub fn save_file(&mut self, path: impl AsRef<Path>) -> Result<(), FormatError> {
        self.running = false;
        persist::save(&self.grid, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_paused() {
        let state = SimulationState::new(4, 6, Boundary::Clamped);
        assert_eq!(state.grid().dimensions(), (4, 6));
        assert!(state.grid().is_empty());
        assert_eq!(state.generation(), 0);
        assert!(!state.is_running());
    }

    #[test]
    fn step_advances_generation() {
        let mut state = SimulationState::new(5, 5, Boundary::Clamped);
        for col in 1..4 {
            state.paint(2, col, Cell::Alive).unwrap();
        }
        let transitions = state.step();
        assert_eq!(state.generation(), 1);
        assert_eq!(state.grid().alive_cells(), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(transitions.rows(), 5);
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = SimulationState::new(3, 3, Boundary::Toroidal);
        state.paint(1, 1, Cell::Alive).unwrap();
        state.step();
        state.toggle_running();
        state.clear();
        assert!(state.grid().is_empty());
        assert_eq!(state.generation(), 0);
        assert!(!state.is_running());
        assert_eq!(state.boundary(), Boundary::Toroidal);
    }

    #[test]
    fn preset_resets_generation() {
        let mut state = SimulationState::new(64, 96, Boundary::Clamped);
        state.step();
        state.toggle_running();
        state.load_preset("glider").unwrap();
        assert_eq!(state.generation(), 0);
        assert!(!state.is_running());
        assert_eq!(state.grid().population(), 5);
    }

    #[test]
    fn failed_preset_keeps_state() {
        let mut state = SimulationState::new(8, 8, Boundary::Clamped);
        state.paint(0, 0, Cell::Alive).unwrap();
        state.step();
        let before = state.clone();

        assert!(matches!(state.load_preset("missing"), Err(FormatError::UnknownPreset(_))));
        assert!(matches!(
            state.load_preset("gosper-glider-gun"),
            Err(FormatError::PresetDoesNotFit { .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn replace_rejects_other_dimensions() {
        let mut state = SimulationState::new(3, 3, Boundary::Clamped);
        state.paint(1, 1, Cell::Alive).unwrap();
        let err = state.replace(Grid::new(3, 4)).unwrap_err();
        assert!(matches!(err, FormatError::DimensionMismatch { .. }));
        assert!(state.grid().is_alive(1, 1));
    }
}
