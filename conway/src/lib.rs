//! Conway's Game of Life (B3/S23) on a fixed-size grid.
//!
//! - [`engine`] -- the stateless evolution rule, edits and reset.
//! - [`grid`] -- the [`Grid`] and [`Cell`] types.
//! - [`persist`] -- JSON load/save of grids.
//! - [`patterns`] -- built-in preset patterns.
//! - [`state`] -- [`SimulationState`], the front-end's mutable session.
//! - [`config`] -- [`LifeConfig`] settings.
//! - [`error`] -- error types.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod persist;
pub mod state;

pub use config::{ConfigError, LifeConfig};
pub use engine::{
    Boundary, CellTransition, TransitionMap, apply_cell_edit, clear, next_generation,
    next_generation_with_transitions,
};
pub use error::{FormatError, InvalidGridError, LifeError, OutOfBoundsError};
pub use grid::{Cell, Grid};
pub use patterns::{PATTERNS, Pattern};
pub use state::SimulationState;
