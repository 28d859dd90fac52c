//! Error types for the `conway` crate.
//!
//! Each concern has its own error: [`InvalidGridError`] for malformed raw
//! grids, [`OutOfBoundsError`] for edits outside the grid, and
//! [`FormatError`] for persisted or preset data. [`LifeError`] wraps all
//! three for callers that do not care which one they got.

use std::path::PathBuf;

/// Raw grid data that cannot form a rectangular 0/1 matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGridError {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A cell holds something other than 0 or 1.
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    NonBinaryCell {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// The rejected value.
        value: i64,
    },
}

/// An edit aimed at a coordinate outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
pub struct OutOfBoundsError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Grid height.
    pub rows: usize,
    /// Grid width.
    pub cols: usize,
}

/// Persisted or preset grid data that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The file could not be read or written.
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not a JSON array of integer arrays.
    #[error("malformed grid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Serialized output was not valid UTF-8.
    #[error("grid JSON is not UTF-8: {0}")]
    Encoding(#[source] std::str::Utf8Error),

    /// The document parsed but is not a valid 0/1 matrix.
    #[error("invalid grid data: {0}")]
    InvalidGrid(#[from] InvalidGridError),

    /// The grid does not match the active canvas.
    #[error(
        "grid is {found_rows}x{found_cols}, expected {expected_rows}x{expected_cols}"
    )]
    DimensionMismatch {
        /// Active grid height.
        expected_rows: usize,
        /// Active grid width.
        expected_cols: usize,
        /// Height of the rejected grid.
        found_rows: usize,
        /// Width of the rejected grid.
        found_cols: usize,
    },

    /// No preset with this identifier exists.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A preset has cells outside the active canvas.
    #[error("preset {id} does not fit a {rows}x{cols} grid")]
    PresetDoesNotFit {
        /// Preset identifier.
        id: &'static str,
        /// Active grid height.
        rows: usize,
        /// Active grid width.
        cols: usize,
    },
}

/// Any error produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error(transparent)]
    InvalidGrid(#[from] InvalidGridError),

    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),

    #[error(transparent)]
    Format(#[from] FormatError),
}
