//! JSON persistence for grids.
//!
//! The on-disk format is a JSON array of arrays of 0/1 integers, row-major,
//! pretty-printed with four-space indentation.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::error::FormatError;
use crate::grid::Grid;

/// Default save file, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "game_state.json";

/// Render a grid as pretty-printed JSON.
pub fn to_json(grid: &Grid) -> Result<String, FormatError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    grid.to_rows().serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|err| FormatError::Encoding(err.utf8_error()))
}

/// Parse a grid of any dimensions from JSON.
pub fn from_json(text: &str) -> Result<Grid, FormatError> {
    let rows: Vec<Vec<i64>> = serde_json::from_str(text)?;
    Ok(Grid::from_rows(&rows)?)
}

/// Parse a grid and require it to be `rows x cols`.
pub fn from_json_sized(text: &str, rows: usize, cols: usize) -> Result<Grid, FormatError> {
    let grid = from_json(text)?;
    check_dimensions(&grid, rows, cols)?;
    Ok(grid)
}

pub fn check_dimensions(grid: &Grid, rows: usize, cols: usize) -> Result<(), FormatError> {
    if grid.dimensions() != (rows, cols) {
        return Err(FormatError::DimensionMismatch {
            expected_rows: rows,
            expected_cols: cols,
            found_rows: grid.rows(),
            found_cols: grid.cols(),
        });
    }
    Ok(())
}

/// Write a grid to `path`, replacing any existing file.
pub fn save(grid: &Grid, path: impl AsRef<Path>) -> Result<(), FormatError> {
    let path = path.as_ref();
    let json = to_json(grid)?;
    fs::write(path, json).map_err(|source| FormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), population = grid.population(), "saved grid");
    Ok(())
}

/// Read a grid from `path` and require it to match the active dimensions.
pub fn load(path: impl AsRef<Path>, rows: usize, cols: usize) -> Result<Grid, FormatError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = from_json_sized(&text, rows, cols)?;
    debug!(path = %path.display(), rows, cols, "loaded grid");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_nested_arrays_with_four_space_indent() {
        let grid = Grid::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        let json = to_json(&grid).unwrap();
        assert_eq!(
            json,
            "[\n    [\n        0,\n        1\n    ],\n    [\n        1,\n        0\n    ]\n]"
        );
    }

    #[test]
    fn empty_grids_round_trip() {
        for grid in [Grid::new(0, 5), Grid::new(4, 0), Grid::new(0, 0)] {
            let json = to_json(&grid).unwrap();
            assert_eq!(json, "[]");
            assert_eq!(from_json(&json).unwrap(), grid);
        }
    }

    #[test]
    fn encoding_errors_are_reported_not_replaced() {
        let bytes = [b'[', 0xff, b']'];
        let err = FormatError::Encoding(std::str::from_utf8(&bytes).unwrap_err());
        assert!(err.to_string().starts_with("grid JSON is not UTF-8"));
        assert!(to_json(&Grid::new(1, 1)).unwrap().is_ascii());
    }

    #[test]
    fn parses_compact_json() {
        let grid = from_json("[[0,0,1],[1,1,1]]").unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn rejects_non_binary_and_non_integer_values() {
        assert!(matches!(
            from_json("[[0, 2]]"),
            Err(FormatError::InvalidGrid(_))
        ));
        assert!(matches!(from_json("[[0, 0.5]]"), Err(FormatError::Json(_))));
        assert!(matches!(from_json("[[0, true]]"), Err(FormatError::Json(_))));
        assert!(matches!(from_json("{\"rows\": 1}"), Err(FormatError::Json(_))));
        assert!(matches!(from_json("not json"), Err(FormatError::Json(_))));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(matches!(
            from_json("[[0, 1], [1]]"),
            Err(FormatError::InvalidGrid(_))
        ));
    }

    #[test]
    fn sized_parse_rejects_other_dimensions() {
        let err = from_json_sized("[[0, 1, 0]]", 2, 3).unwrap_err();
        assert!(matches!(
            err,
            FormatError::DimensionMismatch {
                expected_rows: 2,
                expected_cols: 3,
                found_rows: 1,
                found_cols: 3,
            }
        ));
    }
}
