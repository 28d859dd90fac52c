//! Typed settings for the simulator.
//!
//! Every field has a default matching the classic 960x640 window at ten
//! pixels per cell, so an absent config file is not an error for the
//! front-end. A JSON file may override any subset of fields:
//!
//! ```json
//! { "rows": 40, "cols": 40, "boundary": "toroidal" }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::engine::Boundary;
use crate::grid::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::persist::DEFAULT_SAVE_PATH;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "CONWAY_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse JSON content.
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value is outside its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Side of one cell in pixels.
    pub cell_size: f32,
    pub boundary: Boundary,
    /// Delay between generations while running.
    pub update_interval_ms: u64,
    pub save_path: PathBuf,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_size: 10.0,
            boundary: Boundary::Clamped,
            update_interval_ms: 50,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl LifeConfig {
    /// Load and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Json`] if it does not parse, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `CONWAY_CONFIG`, or use defaults when the
    /// variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one cell, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }

    /// Canvas size in pixels as `(width, height)`.
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_window() {
        let config = LifeConfig::default();
        assert_eq!((config.rows, config.cols), (64, 96));
        assert_eq!(config.canvas_size(), (960.0, 640.0));
        assert_eq!(config.boundary, Boundary::Clamped);
        assert_eq!(config.save_path, PathBuf::from("game_state.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = LifeConfig::from_json(r#"{"rows": 40, "boundary": "toroidal"}"#).unwrap();
        assert_eq!(config.rows, 40);
        assert_eq!(config.cols, 96);
        assert_eq!(config.boundary, Boundary::Toroidal);
        assert_eq!(config.update_interval_ms, 50);
    }

    #[test]
    fn rejects_zero_dimensions_and_bad_cell_size() {
        assert!(matches!(
            LifeConfig::from_json(r#"{"cols": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            LifeConfig::from_json(r#"{"cell_size": -1.0}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            LifeConfig::from_json(r#"{"colour": "red"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LifeConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
