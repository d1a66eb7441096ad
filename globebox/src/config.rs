//! Tracker configuration.
//!
//! Settings can be loaded from an INI file with a `[bbox]` section:
//!
//! ```ini
//! [bbox]
//! ; smallest width/height in radians before the box is grown
//! epsilon = 1e-7
//! ; decimal places kept for persisted degree values
//! precision = 4
//! ```
//!
//! Missing keys fall back to their defaults.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::rectangle::DEFAULT_EPSILON;

/// Default number of decimal places for persisted degree values.
pub const DEFAULT_PRECISION: u32 = 4;

/// Largest precision accepted; beyond this `f64` has nothing left to round.
pub const MAX_PRECISION: u32 = 15;

/// INI section holding the tracker settings.
const SECTION: &str = "bbox";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid INI.
    #[error("Invalid INI: {0}")]
    Parse(String),

    /// A key holds a value of the wrong type.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// Epsilon must be positive and finite.
    #[error("epsilon must be a positive finite number, got {0}")]
    InvalidEpsilon(f64),

    /// Precision is too large to mean anything.
    #[error("precision must be at most {max} decimal places, got {value}")]
    InvalidPrecision { value: u32, max: u32 },
}

/// Tuning for [`crate::tracker::BboxTracker`] and the persisted model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Minimum angular span in radians before the degenerate-size guard kicks in.
    pub epsilon: f64,

    /// Decimal places kept when converting to degrees.
    pub precision: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from an INI file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ini_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            epsilon = config.epsilon,
            precision = config.precision,
            "Loaded tracker config"
        );
        Ok(config)
    }

    /// Parse configuration from INI text.
    pub fn from_ini_str(contents: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let mut config = Self::default();

        let Some(section) = ini.section(Some(SECTION)) else {
            return Ok(config);
        };

        for (key, value) in section.iter() {
            match key {
                "epsilon" => config.epsilon = parse_value(key, value)?,
                "precision" => config.precision = parse_value(key, value)?,
                other => tracing::warn!(key = other, "Ignoring unknown [bbox] setting"),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision {
                value: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.epsilon, 1e-7);
        assert_eq!(config.precision, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_ini_str() {
        let config = TrackerConfig::from_ini_str("[bbox]\nepsilon = 1e-6\nprecision = 6\n").unwrap();
        assert_eq!(config.epsilon, 1e-6);
        assert_eq!(config.precision, 6);
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config = TrackerConfig::from_ini_str("[other]\nkey = value\n").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = TrackerConfig::from_ini_str("[bbox]\nprecision = 2\n").unwrap();
        assert_eq!(config.epsilon, DEFAULT_EPSILON);
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = TrackerConfig::from_ini_str("[bbox]\ncolor = khaki\n").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_invalid_number() {
        let err = TrackerConfig::from_ini_str("[bbox]\nepsilon = tiny\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "epsilon"));
        assert!(err.to_string().contains("tiny"));
    }

    #[test]
    fn test_rejects_non_positive_epsilon() {
        let err = TrackerConfig::from_ini_str("[bbox]\nepsilon = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEpsilon(_)));

        let err = TrackerConfig::from_ini_str("[bbox]\nepsilon = -1e-7\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEpsilon(_)));
    }

    #[test]
    fn test_rejects_huge_precision() {
        let err = TrackerConfig::from_ini_str("[bbox]\nprecision = 40\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPrecision { value: 40, max: 15 }
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[bbox]").unwrap();
        writeln!(file, "epsilon = 2e-7").unwrap();

        let config = TrackerConfig::load(file.path()).unwrap();
        assert_eq!(config.epsilon, 2e-7);
        assert_eq!(config.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_load_missing_file() {
        let err = TrackerConfig::load(Path::new("/nonexistent/globebox.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/globebox.ini"));
    }
}
