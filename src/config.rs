//! Solver configuration, loaded from TOML.
//!
//! ```
//! use dish_grouping::config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     trial_count = 500
//!     random_seed = 7
//!     input_dir = "instances"
//! "#).unwrap();
//!
//! assert_eq!(config.trial_count, 500);
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.output_extension, "out");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::{Params, DEFAULT_TRIAL_COUNT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Randomized construction trials per instance.
    pub trial_count: usize,

    /// Seed for reproducible runs; drawn from OS entropy when absent.
    pub random_seed: Option<u64>,

    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub input_extension: String,
    pub output_extension: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            trial_count: DEFAULT_TRIAL_COUNT,
            random_seed: None,
            input_dir: PathBuf::from("input_files"),
            output_dir: PathBuf::from("output_files"),
            input_extension: "in".to_string(),
            output_extension: "out".to_string(),
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, contains invalid TOML, or
    /// fails [`SolverConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SolverConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_extension.is_empty() || self.output_extension.is_empty() {
            return Err(ConfigError::Invalid("file extensions must not be empty".to_string()));
        }
        if self.input_dir == self.output_dir && self.input_extension == self.output_extension {
            return Err(ConfigError::Invalid(format!(
                "output files would overwrite inputs in {}",
                self.input_dir.display()
            )));
        }
        Ok(())
    }

    pub fn with_trial_count(mut self, trial_count: usize) -> Self {
        self.trial_count = trial_count;
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn params(&self) -> Params {
        Params { trial_count: self.trial_count }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = SolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, SolverConfig::default());
        assert_eq!(config.trial_count, 10_000);
        assert_eq!(config.input_dir, PathBuf::from("input_files"));
    }

    #[test]
    fn toml_parsing() {
        let config = SolverConfig::from_toml_str(
            r#"
            trial_count = 0
            random_seed = 42
            output_dir = "solutions"
            output_extension = "txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.trial_count, 0);
        assert_eq!(config.random_seed, Some(42));
        assert_eq!(config.output_dir, PathBuf::from("solutions"));
        assert_eq!(config.params().trial_count, 0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            SolverConfig::from_toml_str("trials = 3"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn validation() {
        assert!(matches!(
            SolverConfig::from_toml_str(r#"input_extension = """#),
            Err(ConfigError::Invalid(_))
        ));
        let mut clash = SolverConfig::new().with_output_dir("input_files");
        clash.output_extension = "in".to_string();
        assert!(clash.validate().is_err());
    }

    #[test]
    fn builder() {
        let config = SolverConfig::new()
            .with_trial_count(12)
            .with_random_seed(3)
            .with_input_dir("a")
            .with_output_dir("b");
        assert_eq!(config.trial_count, 12);
        assert_eq!(config.random_seed, Some(3));
        assert_eq!(config.input_dir, PathBuf::from("a"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(matches!(
            SolverConfig::load("/nonexistent/solver.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
