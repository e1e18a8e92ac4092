//! Top-level game configuration, loadable from TOML

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::SearchConfig;
use crate::{DEFAULT_COLS, DEFAULT_ROWS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Grid geometry plus the search and evaluation settings.
///
/// Every field has a default, so partial TOML files work; a missing file
/// falls back to the defaults entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// Grids smaller than 4 in either dimension are accepted: no four-in-a-row
    /// is possible there and games can only end in a draw, but nothing breaks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be >= 1".into()));
        }
        if self.cols == 0 {
            return Err(ConfigError::Validation("cols must be >= 1".into()));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }

        let weights = &self.search.eval.weights;
        if weights.window_four < 0
            || weights.window_three < 0
            || weights.window_two < 0
            || weights.opponent_three < 0
            || weights.center < 0
        {
            return Err(ConfigError::Validation(
                "eval weights must be >= 0 (penalties are stored as magnitudes)".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// an example config file)
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::evaluate::EvalPolicy;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml_str = r#"
rows = 8

[search]
depth = 5
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, DEFAULT_COLS);
        assert_eq!(config.search.depth, 5);
        assert!(config.search.prune);
    }

    #[test]
    fn eval_policy_parses_kebab_case() {
        let toml_str = r#"
[search.eval]
policy = "one-sided"
center_bonus = false
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.eval.policy, EvalPolicy::OneSided);
        assert!(!config.search.eval.center_bonus);
    }

    #[test]
    fn validation_rejects_zero_depth() {
        let mut config = GameConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_geometry() {
        let mut config = GameConfig::default();
        config.rows = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_negative_weights() {
        let mut config = GameConfig::default();
        config.search.eval.weights.opponent_three = -4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn small_geometry_is_allowed() {
        let mut config = GameConfig::default();
        config.rows = 3;
        config.cols = 3;
        config.validate().expect("sub-4 grids degrade to draw-only");
    }

    #[test]
    fn load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.cols, DEFAULT_COLS);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
cols = 9

[search]
depth = 3
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.cols, 9);
        assert_eq!(config.search.depth, 3);
        assert_eq!(config.rows, DEFAULT_ROWS);
    }

    #[test]
    fn default_toml_round_trips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("round-tripped config should be valid");
    }
}
