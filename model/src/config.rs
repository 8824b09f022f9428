use std::path::{Path, PathBuf};

/// Errors that can occur when loading game rules.
#[derive(Debug, thiserror::Error)]
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

/// Rules of a game, loadable from TOML. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square field.
    pub size: usize,
    /// Tile value that counts as a win. Play continues past it.
    pub win_value: u32,
    /// Chance that a spawned tile is a 4 rather than a 2.
    pub four_probability: f64,
    /// Tiles spawned on a fresh field.
    pub start_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: 4,
            win_value: 2048,
            four_probability: crate::field::FOUR_PROBABILITY,
            start_tiles: 2,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load rules from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::Validation("size must be >= 1".into()));
        }
        if self.win_value < 4 || !self.win_value.is_power_of_two() {
            return Err(ConfigError::Validation(
                "win_value must be a power of two >= 4".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::Validation(
                "four_probability must be in [0, 1]".into(),
            ));
        }
        if self.start_tiles > self.size * self.size {
            return Err(ConfigError::Validation(
                "start_tiles must not exceed the number of cells".into(),
            ));
        }
        Ok(())
    }

    /// TOML text with every default value filled in.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
