use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Conversion options. Heading colors are free-form color names that end up
/// as `<color>_background` on the emitted heading blocks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub heading1_color: String,
    pub heading2_color: String,
    pub heading3_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            heading1_color: "gray".to_string(),
            heading2_color: "gray".to_string(),
            heading3_color: "gray".to_string(),
        }
    }
}

impl Config {
    /// The configuration bundled with the crate (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        // build.rs has already checked the bundled file.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled default if the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Color for a heading level, if the level maps to a heading block.
    pub fn heading_color(&self, level: u8) -> Option<&str> {
        match level {
            1 => Some(&self.heading1_color),
            2 => Some(&self.heading2_color),
            3 => Some(&self.heading3_color),
            _ => None,
        }
    }
}
