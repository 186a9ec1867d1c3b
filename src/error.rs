use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures at the edges of conversion: reading input, loading config and
/// writing request payloads. Conversion itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read markdown file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode blocks: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write payload: {0}")]
    Write(io::Error),
}
