use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a key table config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// Path is not valid UTF-8 and cannot be tilde-expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// Configuration file is not valid YAML or has the wrong shape.
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
