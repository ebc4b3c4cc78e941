//! Handle-Scout: a resumable handle-availability scanner
//!
//! This crate implements a batch scanner that checks whether handles are
//! still unclaimed on a target platform by rendering each handle's profile
//! page and classifying its banner. Progress is checkpointed after every
//! handle so interrupted runs resume where they left off.

pub mod checkpoint;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod input;
pub mod state;

use thiserror::Error;

/// Main error type for Handle-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Checkpoint write failed for {path}: {source}")]
    CheckpointWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("Checkpoint serialization failed: {0}")]
    CheckpointSerialize(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Input-list errors; these are fatal at startup since there is nothing
/// to scan without a usable handle list.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read handle list {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Handle list {path} contains no handles")]
    Empty { path: String },
}

/// Result type alias for Handle-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use checkpoint::Checkpoint;
pub use classifier::{Classifier, ClassifyError, HttpClassifier};
pub use config::Config;
pub use engine::{ScanEngine, ScanSummary};
pub use state::{HandleSet, ScanState};
