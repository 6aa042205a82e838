//! Error types for the claimroute-core library.
//!
//! Field extraction and routing never fail; a field that cannot be found is
//! an absent value. These errors cover the surfaces around the core.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the claimroute library.
#[derive(Error, Debug)]
pub enum ClaimError {
    /// Report (de)serialization error.
    #[error("report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Errors related to loading and saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the claimroute library.
pub type Result<T> = std::result::Result<T, ClaimError>;
