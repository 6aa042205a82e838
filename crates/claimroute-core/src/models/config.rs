//! Configuration structures for transcript processing.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Main configuration for claimroute.
///
/// Routing thresholds and keyword lists are fixed and deliberately absent here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimrouteConfig {
    /// Transcript assembly configuration.
    pub transcript: TranscriptConfig,

    /// Report output configuration.
    pub output: OutputConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,
}

/// How per-page transcripts are joined into one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Insert `--- PAGE n ---` markers between pages.
    pub page_markers: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self { page_markers: true }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
    Text,
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: ReportFormat,

    /// Pretty-print JSON reports.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            pretty: true,
        }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Keep going when a single transcript fails to load.
    pub continue_on_error: bool,

    /// Transcript file extension picked up by glob patterns.
    pub extension: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            continue_on_error: false,
            extension: "txt".to_string(),
        }
    }
}

impl ClaimrouteConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClaimrouteConfig =
            serde_json::from_str(r#"{"output": {"format": "csv"}}"#).unwrap();

        assert_eq!(config.output.format, ReportFormat::Csv);
        assert!(config.output.pretty);
        assert!(config.transcript.page_markers);
        assert_eq!(config.batch.extension, "txt");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ClaimrouteConfig::default();
        config.batch.continue_on_error = true;
        config.save(&path).unwrap();

        assert_eq!(ClaimrouteConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ClaimrouteConfig::from_file(&dir.path().join("absent.json"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
