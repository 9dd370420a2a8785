//! Configuration management and validation
//!
//! Provides the configuration structure for extraction runs: input/output
//! paths, variant selection, export settings, and logging preferences,
//! built from defaults plus CLI argument overrides.

use crate::app::services::list_parser::ListingVariant;
use crate::app::services::table_export::TableFormat;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Processing configuration for an extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingSettings {
    /// Listing file or directory to scan
    pub input_path: PathBuf,

    /// Directory receiving the exported tables
    pub output_path: PathBuf,

    /// Variant layout, or None for per-file detection
    pub variant: Option<ListingVariant>,

    /// Cap on report blocks indexed per file
    pub max_blocks: Option<usize>,

    /// Preview the run without writing output
    pub dry_run: bool,

    /// Overwrite existing output files
    pub force_overwrite: bool,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Output table format
    pub format: TableFormat,

    /// Simulation start date anchoring the elapsed-time column, as
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level filter (error, warn, info, debug, trace)
    pub level: String,
}

/// Complete configuration for the listing processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub processing: ProcessingSettings,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingSettings {
                input_path: PathBuf::from("."),
                output_path: PathBuf::from("./output"),
                variant: None,
                max_blocks: None,
                dry_run: false,
                force_overwrite: false,
            },
            export: ExportSettings {
                format: TableFormat::Csv,
                start_date: None,
            },
            logging: LoggingSettings {
                level: "warn".to_string(),
            },
        }
    }
}

impl Config {
    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if !self.processing.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.processing.input_path.display()
            )));
        }

        if let Some(max_blocks) = self.processing.max_blocks {
            if max_blocks == 0 {
                return Err(Error::configuration(
                    "Block limit must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(start_date) = &self.export.start_date {
            self.parse_start_date_str(start_date)?;
        }

        debug!("configuration validated");
        Ok(())
    }

    /// Parse the configured start date, if any
    pub fn parse_start_date(&self) -> Result<Option<chrono::NaiveDateTime>> {
        match &self.export.start_date {
            Some(s) => Ok(Some(self.parse_start_date_str(s)?)),
            None => Ok(None),
        }
    }

    fn parse_start_date_str(&self, s: &str) -> Result<chrono::NaiveDateTime> {
        let date = chrono::NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| Error::date_parsing(format!("Invalid start date: {}", s), e))?;
        date.and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::configuration(format!("Invalid start date time: {}", s)))
    }

    /// Create the output directory if it does not exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        let output = &self.processing.output_path;
        if !output.exists() {
            std::fs::create_dir_all(output).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create output directory '{}': {}",
                    output.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_sane() {
        let config = Config::default();
        assert_eq!(config.export.format, TableFormat::Csv);
        assert!(config.processing.variant.is_none());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_validate_rejects_missing_input() {
        let mut config = Config::default();
        config.processing.input_path = PathBuf::from("/nonexistent/workspace");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_block_limit() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.processing.input_path = temp_dir.path().to_path_buf();
        config.processing.max_blocks = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_start_date_parsing() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.processing.input_path = temp_dir.path().to_path_buf();

        config.export.start_date = Some("2015-10-21".to_string());
        assert!(config.validate().is_ok());
        let parsed = config.parse_start_date().unwrap().unwrap();
        assert_eq!(parsed.date().to_string(), "2015-10-21");

        config.export.start_date = Some("21/10/2015".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ensure_output_directory_creates_path() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.processing.output_path = temp_dir.path().join("nested/output");
        config.ensure_output_directory().unwrap();
        assert!(config.processing.output_path.is_dir());
    }
}
