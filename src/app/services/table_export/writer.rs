//! CSV and Parquet writers for exported budget tables

use super::frame::budget_frame;
use crate::app::models::LoadedListing;
use crate::constants::get_output_filename;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Output table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TableFormat {
    /// Comma-separated text tables
    Csv,
    /// Parquet tables with Snappy compression
    Parquet,
}

impl TableFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }
}

/// Writer for the incremental/cumulative table pair of one listing file
#[derive(Debug, Clone)]
pub struct TableWriter {
    output_dir: PathBuf,
    force_overwrite: bool,
}

impl TableWriter {
    /// Create a writer targeting an output directory
    pub fn new(output_dir: impl Into<PathBuf>, force_overwrite: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            force_overwrite,
        }
    }

    /// Write both tables of a loaded listing
    ///
    /// Returns the written paths with their file sizes, for reporting.
    pub fn write_tables(
        &self,
        stem: &str,
        loaded: &LoadedListing,
        format: TableFormat,
        start: Option<NaiveDateTime>,
    ) -> Result<Vec<(PathBuf, u64)>> {
        let mut written = Vec::with_capacity(2);
        for (kind, table) in [
            ("incremental", &loaded.incremental),
            ("cumulative", &loaded.cumulative),
        ] {
            let path = self
                .output_dir
                .join(get_output_filename(stem, kind, format.extension()));
            if path.exists() && !self.force_overwrite {
                return Err(Error::output_exists(path.display().to_string()));
            }

            let mut frame = budget_frame(table, start)?;
            let size = self.write_frame(&mut frame, &path, format)?;
            info!("wrote {} ({} rows)", path.display(), frame.height());
            written.push((path, size));
        }
        Ok(written)
    }

    fn write_frame(
        &self,
        frame: &mut DataFrame,
        path: &Path,
        format: TableFormat,
    ) -> Result<u64> {
        let file = File::create(path)
            .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

        match format {
            TableFormat::Csv => {
                CsvWriter::new(file)
                    .include_header(true)
                    .finish(frame)
                    .map_err(|e| {
                        Error::table_export(format!("failed to write {}", path.display()), e)
                    })?;
            }
            TableFormat::Parquet => {
                ParquetWriter::new(file)
                    .with_compression(ParquetCompression::Snappy)
                    .finish(frame)
                    .map_err(|e| {
                        Error::table_export(format!("failed to write {}", path.display()), e)
                    })?;
            }
        }

        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        debug!("{} is {} bytes", path.display(), size);
        Ok(size)
    }
}
