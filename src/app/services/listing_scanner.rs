//! Listing scanner for discovering simulation report files
//!
//! This module scans a directory tree for MODFLOW-family listing files so
//! the CLI can batch-extract a whole model workspace. Filtering is by file
//! extension and size; a model workspace also contains package input files
//! and binary head/budget output that must not be parsed as listings.

use crate::Result;
use crate::constants::is_listing_extension;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Information about a discovered listing file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingFileInfo {
    /// Full path to the listing file
    pub path: PathBuf,
    /// File stem used to derive output table names
    pub stem: String,
    /// File size in bytes
    pub size_bytes: u64,
}

impl ListingFileInfo {
    /// Get the base filename without path
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    }

    /// Rough estimate of report blocks from file size
    ///
    /// Budget plus time-summary sections average ~2KB per timestep.
    pub fn estimated_block_count(&self) -> usize {
        (self.size_bytes / 2048) as usize
    }
}

/// Statistics about discovered listing files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total number of listing files discovered
    pub total_files: usize,
    /// Total size of all files in bytes
    pub total_size_bytes: u64,
    /// Estimated total report block count
    pub estimated_total_blocks: usize,
}

/// Configuration for listing discovery
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum number of files to return
    pub max_files: Option<usize>,
    /// Minimum file size in bytes to include
    pub min_file_size: u64,
    /// Maximum file size in bytes to include
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_files: None,
            min_file_size: 0,
            max_file_size: u64::MAX,
        }
    }
}

/// Scanner for discovering listing files under a directory
pub struct ListingScanner {
    config: ScanConfig,
}

impl ListingScanner {
    /// Create a new scanner with default configuration
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    /// Create a new scanner with custom configuration
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan a directory tree and discover listing files
    ///
    /// A file path is returned as-is. Results are sorted by path for a
    /// consistent processing order.
    pub fn scan(&self, input_path: &Path) -> Result<Vec<ListingFileInfo>> {
        if input_path.is_file() {
            return Ok(self.file_info(input_path)?.into_iter().collect());
        }

        info!("Scanning for listing files in: {}", input_path.display());
        if !input_path.exists() {
            return Err(crate::Error::io(
                format!("Input directory does not exist: {}", input_path.display()),
                std::io::Error::new(std::io::ErrorKind::NotFound, "Directory not found"),
            ));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(input_path).follow_links(false) {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !is_listing_extension(ext) {
                continue;
            }

            if let Some(info) = self.file_info(path)? {
                files.push(info);
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        if let Some(max) = self.config.max_files {
            files.truncate(max);
        }

        info!("Discovered {} listing files", files.len());
        Ok(files)
    }

    /// Build file info, applying the size filter
    fn file_info(&self, path: &Path) -> Result<Option<ListingFileInfo>> {
        let metadata = std::fs::metadata(path)?;
        let size_bytes = metadata.len();
        if size_bytes < self.config.min_file_size || size_bytes > self.config.max_file_size {
            debug!(
                "skipping {} ({} bytes outside size filter)",
                path.display(),
                size_bytes
            );
            return Ok(None);
        }

        let stem = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        Ok(Some(ListingFileInfo {
            path: path.to_path_buf(),
            stem,
            size_bytes,
        }))
    }

    /// Generate statistics about discovered files
    pub fn generate_stats(&self, files: &[ListingFileInfo]) -> ScanStats {
        ScanStats {
            total_files: files.len(),
            total_size_bytes: files.iter().map(|f| f.size_bytes).sum(),
            estimated_total_blocks: files.iter().map(|f| f.estimated_block_count()).sum(),
        }
    }
}

impl Default for ListingScanner {
    fn default() -> Self {
        Self::new()
    }
}
