//! Data models for listing-file processing
//!
//! This module contains the core data structures for representing the block
//! index of a listing file and the assembled water-budget and timing tables.

use crate::constants::BUDGET_SENTINEL_LABEL;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Block Index
// =============================================================================

/// Location of one report block inside a listing file
///
/// Produced by the block locator during the forward indexing pass. The offset
/// is the byte position of the start of the line containing the key phrase,
/// so an extractor can seek there and re-read the whole block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLocation {
    /// Timestep index as printed in the file
    pub time_step: u32,

    /// Stress-period index as printed in the file
    pub stress_period: u32,

    /// Byte offset of the start of the block's key-phrase line
    pub offset: u64,
}

// =============================================================================
// Budget Tables
// =============================================================================

/// One assembled budget table (incremental or cumulative)
///
/// Column-major: one value vector per budget entry, plus the synthesized
/// elapsed-time, timestep, and stress-period columns. All vectors share the
/// same length and row order as the block index that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTable {
    /// Budget entry keys in schema order (established from the first block)
    pub entries: Vec<String>,

    /// Value columns keyed by entry name
    pub values: HashMap<String, Vec<f64>>,

    /// Elapsed simulation time per row (NaN where the time pass had no data)
    pub totim: Vec<f64>,

    /// Timestep index per row
    pub time_step: Vec<u32>,

    /// Stress-period index per row
    pub stress_period: Vec<u32>,
}

impl BudgetTable {
    /// Create an empty table with the given entry schema
    pub fn with_entries(entries: Vec<String>) -> Self {
        let values = entries
            .iter()
            .map(|e| (e.clone(), Vec::new()))
            .collect::<HashMap<_, _>>();
        Self {
            entries,
            values,
            totim: Vec::new(),
            time_step: Vec::new(),
            stress_period: Vec::new(),
        }
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.time_step.len()
    }

    /// Returns `true` if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.time_step.is_empty()
    }

    /// Get one entry column by key
    pub fn column(&self, entry: &str) -> Option<&[f64]> {
        self.values.get(entry).map(|v| v.as_slice())
    }

    /// Get one cell value by entry key and row
    pub fn value(&self, entry: &str, row: usize) -> Option<f64> {
        self.values.get(entry).and_then(|v| v.get(row)).copied()
    }
}

// =============================================================================
// Time Summary
// =============================================================================

/// Timing series extracted from the time-summary blocks of a listing file
///
/// Three parallel sequences with the same length and order as the time-block
/// index: timestep length, stress-period time, and total elapsed time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSummary {
    pub step_length: Vec<f64>,
    pub period_time: Vec<f64>,
    pub elapsed_time: Vec<f64>,
}

impl TimeSummary {
    /// Pre-allocate all sequences for `n` timesteps
    pub fn with_capacity(n: usize) -> Self {
        Self {
            step_length: Vec::with_capacity(n),
            period_time: Vec::with_capacity(n),
            elapsed_time: Vec::with_capacity(n),
        }
    }

    /// Push one timestep's values
    pub fn push(&mut self, step_length: f64, period_time: f64, elapsed_time: f64) {
        self.step_length.push(step_length);
        self.period_time.push(period_time);
        self.elapsed_time.push(elapsed_time);
    }

    /// Number of timesteps
    pub fn len(&self) -> usize {
        self.elapsed_time.len()
    }

    /// Returns `true` if there are no timesteps
    pub fn is_empty(&self) -> bool {
        self.elapsed_time.is_empty()
    }
}

// =============================================================================
// Loaded Listing
// =============================================================================

/// The full result of loading one listing file
///
/// Owns the incremental and cumulative budget tables, the timing series, and
/// the block index they were assembled from. Row `i` of every member refers
/// to the same report block.
#[derive(Debug, Clone)]
pub struct LoadedListing {
    pub incremental: BudgetTable,
    pub cumulative: BudgetTable,
    pub time_summary: TimeSummary,
    pub index: Vec<BlockLocation>,
}

impl LoadedListing {
    /// Budget entry keys in schema order
    pub fn entries(&self) -> &[String] {
        &self.incremental.entries
    }

    /// Number of report blocks loaded
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no blocks were loaded
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Elapsed simulation times, one per block
    pub fn times(&self) -> &[f64] {
        &self.incremental.totim
    }

    /// (timestep, stress period) pairs in file order
    pub fn kstpkper(&self) -> Vec<(u32, u32)> {
        self.index
            .iter()
            .map(|loc| (loc.time_step, loc.stress_period))
            .collect()
    }

    /// Largest absolute percent-discrepancy value across all rows, if the
    /// entry is present in the schema
    pub fn worst_discrepancy(&self) -> Option<f64> {
        let key = BUDGET_SENTINEL_LABEL.replace(' ', "_");
        let column = self.incremental.column(&key)?;
        column
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .map(f64::abs)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }
}
