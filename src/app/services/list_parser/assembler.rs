//! Series assembler
//!
//! Drives the block locator and extractors into the ordered incremental and
//! cumulative tables. The budget-entry schema is established exactly once,
//! from the first successfully parsed block; later blocks are written into
//! the established slots, with absent keys left as NaN and unknown keys
//! dropped. Timing data comes from a second, independent index pass keyed on
//! the time-summary phrase and is merged by row position.

use super::budget::{BudgetEntryValue, extract_budget};
use super::index::{IndexSpec, build_index};
use super::layout::{BudgetLayout, ListingVariant, TimeLayout};
use super::reader::ListingReader;
use super::time::{TimeBlockValues, extract_time};
use crate::app::models::{BlockLocation, BudgetTable, LoadedListing, TimeSummary};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A listing file bound to one variant layout, ready to load
///
/// Construction fails fast when the file does not exist. Loading consumes
/// nothing: the same value can be loaded again and yields identical tables.
#[derive(Debug, Clone)]
pub struct ListingFile {
    path: PathBuf,
    variant: ListingVariant,
}

impl ListingFile {
    /// Bind a listing file path to a variant layout
    pub fn new(path: impl Into<PathBuf>, variant: ListingVariant) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }
        Ok(Self { path, variant })
    }

    /// Path of the listing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Variant layout the file is bound to
    pub fn variant(&self) -> ListingVariant {
        self.variant
    }

    /// Load the budget and timing tables
    ///
    /// `max_entries` caps the number of report blocks indexed, for previewing
    /// very large files.
    pub fn load(&self, max_entries: Option<usize>) -> Result<LoadedListing> {
        let mut assembler = SeriesAssembler::new(
            &self.path,
            self.variant.budget_layout(),
            self.variant.time_layout(),
        );
        assembler.load(max_entries)
    }
}

/// The stateful assembly of one load pass
///
/// Kept separate from [`ListingFile`] so the set-once schema contract is a
/// field of the pass, not of the file binding.
pub struct SeriesAssembler {
    path: PathBuf,
    budget_layout: BudgetLayout,
    time_layout: TimeLayout,
    entries: Option<Vec<String>>,
}

impl SeriesAssembler {
    pub fn new(path: &Path, budget_layout: BudgetLayout, time_layout: TimeLayout) -> Self {
        Self {
            path: path.to_path_buf(),
            budget_layout,
            time_layout,
            entries: None,
        }
    }

    /// Establish the budget-entry schema from the first parsed block
    ///
    /// Signals a usage-contract violation when the schema was already set.
    pub fn establish_schema(&mut self, first_block: &[BudgetEntryValue]) -> Result<()> {
        if let Some(entries) = &self.entries {
            return Err(Error::entries_already_set(entries.clone()));
        }
        self.entries = Some(first_block.iter().map(|e| e.key.clone()).collect());
        Ok(())
    }

    /// Budget-entry schema, once established
    pub fn entries(&self) -> Option<&[String]> {
        self.entries.as_deref()
    }

    /// Run the full load: budget index pass, per-block extraction, and the
    /// independent time pass, producing the assembled tables
    pub fn load(&mut self, max_entries: Option<usize>) -> Result<LoadedListing> {
        let index = self.build_budget_index(max_entries)?;
        if index.is_empty() {
            return Err(Error::no_budget_blocks(
                self.path.display().to_string(),
                self.budget_layout.key_phrase.clone(),
            ));
        }
        info!(
            "indexed {} budget blocks in {}",
            index.len(),
            self.path.display()
        );

        let mut reader = ListingReader::open(&self.path)?;

        // First block establishes the schema; an unreadable first block means
        // nothing downstream has a column layout to write into.
        let first_block = extract_budget(&mut reader, &self.budget_layout, &index[0])?
            .ok_or_else(|| Error::first_block_unreadable(self.path.display().to_string()))?;
        self.establish_schema(&first_block)?;
        let entries = self.entries.clone().expect("schema just established");

        let mut incremental = BudgetTable::with_entries(entries.clone());
        let mut cumulative = BudgetTable::with_entries(entries.clone());

        for location in &index {
            let block = extract_budget(&mut reader, &self.budget_layout, location)?;
            push_block_row(&mut incremental, &mut cumulative, &entries, block, location);
        }
        drop(reader);

        // Independent pass over the time-summary blocks, merged by position.
        let time_summary = self.load_time_summary(max_entries)?;
        merge_elapsed_time(&mut incremental, &mut cumulative, &time_summary);

        Ok(LoadedListing {
            incremental,
            cumulative,
            time_summary,
            index,
        })
    }

    fn build_budget_index(&self, max_entries: Option<usize>) -> Result<Vec<BlockLocation>> {
        let mut reader = ListingReader::open(&self.path)?;
        let spec = IndexSpec {
            key_phrase: self.budget_layout.key_phrase.clone(),
            header_lines: self.budget_layout.header_lines,
            time_step: self.budget_layout.time_step,
            stress_period: self.budget_layout.stress_period,
        };
        build_index(&mut reader, &spec, max_entries)
    }

    /// Index and extract the time-summary blocks with their own layout
    pub fn load_time_summary(&self, max_entries: Option<usize>) -> Result<TimeSummary> {
        let mut reader = ListingReader::open(&self.path)?;
        let spec = IndexSpec {
            key_phrase: self.time_layout.key_phrase.clone(),
            header_lines: 0,
            time_step: self.time_layout.time_step,
            stress_period: self.time_layout.stress_period,
        };
        let time_index = build_index(&mut reader, &spec, max_entries)?;

        let mut summary = TimeSummary::with_capacity(time_index.len());
        for location in &time_index {
            let TimeBlockValues {
                step_length,
                period_time,
                elapsed_time,
            } = extract_time(&mut reader, &self.time_layout, location)?;
            summary.push(step_length, period_time, elapsed_time);
        }
        Ok(summary)
    }
}

/// Append one block's values as a row of both tables
///
/// A degraded block (`None`) writes NaN into every schema slot. Keys absent
/// from a later block stay NaN for that row; keys outside the established
/// schema are dropped.
fn push_block_row(
    incremental: &mut BudgetTable,
    cumulative: &mut BudgetTable,
    entries: &[String],
    block: Option<Vec<BudgetEntryValue>>,
    location: &BlockLocation,
) {
    let row = incremental.len();

    for key in entries {
        incremental.values.get_mut(key).expect("schema key").push(f64::NAN);
        cumulative.values.get_mut(key).expect("schema key").push(f64::NAN);
    }
    incremental.totim.push(f64::NAN);
    cumulative.totim.push(f64::NAN);
    incremental.time_step.push(location.time_step);
    cumulative.time_step.push(location.time_step);
    incremental.stress_period.push(location.stress_period);
    cumulative.stress_period.push(location.stress_period);

    let Some(block) = block else {
        return;
    };

    for entry in block {
        match incremental.values.get_mut(&entry.key) {
            Some(column) => {
                column[row] = entry.flux;
                cumulative.values.get_mut(&entry.key).expect("parallel schema")[row] =
                    entry.cumulative;
            }
            None => {
                debug!(
                    "dropping entry '{}' outside established schema at ts,sp {},{}",
                    entry.key, location.time_step, location.stress_period
                );
            }
        }
    }
}

/// Merge the time pass into the budget tables by row position
///
/// Budget and time blocks occur once per timestep in matching file order by
/// construction; that alignment is not verified against the (timestep,
/// period) pairs, so a count mismatch is flagged and padded, never realigned.
fn merge_elapsed_time(
    incremental: &mut BudgetTable,
    cumulative: &mut BudgetTable,
    time_summary: &TimeSummary,
) {
    let rows = incremental.len();
    if time_summary.len() != rows {
        warn!(
            "time-summary blocks ({}) do not match budget blocks ({}); merging by position",
            time_summary.len(),
            rows
        );
    }
    for row in 0..rows {
        let totim = time_summary
            .elapsed_time
            .get(row)
            .copied()
            .unwrap_or(f64::NAN);
        incremental.totim[row] = totim;
        cumulative.totim[row] = totim;
    }
}
