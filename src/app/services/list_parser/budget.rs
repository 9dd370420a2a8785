//! Budget block extractor
//!
//! A budget block lists the model's water (or mass) budget for one timestep:
//! an inflow section, an outflow section flagged by an `OUT:` marker, and a
//! closing `PERCENT DISCREPANCY` entry. Every data line carries a label and
//! two numeric fields (cumulative volume and flux rate) and is recognizable
//! by containing exactly two '=' characters.
//!
//! Extraction is tolerant at block granularity: a malformed or truncated
//! block yields no values (the assembler writes a NaN row) and never aborts
//! processing of the surrounding file.

use super::fields::classify_value_or_nan;
use super::layout::BudgetLayout;
use super::reader::ListingReader;
use crate::Result;
use crate::app::models::BlockLocation;
use crate::constants::{BUDGET_LINE_EQUALS, BUDGET_SENTINEL_LABEL, OUT_SECTION_MARKER};
use std::fmt;
use tracing::warn;

/// Which side of the budget the current section belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowSide {
    In,
    Out,
}

impl fmt::Display for FlowSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "IN"),
            Self::Out => write!(f, "OUT"),
        }
    }
}

/// One parsed budget entry: key plus its flux and cumulative values
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetEntryValue {
    pub key: String,
    pub flux: f64,
    pub cumulative: f64,
}

/// Build the table key for a budget label on the given side
///
/// Hyphen-compound inflow labels lose their spaces and take no side suffix
/// (`STORAGE - UNSATURATED` becomes `STORAGE-UNSATURATED`); the percent
/// discrepancy entry is untagged, appearing once per block; every
/// other label is underscore-joined and suffixed with its side.
pub fn budget_key(label: &str, side: FlowSide) -> String {
    if side == FlowSide::In && label.contains(" - ") {
        label.replace(' ', "")
    } else if label
        .to_ascii_uppercase()
        .contains(BUDGET_SENTINEL_LABEL)
    {
        label.replace(' ', "_")
    } else {
        format!("{}_{}", label.replace(' ', "_"), side)
    }
}

fn is_budget_data_line(line: &str) -> bool {
    line.matches('=').count() == BUDGET_LINE_EQUALS
}

fn budget_label(line: &str) -> &str {
    line.trim().split('=').next().unwrap_or("").trim()
}

/// Extract one budget block starting at the indexed location
///
/// Seeks to the block offset, scans forward to the first budget data line,
/// then collects labeled value pairs until the percent-discrepancy sentinel.
/// Returns `None` (degrade to all-missing) when the stream ends before the
/// sentinel or a value field is malformed; entries are returned in the order
/// they appear in the block.
pub fn extract_budget(
    reader: &mut ListingReader,
    layout: &BudgetLayout,
    location: &BlockLocation,
) -> Result<Option<Vec<BudgetEntryValue>>> {
    reader.seek(location.offset)?;

    // Scan to the start of the in/out budget information.
    let mut line = loop {
        match reader.read_line()? {
            Some(line) if is_budget_data_line(&line) => break line,
            Some(_) => continue,
            None => {
                warn!(
                    "end of file while seeking budget information for ts,sp {},{}",
                    location.time_step, location.stress_period
                );
                return Ok(None);
            }
        }
    };

    let mut side = FlowSide::In;
    let mut entries = Vec::new();

    loop {
        if is_budget_data_line(&line) {
            let label = budget_label(&line).to_string();

            let cumulative = match classify_value_or_nan(&line, layout.cumulative) {
                Ok(value) => value,
                Err(err) => {
                    warn!(
                        "error casting cumulative value for {} in ts,sp {},{}: {}",
                        label, location.time_step, location.stress_period, err
                    );
                    return Ok(None);
                }
            };
            let flux = match classify_value_or_nan(&line, layout.flux) {
                Ok(value) => value,
                Err(err) => {
                    warn!(
                        "error casting flux value for {} in ts,sp {},{}: {}",
                        label, location.time_step, location.stress_period, err
                    );
                    return Ok(None);
                }
            };

            entries.push(BudgetEntryValue {
                key: budget_key(&label, side),
                flux,
                cumulative,
            });

            // The percent discrepancy entry closes every block.
            if label.eq_ignore_ascii_case(BUDGET_SENTINEL_LABEL) {
                break;
            }
        } else if line.to_ascii_uppercase().contains(OUT_SECTION_MARKER) {
            side = FlowSide::Out;
        }

        line = match reader.read_line()? {
            Some(next) => next,
            None => {
                warn!(
                    "end of file while reading budget information for ts,sp {},{}",
                    location.time_step, location.stress_period
                );
                return Ok(None);
            }
        };
    }

    Ok(Some(entries))
}
