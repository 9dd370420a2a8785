//! Time block extractor
//!
//! A time-summary block reports three durations for one timestep: the
//! timestep length, the elapsed time in the current stress period, and the
//! total elapsed simulation time. When time units are configured the table
//! carries a five-unit header and a dashed separator above the data lines;
//! when they are not, the data lines follow the key line directly and the
//! value columns shift, which the parser handles with a fallback re-split.

use super::layout::TimeLayout;
use super::reader::ListingReader;
use crate::Result;
use crate::app::models::BlockLocation;
use crate::constants::{TIME_SEPARATOR_MIN_RUN, TIME_UNITS_HEADER};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("-{{{},}}", TIME_SEPARATOR_MIN_RUN)).expect("separator pattern")
});

/// The three durations of one time-summary block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBlockValues {
    pub step_length: f64,
    pub period_time: f64,
    pub elapsed_time: f64,
}

impl TimeBlockValues {
    /// All-missing sentinel for a block that could not be read
    pub fn all_missing() -> Self {
        Self {
            step_length: f64::NAN,
            period_time: f64::NAN,
            elapsed_time: f64::NAN,
        }
    }
}

/// Parse one fixed-format time line
///
/// Takes the substring from the configured start column to line end, splits
/// on whitespace, and selects the configured token. When the first token is
/// not numeric the optional units qualifier column is absent, so the line is
/// re-split from the fallback column and the first token is used instead.
fn parse_time_line(line: &str, layout: &TimeLayout) -> Option<f64> {
    let region = line.get(layout.value_start.min(line.len())..)?;
    let tokens: Vec<&str> = region.split_whitespace().collect();
    let first: Option<f64> = tokens.first().and_then(|t| t.parse().ok());

    let (tokens, token_index) = if first.is_some() {
        (tokens, layout.value_token)
    } else {
        let region = line.get(layout.fallback_start.min(line.len())..)?;
        (region.split_whitespace().collect(), 0)
    };

    tokens.get(token_index).and_then(|t| t.parse().ok())
}

/// Extract one time-summary block starting at the indexed location
///
/// Seeks to the block offset, skips the optional units header and dashed
/// separator, then reads the three consecutive data lines. Any read or parse
/// failure degrades the whole block to the 3xNaN sentinel with a diagnostic.
pub fn extract_time(
    reader: &mut ListingReader,
    layout: &TimeLayout,
    location: &BlockLocation,
) -> Result<TimeBlockValues> {
    reader.seek(location.offset)?;

    // Skip header lines to land on the first data line.
    let mut head_count = 0usize;
    let mut line = loop {
        let Some(line) = reader.read_line()? else {
            warn!(
                "end of file while seeking time information for ts,sp {},{}",
                location.time_step, location.stress_period
            );
            return Ok(TimeBlockValues::all_missing());
        };
        head_count += 1;

        if head_count >= 2 && !line.contains(TIME_UNITS_HEADER) && !SEPARATOR_RUN.is_match(&line) {
            break line;
        }
        if SEPARATOR_RUN.is_match(&line) {
            match reader.read_line()? {
                Some(next) => break next,
                None => {
                    warn!(
                        "end of file after time-summary separator for ts,sp {},{}",
                        location.time_step, location.stress_period
                    );
                    return Ok(TimeBlockValues::all_missing());
                }
            }
        }
    };

    let mut values = [f64::NAN; 3];
    for (slot, name) in values
        .iter_mut()
        .zip(["step length", "period time", "total time"])
    {
        match parse_time_line(&line, layout) {
            Some(value) => *slot = value,
            None => {
                warn!(
                    "error parsing {} for ts,sp {},{}",
                    name, location.time_step, location.stress_period
                );
                return Ok(TimeBlockValues::all_missing());
            }
        }
        if name != "total time" {
            line = match reader.read_line()? {
                Some(next) => next,
                None => {
                    warn!(
                        "end of file while parsing time information for ts,sp {},{}",
                        location.time_step, location.stress_period
                    );
                    return Ok(TimeBlockValues::all_missing());
                }
            };
        }
    }

    Ok(TimeBlockValues {
        step_length: values[0],
        period_time: values[1],
        elapsed_time: values[2],
    })
}
