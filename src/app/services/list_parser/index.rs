//! Block locator: the forward indexing pass
//!
//! One pass over the file records where every report block of interest
//! begins. The resulting index is the file's table of contents; extractors
//! seek to the recorded offsets afterwards.

use super::fields::classify_step_period;
use super::layout::ColumnWindow;
use super::reader::ListingReader;
use crate::Result;
use crate::app::models::BlockLocation;
use tracing::{debug, warn};

/// What the locator scans for: a key phrase plus the header-line layout
/// needed to classify each found block's (timestep, stress period) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub key_phrase: String,
    pub header_lines: usize,
    pub time_step: ColumnWindow,
    pub stress_period: ColumnWindow,
}

/// Build the block index with a single forward pass
///
/// The reader is assumed positioned at the start of the region to scan
/// (normally offset 0). For every line containing the key phrase, the offset
/// of the start of that line is recorded, `header_lines` further lines are
/// skipped, and the (timestep, stress period) pair is classified from the
/// last line read — the key line itself when `header_lines` is 0.
///
/// A pair that fails classification ends the scan: everything indexed so far
/// is returned and the failure is reported as a diagnostic, not an error.
/// Duplicate pairs are preserved in file order.
pub fn build_index(
    reader: &mut ListingReader,
    spec: &IndexSpec,
    max_entries: Option<usize>,
) -> Result<Vec<BlockLocation>> {
    let mut index = Vec::new();
    let mut line_count = 0usize;

    loop {
        let offset = reader.position();
        let Some(mut line) = reader.read_line()? else {
            break;
        };
        line_count += 1;

        if !line.contains(&spec.key_phrase) {
            continue;
        }

        for _ in 0..spec.header_lines {
            match reader.read_line()? {
                Some(next) => {
                    line_count += 1;
                    line = next;
                }
                None => {
                    warn!(
                        "end of file inside block header after line {}",
                        line_count
                    );
                    return Ok(index);
                }
            }
        }

        match classify_step_period(&line, spec.time_step, spec.stress_period) {
            Ok((time_step, stress_period)) => {
                index.push(BlockLocation {
                    time_step,
                    stress_period,
                    offset,
                });
            }
            Err(err) => {
                // Treated as "no more usable data": keep the prefix.
                warn!(
                    "unable to classify timestep/period on line {} ({}): {:?}",
                    line_count, err, line
                );
                break;
            }
        }

        if let Some(max) = max_entries {
            if index.len() >= max {
                break;
            }
        }
    }

    debug!(
        "indexed {} '{}' blocks in {}",
        index.len(),
        spec.key_phrase,
        reader.path().display()
    );
    Ok(index)
}
