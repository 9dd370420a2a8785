//! Report-format layouts for the listing-file variants
//!
//! Every supported simulator variant reports the same budget and time-summary
//! blocks, differing only in the key phrase marking a block and the fixed
//! character columns its numeric fields are printed at. Each variant is a
//! configuration value here, so adding a report format is a data change.

use crate::constants::{
    MODFLOW_BUDGET_KEY, SEAWAT_BUDGET_KEY, SURFACE_WATER_BUDGET_KEY, TIME_DAYS_TOKEN,
    TIME_SUMMARY_KEY,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Half-open character range `[start, end)` within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWindow {
    pub start: usize,
    pub end: usize,
}

impl ColumnWindow {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slice the window out of a line, clamped to the line length
    ///
    /// Returns an empty string when the line ends before the window starts,
    /// which downstream parsing reports as a malformed (not missing) field.
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        let end = self.end.min(line.len());
        if self.start >= end {
            return "";
        }
        // Listing files are ASCII; a window landing inside a multi-byte
        // replacement character from lenient decoding yields an empty field.
        line.get(self.start..end).unwrap_or("")
    }
}

/// Fixed-column layout of one budget-block variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLayout {
    /// Literal substring marking the start of a budget block
    pub key_phrase: String,

    /// Lines to skip after the key line before classifying timestep/period
    /// (0 = the pair is printed on the key line itself)
    pub header_lines: usize,

    /// Window of the timestep index
    pub time_step: ColumnWindow,

    /// Window of the stress-period index
    pub stress_period: ColumnWindow,

    /// Window of the cumulative-volume value on budget data lines
    pub cumulative: ColumnWindow,

    /// Window of the flux (rate) value on budget data lines
    pub flux: ColumnWindow,
}

/// Fixed-column layout of the time-summary block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLayout {
    /// Literal substring marking the start of a time-summary block
    pub key_phrase: String,

    /// Window of the timestep index on the key line
    pub time_step: ColumnWindow,

    /// Window of the stress-period index on the key line
    pub stress_period: ColumnWindow,

    /// Start column of the value region on each of the three data lines
    pub value_start: usize,

    /// Whitespace-token index selected from the value region (DAYS column)
    pub value_token: usize,

    /// Fallback start column used when the units qualifier column is absent
    pub fallback_start: usize,
}

impl TimeLayout {
    /// Layout of the flow-model time table
    pub fn flow() -> Self {
        Self {
            key_phrase: TIME_SUMMARY_KEY.to_string(),
            time_step: ColumnWindow::new(42, 47),
            stress_period: ColumnWindow::new(63, 69),
            value_start: 20,
            value_token: TIME_DAYS_TOKEN,
            fallback_start: 45,
        }
    }

    /// Layout of the transport-model time table
    pub fn transport() -> Self {
        Self {
            time_step: ColumnWindow::new(65, 71),
            stress_period: ColumnWindow::new(87, 92),
            ..Self::flow()
        }
    }
}

/// Supported listing-file variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ListingVariant {
    /// MODFLOW volumetric budget listing
    Modflow,
    /// SEAWAT mass budget listing
    Seawat,
    /// MODFLOW with the SWR surface-water process
    SurfaceWater,
}

impl ListingVariant {
    /// Budget-block layout for this variant
    pub fn budget_layout(&self) -> BudgetLayout {
        match self {
            Self::Modflow => BudgetLayout {
                key_phrase: MODFLOW_BUDGET_KEY.to_string(),
                header_lines: 0,
                time_step: ColumnWindow::new(56, 61),
                stress_period: ColumnWindow::new(76, 80),
                cumulative: ColumnWindow::new(22, 40),
                flux: ColumnWindow::new(63, 80),
            },
            Self::Seawat => BudgetLayout {
                key_phrase: SEAWAT_BUDGET_KEY.to_string(),
                header_lines: 0,
                time_step: ColumnWindow::new(50, 54),
                stress_period: ColumnWindow::new(70, 75),
                cumulative: ColumnWindow::new(22, 40),
                flux: ColumnWindow::new(63, 80),
            },
            Self::SurfaceWater => BudgetLayout {
                key_phrase: SURFACE_WATER_BUDGET_KEY.to_string(),
                // SWR budget blocks carry one extra header line between the
                // key line and the timestep/period line.
                header_lines: 1,
                time_step: ColumnWindow::new(39, 46),
                stress_period: ColumnWindow::new(62, 68),
                cumulative: ColumnWindow::new(25, 43),
                flux: ColumnWindow::new(66, 84),
            },
        }
    }

    /// Time-summary layout for this variant
    pub fn time_layout(&self) -> TimeLayout {
        TimeLayout::flow()
    }

    /// Detect the variant of a listing file by scanning its head for the
    /// first recognizable budget key phrase
    ///
    /// The surface-water phrase is tested first on each line: an SWR listing
    /// also contains plain volumetric budget blocks, and the caller asking
    /// for detection wants the most specific format present early in the
    /// file. Scanning stops after `max_lines` lines.
    pub fn detect(path: &Path, max_lines: usize) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
            _ => Error::io(format!("Failed to open {}", path.display()), e),
        })?;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();

        for _ in 0..max_lines {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
            if read == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if line.contains(SURFACE_WATER_BUDGET_KEY) {
                return Ok(Self::SurfaceWater);
            }
            if line.contains(SEAWAT_BUDGET_KEY) {
                return Ok(Self::Seawat);
            }
            if line.contains(MODFLOW_BUDGET_KEY) {
                return Ok(Self::Modflow);
            }
        }

        Err(Error::listing_format(
            path.display().to_string(),
            "no recognizable budget key phrase in file head",
        ))
    }
}

impl fmt::Display for ListingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Modflow => "modflow",
            Self::Seawat => "seawat",
            Self::SurfaceWater => "surface-water",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_slice_clamps_to_line_length() {
        let w = ColumnWindow::new(4, 10);
        assert_eq!(w.slice("0123456789abc"), "456789");
        assert_eq!(w.slice("0123456"), "456");
        assert_eq!(w.slice("0123"), "");
        assert_eq!(w.slice(""), "");
    }

    #[test]
    fn test_variant_layouts_differ_only_in_expected_fields() {
        let mf = ListingVariant::Modflow.budget_layout();
        let swt = ListingVariant::Seawat.budget_layout();
        assert_eq!(mf.cumulative, swt.cumulative);
        assert_eq!(mf.flux, swt.flux);
        assert_ne!(mf.time_step, swt.time_step);
        assert_eq!(mf.header_lines, 0);
        assert_eq!(
            ListingVariant::SurfaceWater.budget_layout().header_lines,
            1
        );
    }

    #[test]
    fn test_transport_time_layout_shifts_index_windows() {
        let flow = TimeLayout::flow();
        let transport = TimeLayout::transport();
        assert_eq!(flow.value_start, transport.value_start);
        assert_ne!(flow.time_step, transport.time_step);
    }
}
