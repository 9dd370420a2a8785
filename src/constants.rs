//! Application constants for the listing processor
//!
//! This module contains the report-format constants, default values, and
//! filename helpers used throughout the listing processor application.

// =============================================================================
// Report Block Key Phrases
// =============================================================================

/// Key phrase marking a MODFLOW volumetric budget block
pub const MODFLOW_BUDGET_KEY: &str = "VOLUMETRIC BUDGET FOR ENTIRE MODEL";

/// Key phrase marking a SEAWAT mass budget block
pub const SEAWAT_BUDGET_KEY: &str = "MASS BUDGET FOR ENTIRE MODEL";

/// Key phrase marking a surface-water (SWR) volumetric budget block
pub const SURFACE_WATER_BUDGET_KEY: &str = "VOLUMETRIC SURFACE WATER BUDGET FOR ENTIRE MODEL";

/// Key phrase marking a time-summary block
pub const TIME_SUMMARY_KEY: &str = "TIME SUMMARY AT END";

// =============================================================================
// Budget Section Markers
// =============================================================================

/// Number of '=' characters identifying a budget data line
pub const BUDGET_LINE_EQUALS: usize = 2;

/// Marker flipping the budget side tag from inflow to outflow
pub const OUT_SECTION_MARKER: &str = "OUT:";

/// Label of the final entry in every budget block (case-insensitive)
pub const BUDGET_SENTINEL_LABEL: &str = "PERCENT DISCREPANCY";

/// Non-numeric placeholder recognized inside value fields (case-insensitive)
pub const MISSING_VALUE_TOKEN: &str = "NAN";

// =============================================================================
// Time Summary Markers
// =============================================================================

/// Units header printed above the time-summary table when time units are set
pub const TIME_UNITS_HEADER: &str = "SECONDS     MINUTES      HOURS       DAYS        YEARS";

/// Minimum run of '-' characters recognized as the time-summary separator line
pub const TIME_SEPARATOR_MIN_RUN: usize = 30;

/// Token index of the DAYS column in the five-unit time table
pub const TIME_DAYS_TOKEN: usize = 3;

// =============================================================================
// File and Directory Constants
// =============================================================================

/// File extensions recognized as listing files during directory scans
pub const LISTING_EXTENSIONS: &[&str] = &["lst", "list"];

/// Synthesized column name for elapsed simulation time
pub const TOTIM_COLUMN: &str = "totim";

/// Synthesized column name for the timestep index
pub const TIME_STEP_COLUMN: &str = "time_step";

/// Synthesized column name for the stress-period index
pub const STRESS_PERIOD_COLUMN: &str = "stress_period";

/// Synthesized column name for the start-date anchored calendar date
pub const DATE_COLUMN: &str = "date";

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the output filename for one table of a listing file
///
/// `kind` is "incremental" or "cumulative"; `ext` is "csv" or "parquet".
pub fn get_output_filename(stem: &str, kind: &str, ext: &str) -> String {
    format!("{}.{}.{}", stem, kind, ext)
}

/// Check if a path extension marks a listing file
pub fn is_listing_extension(ext: &str) -> bool {
    LISTING_EXTENSIONS
        .iter()
        .any(|e| ext.eq_ignore_ascii_case(e))
}
