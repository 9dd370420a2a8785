//! Test suite for the listing-file parser
//!
//! Fixtures here build synthetic listing files whose numeric fields are
//! placed at the exact column windows of the variant layouts, so every test
//! exercises the same fixed-offset conventions as real simulator output.

pub mod index_tests;

use super::layout::{BudgetLayout, ColumnWindow, TimeLayout};
use std::io::Write;
use tempfile::NamedTempFile;

/// Overwrite a window of the line with right-aligned text, padding the line
/// with spaces as needed
pub fn place(line: &mut String, window: ColumnWindow, text: &str) {
    assert!(
        text.len() <= window.end - window.start,
        "fixture text '{}' does not fit window {}..{}",
        text,
        window.start,
        window.end
    );
    if line.len() < window.end {
        line.push_str(&" ".repeat(window.end - line.len()));
    }
    let padded = format!("{:>width$}", text, width = window.end - window.start);
    line.replace_range(window.start..window.end, &padded);
}

/// A block key line: the key phrase followed by the (timestep, period) pair
/// at the layout's index windows
pub fn key_line(
    key_phrase: &str,
    time_step: ColumnWindow,
    stress_period: ColumnWindow,
    ts: u32,
    sp: u32,
) -> String {
    let mut line = format!("  {}", key_phrase);
    place(&mut line, time_step, &ts.to_string());
    place(&mut line, stress_period, &sp.to_string());
    line
}

/// A budget data line: label, then cumulative and flux fields at the layout
/// windows, each preceded by its '=' separator
pub fn budget_data_line(
    layout: &BudgetLayout,
    label: &str,
    cumulative: &str,
    flux: &str,
) -> String {
    let mut line = String::new();
    let eq1 = layout.cumulative.start - 2;
    let eq2 = layout.flux.start - 2;
    place(&mut line, ColumnWindow::new(0, eq1 - 1), label);
    place(&mut line, ColumnWindow::new(eq1, eq1 + 1), "=");
    place(&mut line, layout.cumulative, cumulative);
    place(&mut line, ColumnWindow::new(eq2, eq2 + 1), "=");
    place(&mut line, layout.flux, flux);
    line
}

/// One entry of a synthetic budget block
pub struct EntrySpec<'a> {
    pub label: &'a str,
    pub out_side: bool,
    pub flux: &'a str,
    pub cumulative: &'a str,
}

/// A full budget block in realistic shape: key line, section headers, the
/// in-side entries, the OUT: marker, the out-side entries, and the closing
/// percent-discrepancy line
pub fn budget_block(layout: &BudgetLayout, ts: u32, sp: u32, entries: &[EntrySpec]) -> String {
    // With extra header lines the (ts, sp) pair sits on the last skipped
    // line instead of the key line itself.
    let mut lines = Vec::new();
    if layout.header_lines == 0 {
        lines.push(key_line(
            &layout.key_phrase,
            layout.time_step,
            layout.stress_period,
            ts,
            sp,
        ));
    } else {
        lines.push(format!("  {}", layout.key_phrase));
        for _ in 1..layout.header_lines {
            lines.push(String::new());
        }
        let mut header = String::new();
        place(&mut header, layout.time_step, &ts.to_string());
        place(&mut header, layout.stress_period, &sp.to_string());
        lines.push(header);
    }
    lines.push(String::new());
    lines.push("     CUMULATIVE VOLUMES      L**3       RATES FOR THIS TIME STEP      L**3/T".to_string());
    lines.push("     ------------------                 -------------------------".to_string());
    lines.push(String::new());
    lines.push("           IN:                                      IN:".to_string());
    lines.push("           ---                                      ---".to_string());

    let mut reached_out = false;
    for entry in entries {
        if entry.out_side && !reached_out {
            lines.push(String::new());
            lines.push("          OUT:                                     OUT:".to_string());
            lines.push("          ----                                     ----".to_string());
            reached_out = true;
        }
        lines.push(budget_data_line(
            layout,
            entry.label,
            entry.cumulative,
            entry.flux,
        ));
    }

    lines.push(String::new());
    lines.push(budget_data_line(layout, "IN - OUT", "0.0000", "0.0000"));
    lines.push(String::new());
    lines.push(budget_data_line(
        layout,
        "PERCENT DISCREPANCY",
        "0.00",
        "0.00",
    ));
    lines.push(String::new());
    lines.join("\n") + "\n"
}

/// A full time-summary block with the five-unit header and separator
pub fn time_block(
    layout: &TimeLayout,
    ts: u32,
    sp: u32,
    step_length_days: &str,
    period_time_days: &str,
    elapsed_days: &str,
) -> String {
    let mut lines = vec![key_line(
        &layout.key_phrase,
        layout.time_step,
        layout.stress_period,
        ts,
        sp,
    )];
    lines.push(format!(
        "{:<20}{}",
        "",
        crate::constants::TIME_UNITS_HEADER
    ));
    lines.push(format!("{:<20}{}", "", "-".repeat(59)));
    lines.push(time_data_line("TIME STEP LENGTH", step_length_days));
    lines.push(time_data_line("STRESS PERIOD TIME", period_time_days));
    lines.push(time_data_line("TOTAL TIME", elapsed_days));
    lines.push(String::new());
    lines.join("\n") + "\n"
}

/// One time-table data line: label, then the five unit columns starting at
/// the value region, with the given value in the DAYS column
pub fn time_data_line(label: &str, days: &str) -> String {
    format!(
        "{:>19} {:>11} {:>11} {:>11} {:>11} {:>15}",
        label, "8.6400E+04", "1440.0", "24.000", days, "2.7378E-03"
    )
}

/// Interleave one budget block and one time block per (ts, sp) pair, the way
/// a simulator writes them
pub fn standard_listing(layout: &BudgetLayout, time_layout: &TimeLayout, blocks: u32) -> String {
    let mut content = String::from("                          MODFLOW-2005\n\n");
    for ts in 1..=blocks {
        content.push_str(&budget_block(
            layout,
            ts,
            1,
            &[
                EntrySpec {
                    label: "STORAGE",
                    out_side: false,
                    flux: &format!("{:.4}", ts as f64),
                    cumulative: &format!("{:.4}", 10.0 * ts as f64),
                },
                EntrySpec {
                    label: "WELLS",
                    out_side: true,
                    flux: &format!("{:.4}", 2.0 * ts as f64),
                    cumulative: &format!("{:.4}", 20.0 * ts as f64),
                },
            ],
        ));
        content.push_str(&time_block(
            time_layout,
            ts,
            1,
            "1.0000",
            &format!("{:.4}", ts as f64),
            &format!("{:.4}", ts as f64),
        ));
    }
    content
}

/// Write content to a tempfile-backed listing
pub fn write_listing(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
