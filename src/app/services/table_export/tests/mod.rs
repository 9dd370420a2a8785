//! Test suite for the tabular exporter

pub mod frame_tests;
pub mod writer_tests;

use crate::app::models::{BlockLocation, BudgetTable, LoadedListing, TimeSummary};

/// A two-row loaded listing with a three-entry schema
pub fn sample_listing() -> LoadedListing {
    let entries = vec![
        "STORAGE_IN".to_string(),
        "WELLS_OUT".to_string(),
        "PERCENT_DISCREPANCY".to_string(),
    ];
    let mut incremental = BudgetTable::with_entries(entries.clone());
    let mut cumulative = BudgetTable::with_entries(entries);

    for (row, (flux, cumu)) in [(1.0f64, 10.0f64), (2.0, 20.0)].iter().enumerate() {
        let ts = (row + 1) as u32;
        for (table, value) in [(&mut incremental, *flux), (&mut cumulative, *cumu)] {
            table.values.get_mut("STORAGE_IN").unwrap().push(value);
            table.values.get_mut("WELLS_OUT").unwrap().push(value / 2.0);
            table.values.get_mut("PERCENT_DISCREPANCY").unwrap().push(0.0);
            table.totim.push(ts as f64);
            table.time_step.push(ts);
            table.stress_period.push(1);
        }
    }

    let mut time_summary = TimeSummary::with_capacity(2);
    time_summary.push(1.0, 1.0, 1.0);
    time_summary.push(1.0, 2.0, 2.0);

    LoadedListing {
        incremental,
        cumulative,
        time_summary,
        index: vec![
            BlockLocation {
                time_step: 1,
                stress_period: 1,
                offset: 0,
            },
            BlockLocation {
                time_step: 2,
                stress_period: 1,
                offset: 500,
            },
        ],
    }
}
