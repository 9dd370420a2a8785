//! DataFrame packaging for budget tables

use crate::app::models::BudgetTable;
use crate::constants::{DATE_COLUMN, STRESS_PERIOD_COLUMN, TIME_STEP_COLUMN, TOTIM_COLUMN};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use polars::prelude::*;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Package one budget table as a DataFrame
///
/// Column order is totim, time_step, stress_period, then the budget entries
/// in schema order. With a start date an additional leading `date` column is
/// synthesized from the elapsed time, interpreted in days.
pub fn budget_frame(table: &BudgetTable, start: Option<NaiveDateTime>) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.entries.len() + 4);

    if let Some(start) = start {
        columns.push(date_column(&table.totim, start)?);
    }

    columns.push(Column::new(TOTIM_COLUMN.into(), &table.totim));
    columns.push(Column::new(TIME_STEP_COLUMN.into(), &table.time_step));
    columns.push(Column::new(STRESS_PERIOD_COLUMN.into(), &table.stress_period));

    for entry in &table.entries {
        let values = table
            .values
            .get(entry)
            .ok_or_else(|| Error::configuration(format!("schema entry '{}' has no column", entry)))?;
        columns.push(Column::new(entry.as_str().into(), values));
    }

    DataFrame::new(columns)
        .map_err(|e| Error::table_export("failed to assemble budget DataFrame", e))
}

/// Synthesize the calendar-date column from elapsed days
///
/// Rows whose elapsed time is NaN get a null date.
fn date_column(totim: &[f64], start: NaiveDateTime) -> Result<Column> {
    let start_ms = start.and_utc().timestamp_millis();
    let millis: Vec<Option<i64>> = totim
        .iter()
        .map(|&days| {
            if days.is_nan() {
                None
            } else {
                Some(start_ms + (days * MILLIS_PER_DAY) as i64)
            }
        })
        .collect();

    Column::new(DATE_COLUMN.into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
        .map_err(|e| Error::table_export("failed to build date column", e))
}
