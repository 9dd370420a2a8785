//! Tests for DataFrame packaging

use super::super::frame::budget_frame;
use super::sample_listing;
use chrono::NaiveDate;
use polars::prelude::*;

#[test]
fn test_frame_columns_and_order() {
    let listing = sample_listing();
    let frame = budget_frame(&listing.incremental, None).unwrap();

    assert_eq!(frame.height(), 2);
    let names: Vec<&str> = frame.get_column_names_str();
    assert_eq!(
        names,
        vec![
            "totim",
            "time_step",
            "stress_period",
            "STORAGE_IN",
            "WELLS_OUT",
            "PERCENT_DISCREPANCY",
        ]
    );
}

#[test]
fn test_frame_values_follow_row_order() {
    let listing = sample_listing();
    let frame = budget_frame(&listing.incremental, None).unwrap();

    let storage = frame
        .column("STORAGE_IN")
        .unwrap()
        .f64()
        .unwrap()
        .into_no_null_iter()
        .collect::<Vec<_>>();
    assert_eq!(storage, vec![1.0, 2.0]);

    let steps = frame
        .column("time_step")
        .unwrap()
        .u32()
        .unwrap()
        .into_no_null_iter()
        .collect::<Vec<_>>();
    assert_eq!(steps, vec![1, 2]);
}

#[test]
fn test_start_date_adds_leading_date_column() {
    let listing = sample_listing();
    let start = NaiveDate::from_ymd_opt(2015, 10, 21)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let frame = budget_frame(&listing.incremental, Some(start)).unwrap();

    let names: Vec<&str> = frame.get_column_names_str();
    assert_eq!(names[0], "date");
    assert!(matches!(
        frame.column("date").unwrap().dtype(),
        DataType::Datetime(_, _)
    ));

    // Row 0 is one elapsed day after the start date.
    let ms = frame
        .column("date")
        .unwrap()
        .cast(&DataType::Int64)
        .unwrap()
        .i64()
        .unwrap()
        .get(0)
        .unwrap();
    let expected = start.and_utc().timestamp_millis() + 86_400_000;
    assert_eq!(ms, expected);
}

#[test]
fn test_nan_elapsed_time_yields_null_date() {
    let mut listing = sample_listing();
    listing.incremental.totim[1] = f64::NAN;
    let start = NaiveDate::from_ymd_opt(1970, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let frame = budget_frame(&listing.incremental, Some(start)).unwrap();

    let date = frame.column("date").unwrap();
    assert_eq!(date.null_count(), 1);
}
