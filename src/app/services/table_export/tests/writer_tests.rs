//! Tests for the CSV and Parquet table writers

use super::super::writer::{TableFormat, TableWriter};
use super::sample_listing;
use crate::Error;
use polars::prelude::*;
use tempfile::TempDir;

#[test]
fn test_write_csv_pair_and_read_back() {
    let temp_dir = TempDir::new().unwrap();
    let writer = TableWriter::new(temp_dir.path(), false);
    let listing = sample_listing();

    let written = writer
        .write_tables("freyberg", &listing, TableFormat::Csv, None)
        .unwrap();

    assert_eq!(written.len(), 2);
    assert!(written[0].0.ends_with("freyberg.incremental.csv"));
    assert!(written[1].0.ends_with("freyberg.cumulative.csv"));
    assert!(written.iter().all(|(_, size)| *size > 0));

    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(written[0].0.clone()))
        .unwrap()
        .finish()
        .unwrap();
    assert_eq!(frame.height(), 2);
    assert!(frame.column("STORAGE_IN").is_ok());
    assert!(frame.column("time_step").is_ok());
}

#[test]
fn test_write_parquet_pair() {
    let temp_dir = TempDir::new().unwrap();
    let writer = TableWriter::new(temp_dir.path(), false);
    let listing = sample_listing();

    let written = writer
        .write_tables("freyberg", &listing, TableFormat::Parquet, None)
        .unwrap();

    assert_eq!(written.len(), 2);
    let frame = ParquetReader::new(std::fs::File::open(&written[0].0).unwrap())
        .finish()
        .unwrap();
    assert_eq!(frame.height(), 2);
    assert_eq!(frame.width(), 6);
}

#[test]
fn test_existing_output_is_not_overwritten_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let writer = TableWriter::new(temp_dir.path(), false);
    let listing = sample_listing();

    writer
        .write_tables("freyberg", &listing, TableFormat::Csv, None)
        .unwrap();
    let second = writer.write_tables("freyberg", &listing, TableFormat::Csv, None);
    assert!(matches!(second, Err(Error::OutputExists { .. })));
}

#[test]
fn test_force_overwrite_rewrites_output() {
    let temp_dir = TempDir::new().unwrap();
    let listing = sample_listing();

    TableWriter::new(temp_dir.path(), false)
        .write_tables("freyberg", &listing, TableFormat::Csv, None)
        .unwrap();
    let written = TableWriter::new(temp_dir.path(), true)
        .write_tables("freyberg", &listing, TableFormat::Csv, None)
        .unwrap();
    assert_eq!(written.len(), 2);
}
