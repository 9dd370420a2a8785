//! Tests for the block locator

use super::super::index::{IndexSpec, build_index};
use super::super::layout::ListingVariant;
use super::super::reader::ListingReader;
use super::{EntrySpec, budget_block, key_line, write_listing};

fn budget_spec(variant: ListingVariant) -> IndexSpec {
    let layout = variant.budget_layout();
    IndexSpec {
        key_phrase: layout.key_phrase,
        header_lines: layout.header_lines,
        time_step: layout.time_step,
        stress_period: layout.stress_period,
    }
}

fn storage_entry() -> Vec<EntrySpec<'static>> {
    vec![EntrySpec {
        label: "STORAGE",
        out_side: false,
        flux: "1.0000",
        cumulative: "10.0000",
    }]
}

#[test]
fn test_empty_stream_yields_empty_index() {
    let file = write_listing("");
    let mut reader = ListingReader::open(file.path()).unwrap();
    let index = build_index(&mut reader, &budget_spec(ListingVariant::Modflow), None).unwrap();
    assert!(index.is_empty());
}

#[test]
fn test_index_records_offsets_in_file_order() {
    let layout = ListingVariant::Modflow.budget_layout();
    let mut content = String::from("header line\n");
    let entries = storage_entry();
    content.push_str(&budget_block(&layout, 1, 1, &entries));
    content.push_str(&budget_block(&layout, 2, 1, &entries));
    content.push_str(&budget_block(&layout, 1, 2, &entries));
    let file = write_listing(&content);

    let mut reader = ListingReader::open(file.path()).unwrap();
    let index = build_index(&mut reader, &budget_spec(ListingVariant::Modflow), None).unwrap();

    assert_eq!(index.len(), 3);
    assert_eq!(
        index.iter().map(|e| (e.time_step, e.stress_period)).collect::<Vec<_>>(),
        vec![(1, 1), (2, 1), (1, 2)]
    );
    assert!(index.windows(2).all(|w| w[0].offset < w[1].offset));

    // The offset points at the start of the key-phrase line.
    reader.seek(index[1].offset).unwrap();
    let line = reader.read_line().unwrap().unwrap();
    assert!(line.contains("VOLUMETRIC BUDGET FOR ENTIRE MODEL"));
}

#[test]
fn test_duplicate_step_period_pairs_are_preserved() {
    let layout = ListingVariant::Modflow.budget_layout();
    let entries = storage_entry();
    let mut content = budget_block(&layout, 1, 1, &entries);
    content.push_str(&budget_block(&layout, 1, 1, &entries));
    let file = write_listing(&content);

    let mut reader = ListingReader::open(file.path()).unwrap();
    let index = build_index(&mut reader, &budget_spec(ListingVariant::Modflow), None).unwrap();
    assert_eq!(index.len(), 2);
}

#[test]
fn test_classification_failure_keeps_prefix() {
    let layout = ListingVariant::Modflow.budget_layout();
    let entries = storage_entry();
    let mut content = budget_block(&layout, 1, 1, &entries);
    // Second key line carries garbage where the timestep should be.
    content.push_str("  VOLUMETRIC BUDGET FOR ENTIRE MODEL AT END OF\n");
    content.push_str(&budget_block(&layout, 3, 1, &entries));
    let file = write_listing(&content);

    let mut reader = ListingReader::open(file.path()).unwrap();
    let index = build_index(&mut reader, &budget_spec(ListingVariant::Modflow), None).unwrap();

    // The malformed pair ends the scan; only the prefix survives.
    assert_eq!(index.len(), 1);
    assert_eq!(index[0].time_step, 1);
}

#[test]
fn test_max_entries_caps_the_scan() {
    let layout = ListingVariant::Modflow.budget_layout();
    let entries = storage_entry();
    let mut content = String::new();
    for ts in 1..=5 {
        content.push_str(&budget_block(&layout, ts, 1, &entries));
    }
    let file = write_listing(&content);

    let mut reader = ListingReader::open(file.path()).unwrap();
    let index = build_index(&mut reader, &budget_spec(ListingVariant::Modflow), Some(2)).unwrap();
    assert_eq!(index.len(), 2);
}

#[test]
fn test_surface_water_pair_is_read_from_header_line() {
    let layout = ListingVariant::SurfaceWater.budget_layout();
    let entries = storage_entry();
    let content = budget_block(&layout, 4, 2, &entries);
    let file = write_listing(&content);

    let mut reader = ListingReader::open(file.path()).unwrap();
    let index = build_index(
        &mut reader,
        &budget_spec(ListingVariant::SurfaceWater),
        None,
    )
    .unwrap();

    assert_eq!(index.len(), 1);
    assert_eq!((index[0].time_step, index[0].stress_period), (4, 2));
}

#[test]
fn test_key_phrase_at_end_of_stream_without_pair_line() {
    let layout = ListingVariant::SurfaceWater.budget_layout();
    // Key line is the last line of the file; the pair line never arrives.
    let content = format!("  {}", layout.key_phrase);
    let file = write_listing(&content);

    let mut reader = ListingReader::open(file.path()).unwrap();
    let index = build_index(
        &mut reader,
        &budget_spec(ListingVariant::SurfaceWater),
        None,
    )
    .unwrap();
    assert!(index.is_empty());
}

#[test]
fn test_time_summary_key_line_indexes_with_time_windows() {
    let time_layout = ListingVariant::Modflow.time_layout();
    let content = format!(
        "{}\n",
        key_line(
            &time_layout.key_phrase,
            time_layout.time_step,
            time_layout.stress_period,
            3,
            2,
        )
    );
    let file = write_listing(&content);

    let spec = IndexSpec {
        key_phrase: time_layout.key_phrase.clone(),
        header_lines: 0,
        time_step: time_layout.time_step,
        stress_period: time_layout.stress_period,
    };
    let mut reader = ListingReader::open(file.path()).unwrap();
    let index = build_index(&mut reader, &spec, None).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!((index[0].time_step, index[0].stress_period), (3, 2));
}
