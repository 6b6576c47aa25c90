//! Integration tests for recsort

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use recsort::record::{encode_record, KEY_SIZE};
use recsort::{Config, Engine, Record, RecsortError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.bin");
    let output = temp_dir.path().join("output.bin");
    (temp_dir, input, output)
}

fn write_file(path: &Path, bytes: &[u8]) {
    let mut file = File::create(path).unwrap();
    file.write_all(bytes).unwrap();
    file.sync_all().unwrap();
}

fn record(first: u8, value: &[u8]) -> Record {
    let mut key = [0u8; KEY_SIZE];
    key[0] = first;
    Record::new(key, value.to_vec()).unwrap()
}

// =============================================================================
// Engine Tests
// =============================================================================

#[test]
fn test_decode_empty_file() {
    let (_temp, input, _) = setup();
    write_file(&input, &[]);

    let records = Engine::default().decode(&input).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_decode_then_order() {
    let (_temp, input, _) = setup();
    let mut bytes = encode_record(&record(9, b"later")).to_vec();
    bytes.extend_from_slice(&encode_record(&record(1, b"sooner")));
    write_file(&input, &bytes);

    let engine = Engine::default();
    let mut records = engine.decode(&input).unwrap();
    assert_eq!(records[0].key[0], 9);

    engine.order(&mut records);
    assert_eq!(records[0].key[0], 1);
    assert_eq!(records[1].key[0], 9);
}

#[test]
fn test_sort_file_drops_truncated_tail() {
    let (_temp, input, _) = setup();
    let mut bytes = encode_record(&record(2, b"b")).to_vec();
    bytes.extend_from_slice(&encode_record(&record(1, b"a")));
    bytes.extend_from_slice(&[0, 0, 0, 15, 0]);
    write_file(&input, &bytes);

    let records = Engine::default().sort_file(&input).unwrap();

    assert_eq!(records, vec![record(1, b"a"), record(2, b"b")]);
}

#[test]
fn test_sort_file_strict_reports_truncation() {
    let (_temp, input, _) = setup();
    let encoded = encode_record(&record(1, b"abc"));
    write_file(&input, &encoded[..encoded.len() - 1]);

    let config = Config::builder().strict(true).build().unwrap();
    let err = Engine::new(config).sort_file(&input).unwrap_err();

    assert!(matches!(err, RecsortError::TruncatedRecord { .. }));
}

#[test]
fn test_sort_file_missing_input() {
    let (_temp, input, _) = setup();
    let err = Engine::default().sort_file(&input).unwrap_err();
    assert!(matches!(err, RecsortError::Io(_)));
    assert_eq!(err.exit_code(), 8);
}

// =============================================================================
// Re-encode Tests
// =============================================================================

#[test]
fn test_write_sorted_then_decode() {
    let (_temp, input, output) = setup();
    let originals = vec![record(3, b"c"), record(1, b""), record(2, b"bb")];
    let bytes: Vec<u8> = originals
        .iter()
        .flat_map(|r| encode_record(r).to_vec())
        .collect();
    write_file(&input, &bytes);

    let engine = Engine::default();
    let sorted = engine.sort_file(&input).unwrap();
    let written = engine.write_sorted(&sorted, &output).unwrap();

    assert_eq!(written, bytes.len() as u64);
    assert_eq!(fs::metadata(&output).unwrap().len(), written);

    let reread = engine.decode(&output).unwrap();
    assert_eq!(reread, vec![record(1, b""), record(2, b"bb"), record(3, b"c")]);
}

#[test]
fn test_dump_lines() {
    let records = vec![
        Record::new([1, 2, 3, 4, 5, 6, 7, 8, 9, 10], vec![]).unwrap(),
        record(0, &[200]),
    ];
    let lines: Vec<String> = records.iter().map(|r| r.to_string()).collect();

    assert_eq!(lines[0], "{10 [1 2 3 4 5 6 7 8 9 10] []}");
    assert_eq!(lines[1], "{11 [0 0 0 0 0 0 0 0 0 0] [200]}");
}
