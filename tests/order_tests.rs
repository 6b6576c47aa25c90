//! Tests for record ordering
//!
//! These tests verify:
//! - Byte-wise key order after sorting
//! - Equal keys are equal and keep file order
//! - Sorting works in place without touching payloads

use std::cmp::Ordering;

use recsort::order::{compare_keys, is_ordered, order, sort_records, KeyOrder, RecordComparator};
use recsort::record::{Record, KEY_SIZE};

// =============================================================================
// Helper Functions
// =============================================================================

fn record(key: [u8; KEY_SIZE], value: &[u8]) -> Record {
    Record::new(key, value.to_vec()).unwrap()
}

fn key_starting(first: u8) -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];
    key[0] = first;
    key
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_two_records_sorted_by_first_byte() {
    let mut records = vec![
        record(key_starting(9), b"nine"),
        record(key_starting(1), b"one"),
    ];

    order(&mut records);

    assert_eq!(records[0].key, key_starting(1));
    assert_eq!(records[1].key, key_starting(9));
    assert_eq!(records[0].value, b"one");
}

#[test]
fn test_later_bytes_break_ties() {
    let mut a = [3u8; KEY_SIZE];
    let mut b = [3u8; KEY_SIZE];
    a[KEY_SIZE - 1] = 2;
    b[KEY_SIZE - 1] = 1;

    let mut records = vec![record(a, b"a"), record(b, b"b")];
    order(&mut records);

    assert_eq!(records[0].value, b"b");
    assert_eq!(compare_keys(&a, &b), Ordering::Greater);
}

#[test]
fn test_sorted_output_respects_key_order() {
    // Deterministic pseudo-random keys
    let mut state: u32 = 0x1234_5678;
    let mut records: Vec<Record> = (0..200)
        .map(|i| {
            let mut key = [0u8; KEY_SIZE];
            for byte in key.iter_mut() {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                *byte = (state >> 16) as u8 % 4;
            }
            record(key, &[i as u8])
        })
        .collect();
    let mut expected: Vec<[u8; KEY_SIZE]> = records.iter().map(|r| r.key).collect();
    expected.sort();

    order(&mut records);

    assert!(is_ordered(&records, &KeyOrder));
    let keys: Vec<[u8; KEY_SIZE]> = records.iter().map(|r| r.key).collect();
    assert_eq!(keys, expected);
}

// =============================================================================
// Equal Key Tests
// =============================================================================

#[test]
fn test_equal_keys_compare_equal_both_ways() {
    let a = record([7; KEY_SIZE], b"first");
    let b = record([7; KEY_SIZE], b"second");

    assert_eq!(KeyOrder.compare(&a, &b), Ordering::Equal);
    assert_eq!(KeyOrder.compare(&b, &a), Ordering::Equal);
    assert_eq!(KeyOrder.compare(&a, &a), Ordering::Equal);
}

#[test]
fn test_equal_keys_keep_file_order() {
    let mut records = vec![
        record([5; KEY_SIZE], b"dup-0"),
        record([1; KEY_SIZE], b"low"),
        record([5; KEY_SIZE], b"dup-1"),
        record([5; KEY_SIZE], b"dup-2"),
        record([0; KEY_SIZE], b"lowest"),
    ];

    order(&mut records);

    let values: Vec<&[u8]> = records.iter().map(|r| r.value.as_slice()).collect();
    assert_eq!(
        values,
        vec![&b"lowest"[..], b"low", b"dup-0", b"dup-1", b"dup-2"]
    );
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn test_empty_and_single() {
    let mut empty: Vec<Record> = Vec::new();
    order(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![record([1; KEY_SIZE], b"only")];
    order(&mut single);
    assert_eq!(single.len(), 1);
}

#[test]
fn test_custom_comparator_value() {
    struct ByValueLen;

    impl RecordComparator for ByValueLen {
        fn compare(&self, a: &Record, b: &Record) -> Ordering {
            a.value.len().cmp(&b.value.len())
        }
    }

    let mut records = vec![
        record([0; KEY_SIZE], b"ccc"),
        record([9; KEY_SIZE], b"a"),
        record([5; KEY_SIZE], b"bb"),
    ];
    sort_records(&mut records, &ByValueLen);

    assert!(is_ordered(&records, &ByValueLen));
    assert_eq!(records[0].key, [9; KEY_SIZE]);
}
