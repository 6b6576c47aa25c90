//! Record comparators and the in-place sort.

use std::cmp::Ordering;

use tracing::debug;

use crate::record::{Key, Record};

/// A total order over records
pub trait RecordComparator {
    fn compare(&self, a: &Record, b: &Record) -> Ordering;
}

/// Closures work as comparators directly
impl<F> RecordComparator for F
where
    F: Fn(&Record, &Record) -> Ordering,
{
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self(a, b)
    }
}

/// Lexicographic order on the 10-byte key
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyOrder;

impl RecordComparator for KeyOrder {
    #[inline]
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        compare_keys(&a.key, &b.key)
    }
}

/// Compare two keys from index 0; the first differing byte decides.
#[inline]
pub fn compare_keys(a: &Key, b: &Key) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}

/// Stable in-place sort of `records` under `cmp`
pub fn sort_records<C: RecordComparator + ?Sized>(records: &mut [Record], cmp: &C) {
    records.sort_by(|a, b| cmp.compare(a, b));
    debug!(count = records.len(), "sorted records");
}

/// Sort records by key
pub fn order(records: &mut [Record]) {
    sort_records(records, &KeyOrder);
}

/// Whether no adjacent pair of `records` is out of order under `cmp`
pub fn is_ordered<C: RecordComparator + ?Sized>(records: &[Record], cmp: &C) -> bool {
    records
        .windows(2)
        .all(|w| cmp.compare(&w[0], &w[1]) != Ordering::Greater)
}
