//! Order Module
//!
//! Total ordering of records by their fixed key, applied in place.
//!
//! ## Responsibilities
//! - Compare keys byte by byte from index 0
//! - Report equal keys as `Ordering::Equal`
//! - Sort stably with a comparator passed in by value, never a global

mod comparator;

pub use comparator::{compare_keys, is_ordered, order, sort_records, KeyOrder, RecordComparator};
