//! Record Module
//!
//! Decoding, encoding and in-memory representation of length-prefixed
//! records.
//!
//! ## Responsibilities
//! - Turn a byte stream into a sequence of `Record`s
//! - Reject lengths that cannot hold a key
//! - Stop cleanly (or fail, under the strict policy) on truncation
//! - Re-encode records into the same layout
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Record 1                                 │
//! │ ┌─────────┬──────────┬─────────────────┐ │
//! │ │ Len (4) │ Key (10) │ Value (Len - 10)│ │
//! │ └─────────┴──────────┴─────────────────┘ │
//! ├──────────────────────────────────────────┤
//! │ Record 2                                 │
//! │ ┌─────────┬──────────┬─────────────────┐ │
//! │ │ Len (4) │ Key (10) │ Value (Len - 10)│ │
//! │ └─────────┴──────────┴─────────────────┘ │
//! └──────────────────────────────────────────┘
//! ```
//!
//! `Len` is big-endian and counts the key and value but not itself. There
//! is no magic number and no separator between records.

mod entry;
mod codec;
mod reader;
mod writer;

pub use entry::{Key, Record, HEADER_SIZE, KEY_SIZE, LENGTH_SIZE};
pub use codec::{decode_record, encode_record};
pub use reader::{DecodeSummary, RecordIter, RecordReader, Truncation};
pub use writer::RecordWriter;
