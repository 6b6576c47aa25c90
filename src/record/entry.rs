//! Record definitions
//!
//! Defines the structure of a single decoded record.

use std::fmt;

use crate::error::{RecsortError, Result};

/// Size of the big-endian length prefix
pub const LENGTH_SIZE: usize = 4;

/// Size of the fixed sort key
pub const KEY_SIZE: usize = 10;

/// Length prefix plus key: the smallest possible encoded record
pub const HEADER_SIZE: usize = LENGTH_SIZE + KEY_SIZE;

/// Fixed-size sort key, compared byte by byte from index 0
pub type Key = [u8; KEY_SIZE];

/// A single decoded record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Declared length as stored in the stream (key + value bytes).
    ///
    /// Authoritative for the encoded size; must equal `KEY_SIZE + value.len()`,
    /// which `Record::new` and the decoder always produce.
    pub length: u32,

    /// Sort key
    pub key: Key,

    /// Payload, `length - KEY_SIZE` bytes
    pub value: Vec<u8>,
}

impl Record {
    /// Build a record from a key and payload, deriving `length`
    pub fn new(key: Key, value: Vec<u8>) -> Result<Self> {
        let length = value
            .len()
            .checked_add(KEY_SIZE)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(RecsortError::ValueTooLarge { size: value.len() })?;

        Ok(Self { length, key, value })
    }

    /// Payload size implied by a declared length.
    ///
    /// A length shorter than the key cannot describe a record and is
    /// rejected rather than wrapped around.
    pub fn value_len(length: u32, offset: u64) -> Result<u32> {
        length
            .checked_sub(KEY_SIZE as u32)
            .ok_or(RecsortError::MalformedLength { length, offset })
    }

    /// Total bytes this record occupies when encoded: the prefix plus `length`
    pub fn encoded_len(&self) -> usize {
        LENGTH_SIZE + self.length as usize
    }
}

/// Human-readable dump: `{length [key bytes] [value bytes]}`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} ", self.length)?;
        write_bytes(f, &self.key)?;
        write!(f, " ")?;
        write_bytes(f, &self.value)?;
        write!(f, "}}")
    }
}

fn write_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "[")?;
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", b)?;
    }
    write!(f, "]")
}
