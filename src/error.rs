//! Error types for recsort
//!
//! Provides a unified error type for decoding, ordering and re-encoding.

use std::fmt;

use thiserror::Error;

/// Result type alias using RecsortError
pub type Result<T> = std::result::Result<T, RecsortError>;

/// The field of a record being read when a decode step failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    /// The 4-byte big-endian length prefix
    Length,
    /// The fixed 10-byte sort key
    Key,
    /// The variable-length payload
    Value,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::Length => write!(f, "length"),
            RecordField::Key => write!(f, "key"),
            RecordField::Value => write!(f, "value"),
        }
    }
}

/// Unified error type for recsort operations
#[derive(Debug, Error)]
pub enum RecsortError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Decode Errors (one per step of the record protocol)
    // -------------------------------------------------------------------------
    #[error("failed reading length at offset {offset}: {source}")]
    ReadLength {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading key at offset {offset}: {source}")]
    ReadKey {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading value at offset {offset}: {source}")]
    ReadValue {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Format Errors
    // -------------------------------------------------------------------------
    #[error("malformed length {length} at offset {offset}: must be at least the key size")]
    MalformedLength { length: u32, offset: u64 },

    #[error("record at offset {offset} declares a {size} byte value (max {max})")]
    RecordTooLarge { size: u32, max: u32, offset: u64 },

    #[error("truncated record at offset {offset}: {field} needs {expected} bytes, got {actual}")]
    TruncatedRecord {
        field: RecordField,
        offset: u64,
        expected: usize,
        actual: usize,
    },

    #[error("value of {size} bytes does not fit in a record")]
    ValueTooLarge { size: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RecsortError {
    /// Wrap an I/O error raised while reading `field` at `offset`
    pub(crate) fn read(field: RecordField, offset: u64, source: std::io::Error) -> Self {
        match field {
            RecordField::Length => RecsortError::ReadLength { offset, source },
            RecordField::Key => RecsortError::ReadKey { offset, source },
            RecordField::Value => RecsortError::ReadValue { offset, source },
        }
    }

    /// Process exit code for this error.
    ///
    /// Read failures keep the per-step codes 1, 2 and 3 so an operator can
    /// tell which part of a record the stream broke in.
    pub fn exit_code(&self) -> i32 {
        match self {
            RecsortError::ReadLength { .. } => 1,
            RecsortError::ReadKey { .. } => 2,
            RecsortError::ReadValue { .. } => 3,
            RecsortError::MalformedLength { .. } => 4,
            RecsortError::TruncatedRecord { .. } => 5,
            RecsortError::RecordTooLarge { .. } => 6,
            RecsortError::ValueTooLarge { .. } => 7,
            RecsortError::Io(_) => 8,
            RecsortError::Config(_) => 9,
        }
    }
}
