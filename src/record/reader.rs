//! Record Reader
//!
//! Streams records out of a byte source, one at a time.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::{debug, trace, warn};

use super::entry::{Key, Record, KEY_SIZE, LENGTH_SIZE};
use crate::config::{Config, TruncationPolicy};
use crate::error::{RecordField, RecsortError, Result};

/// Where and how the stream ended inside a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    /// Field that was being read
    pub field: RecordField,

    /// Offset of the start of the partial record
    pub offset: u64,

    /// Bytes the field needed
    pub expected: usize,

    /// Bytes actually available
    pub actual: usize,
}

/// Counters for a decode pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Number of complete records returned
    pub records_decoded: u64,

    /// Bytes belonging to complete records
    pub bytes_consumed: u64,

    /// Set when a partial record was dropped under the lenient policy
    pub truncated: Option<Truncation>,
}

/// Reads records from a byte stream
pub struct RecordReader<R: Read> {
    reader: BufReader<R>,
    policy: TruncationPolicy,
    max_value_size: Option<u32>,
    read_buffer_size: usize,
    summary: DecodeSummary,
    finished: bool,
}

impl RecordReader<File> {
    /// Open a record file for reading
    pub fn open(path: &Path, config: &Config) -> Result<Self> {
        let file = File::open(path)?;
        debug!(path = %path.display(), "opened record file");
        Ok(Self::new(file, config))
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap an existing stream positioned at the first record
    pub fn new(inner: R, config: &Config) -> Self {
        Self {
            reader: BufReader::with_capacity(config.read_buffer_size, inner),
            policy: config.truncation,
            max_value_size: config.max_value_size,
            read_buffer_size: config.read_buffer_size,
            summary: DecodeSummary::default(),
            finished: false,
        }
    }

    /// Counters accumulated so far
    pub fn summary(&self) -> &DecodeSummary {
        &self.summary
    }

    /// Read the next record from the stream
    ///
    /// Returns `Ok(None)` at a clean end of stream, and also after a
    /// partial record under `TruncationPolicy::Lenient`.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        if self.finished {
            return Ok(None);
        }

        let offset = self.summary.bytes_consumed;

        // Step 1: length prefix
        let mut length_buf = [0u8; LENGTH_SIZE];
        let n = self.fill(&mut length_buf, RecordField::Length, offset)?;
        if n == 0 {
            self.finished = true;
            return Ok(None);
        }
        if n < LENGTH_SIZE {
            return self.truncated(RecordField::Length, offset, LENGTH_SIZE, n);
        }
        let length = u32::from_be_bytes(length_buf);

        // Step 2: derive the payload size
        let value_len = Record::value_len(length, offset)?;

        // Step 3: key
        let mut key: Key = [0; KEY_SIZE];
        let n = self.fill(&mut key, RecordField::Key, offset + LENGTH_SIZE as u64)?;
        if n < KEY_SIZE {
            return self.truncated(RecordField::Key, offset, KEY_SIZE, n);
        }

        // A truncated key ends the stream before an oversized value matters
        if let Some(max) = self.max_value_size {
            if value_len > max {
                return Err(RecsortError::RecordTooLarge {
                    size: value_len,
                    max,
                    offset,
                });
            }
        }

        // Step 4: value, grown as bytes arrive
        let value_len = value_len as usize;
        let mut value = Vec::with_capacity(value_len.min(self.read_buffer_size));
        let value_offset = offset + (LENGTH_SIZE + KEY_SIZE) as u64;
        (&mut self.reader)
            .take(value_len as u64)
            .read_to_end(&mut value)
            .map_err(|e| {
                RecsortError::read(RecordField::Value, value_offset + value.len() as u64, e)
            })?;
        if value.len() < value_len {
            let actual = value.len();
            return self.truncated(RecordField::Value, offset, value_len, actual);
        }

        let record = Record { length, key, value };
        self.summary.records_decoded += 1;
        self.summary.bytes_consumed += record.encoded_len() as u64;
        trace!(offset, length, "decoded record");

        Ok(Some(record))
    }

    /// Iterate over all records
    pub fn records(self) -> RecordIter<R> {
        RecordIter {
            reader: self,
            done: false,
        }
    }

    /// Decode the whole stream into memory
    pub fn read_all(mut self) -> Result<(Vec<Record>, DecodeSummary)> {
        let mut records = Vec::new();
        while let Some(record) = self.next_record()? {
            records.push(record);
        }
        Ok((records, self.summary))
    }

    /// Fill `buf` as far as the stream allows, returning the bytes read
    fn fill(&mut self, buf: &mut [u8], field: RecordField, offset: u64) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(RecsortError::read(field, offset + filled as u64, e)),
            }
        }
        Ok(filled)
    }

    fn truncated(
        &mut self,
        field: RecordField,
        offset: u64,
        expected: usize,
        actual: usize,
    ) -> Result<Option<Record>> {
        self.finished = true;

        match self.policy {
            TruncationPolicy::Lenient => {
                warn!(%field, offset, expected, actual, "dropping truncated record");
                self.summary.truncated = Some(Truncation {
                    field,
                    offset,
                    expected,
                    actual,
                });
                Ok(None)
            }
            TruncationPolicy::Strict => Err(RecsortError::TruncatedRecord {
                field,
                offset,
                expected,
                actual,
            }),
        }
    }
}

/// Iterator over records
///
/// Yields each error once and then stops.
pub struct RecordIter<R: Read> {
    reader: RecordReader<R>,
    done: bool,
}

impl<R: Read> RecordIter<R> {
    /// Counters accumulated so far
    pub fn summary(&self) -> &DecodeSummary {
        self.reader.summary()
    }
}

impl<R: Read> Iterator for RecordIter<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
