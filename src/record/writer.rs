//! Record Writer
//!
//! Re-encodes records into the on-disk layout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::codec::encode_record;
use super::entry::Record;
use crate::error::Result;

/// Writes records to a byte sink
pub struct RecordWriter<W: Write> {
    writer: BufWriter<W>,
    bytes_written: u64,
}

impl RecordWriter<File> {
    /// Create (or truncate) a record file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        debug!(path = %path.display(), "created record file");
        Ok(Self::new(file))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
            bytes_written: 0,
        }
    }

    /// Append one record
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        let bytes = encode_record(record);
        self.writer.write_all(&bytes)?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Append every record in order
    pub fn write_all_records<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush buffered bytes and hand back the inner writer
    pub fn finish(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error().into())
    }
}
