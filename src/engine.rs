//! Engine Module
//!
//! The entry point that coordinates decoding, ordering and re-encoding.
//!
//! ## Responsibilities
//! - Decode a whole record file into memory
//! - Order the records by key, in place
//! - Optionally write the sorted records back out

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::order;
use crate::record::{Record, RecordReader, RecordWriter};

/// Decodes and sorts record files
///
/// Everything happens on the calling thread; records are held in memory
/// from the first decode until the caller drops them.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decode every record in the file at `path`, in file order
    pub fn decode(&self, path: &Path) -> Result<Vec<Record>> {
        let reader = RecordReader::open(path, &self.config)?;
        let (records, summary) = reader.read_all()?;

        info!(
            path = %path.display(),
            records = summary.records_decoded,
            bytes = summary.bytes_consumed,
            truncated = summary.truncated.is_some(),
            "decoded record file"
        );

        Ok(records)
    }

    /// Sort records by key in place
    pub fn order(&self, records: &mut [Record]) {
        order::order(records);
    }

    /// Decode the file at `path` and return its records sorted by key
    pub fn sort_file(&self, path: &Path) -> Result<Vec<Record>> {
        let mut records = self.decode(path)?;
        self.order(&mut records);
        Ok(records)
    }

    /// Re-encode `records` into a new file at `path`
    ///
    /// Returns the number of bytes written.
    pub fn write_sorted(&self, records: &[Record], path: &Path) -> Result<u64> {
        let mut writer = RecordWriter::create(path)?;
        writer.write_all_records(records)?;
        let written = writer.bytes_written();
        writer.finish()?.sync_all()?;

        info!(path = %path.display(), records = records.len(), bytes = written, "wrote record file");
        Ok(written)
    }
}
