//! Configuration for recsort
//!
//! Centralized configuration with sensible defaults.

use crate::error::{RecsortError, Result};

/// Main configuration for decoding and sorting
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Decode Configuration
    // -------------------------------------------------------------------------
    /// What to do when the stream ends partway through a record
    pub truncation: TruncationPolicy,

    /// Largest payload (in bytes) a single record may declare; unbounded when `None`
    pub max_value_size: Option<u32>,

    // -------------------------------------------------------------------------
    // I/O Configuration
    // -------------------------------------------------------------------------
    /// Capacity of the buffered reader wrapped around the input
    pub read_buffer_size: usize,
}

/// Handling of end-of-stream inside a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Drop the partial record and finish decoding successfully
    #[default]
    Lenient,

    /// Fail with `RecsortError::TruncatedRecord`
    Strict,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            truncation: TruncationPolicy::Lenient,
            max_value_size: None,
            read_buffer_size: 64 * 1024, // 64 KB
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the truncation policy
    pub fn truncation(mut self, policy: TruncationPolicy) -> Self {
        self.config.truncation = policy;
        self
    }

    /// Shorthand for `truncation(TruncationPolicy::Strict)`
    pub fn strict(self, strict: bool) -> Self {
        if strict {
            self.truncation(TruncationPolicy::Strict)
        } else {
            self.truncation(TruncationPolicy::Lenient)
        }
    }

    /// Set the largest accepted payload size (in bytes)
    pub fn max_value_size(mut self, size: u32) -> Self {
        self.config.max_value_size = Some(size);
        self
    }

    /// Set the read buffer capacity (in bytes)
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.config.read_buffer_size = size;
        self
    }

    pub fn build(self) -> Result<Config> {
        if self.config.read_buffer_size == 0 {
            return Err(RecsortError::Config(
                "read_buffer_size must be greater than zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}
