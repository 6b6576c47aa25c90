//! # recsort
//!
//! Decodes files of length-prefixed binary records and orders them by
//! their fixed 10-byte key:
//! - Streaming decoder with explicit truncation policy
//! - Rejection of lengths too short to hold a key
//! - Stable, comparator-driven in-memory sort
//! - Optional re-encoding of the sorted records
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        recsort CLI                           │
//! │              (arguments, logging, exit codes)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Engine                               │
//! │               decode(path) / order(records)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Record    │          │    Order    │
//!   │ Reader/Codec│          │ (KeyOrder)  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod order;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RecordField, RecsortError, Result};
pub use config::{Config, TruncationPolicy};
pub use engine::Engine;
pub use record::{Key, Record};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of recsort
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
