//! # MimeKV
//!
//! An embeddable, in-process key-value store for media-typed records:
//! - Records are a byte payload plus a `type/subtype[;params]` media type
//! - Every write is validated before it reaches the map
//! - Lock-sharded concurrent CRUD from any number of threads
//! - Whole-store snapshot persistence, saved when the embedder asks
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Embedding Application                     │
//! │              (exists / read / write / destroy)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                          Store                               │
//! │        Validator ──▶ ShardedMap<String, Arc<Record>>         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ open / save
//!                       ▼
//!               ┌───────────────┐
//!               │   Snapshot    │
//!               │ (temp+rename) │
//!               └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use mimekv::{Record, Store};
//!
//! let store = Store::open("./data.snapshot")?;
//! store.write("greeting", Record::new("hello", "text/plain"))?;
//! assert!(store.exists("greeting"));
//! store.save()?;
//! # Ok::<(), mimekv::MimeError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod snapshot;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MimeError, Result};
pub use config::Config;
pub use record::Record;
pub use store::{ActivityStats, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of MimeKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
