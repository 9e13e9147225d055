//! Snapshot Module
//!
//! Whole-store persistence: one file holds every record at one instant.
//!
//! ## Responsibilities
//! - Encode the store's contents into a framed, checksummed blob
//! - Replace the destination file atomically (temp file + rename)
//! - Decode a blob back into a key → record mapping, rejecting anything
//!   that does not decode cleanly
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │ Header                                                 │
//! │ ┌──────────┬──────────┬─────────────┬─────────┬──────┐ │
//! │ │Magic (4) │Version(2)│ Entries (8) │ Len (8) │CRC(4)│ │
//! │ └──────────┴──────────┴─────────────┴─────────┴──────┘ │
//! ├────────────────────────────────────────────────────────┤
//! │ Body                                                   │
//! │ bincode( Vec<(key, Record)> )                          │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no incremental logging. A save taken while writers are active
//! copies the map shard by shard, so it can mix state from before and after
//! a concurrent write; callers that need an exact cut must quiesce writers
//! first.

mod format;
mod manager;

pub use format::{decode, encode, SnapshotInfo, HEADER_SIZE, MAGIC, VERSION};
pub use manager::{inspect, load, save};
