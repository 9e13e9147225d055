//! Store Module
//!
//! The concurrent key → record map and its CRUD surface.
//!
//! ## Responsibilities
//! - Validate every record before it is stored
//! - Serve lock-sharded concurrent reads and writes
//! - Track read/write activity
//! - Bind to one snapshot file and save to it on request
//!
//! ## Concurrency Model
//! Each key lives in exactly one shard (`RwLock<HashMap>`). Single-key
//! operations are atomic and linearizable; there is no multi-key atomicity
//! and no global lock. Writers to the same key race, the last one to take
//! the shard lock wins.

mod shard;

pub use shard::ShardedMap;

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::config::Config;
use crate::error::{MimeError, Result};
use crate::record::{self, Record};
use crate::snapshot;

/// Read/write activity since the store was opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityStats {
    /// Lookups, including the existence check every write and destroy does
    pub reads: u64,

    /// Successful writes and all destroys
    pub writes: u64,

    /// Number of records currently stored
    pub size: u64,
}

#[derive(Default)]
struct Activity {
    reads: AtomicU64,
    writes: AtomicU64,

    /// Signed: a destroy can be counted before the write it removed
    size: AtomicI64,
}

/// An embeddable, concurrent record store bound to a snapshot file
///
/// Share it between threads with `Arc<Store>`; every method takes `&self`.
pub struct Store {
    config: Config,

    records: ShardedMap,

    activity: Activity,

    /// Serializes saves (entries copy, encode, write, rename)
    save_lock: Mutex<()>,
}

impl Store {
    /// Open the store bound to `path`, using default settings otherwise
    ///
    /// Loads the snapshot if the file exists. Otherwise writes an empty
    /// snapshot so that the file exists once this returns.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(Config {
            snapshot_path: path.as_ref().to_path_buf(),
            ..Config::default()
        })
    }

    /// Open a store with an explicit config
    pub fn open_with(config: Config) -> Result<Self> {
        config.validate()?;

        let path = config.snapshot_path.clone();
        if path.exists() {
            let records = snapshot::load(&path)?;
            tracing::info!(
                path = %path.display(),
                records = records.len(),
                "hydrated store from snapshot"
            );
            Ok(Self::with_records(config, records))
        } else {
            let store = Self::with_records(config, HashMap::new());
            store.save()?;
            tracing::info!(path = %path.display(), "initialized empty snapshot");
            Ok(store)
        }
    }

    /// Build a store from already-validated records
    fn with_records(config: Config, records: HashMap<String, Record>) -> Self {
        let map = ShardedMap::new(config.shard_count);
        let activity = Activity::default();
        activity.size.store(records.len() as i64, Ordering::Relaxed);

        for (key, record) in records {
            map.insert(key, Arc::new(record));
        }

        Self {
            config,
            records: map,
            activity,
            save_lock: Mutex::new(()),
        }
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Whether `key` currently maps to a record
    pub fn exists(&self, key: &str) -> bool {
        self.activity.reads.fetch_add(1, Ordering::Relaxed);
        self.records.contains_key(key)
    }

    /// Get a copy of the record stored under `key`
    pub fn read(&self, key: &str) -> Result<Record> {
        self.activity.reads.fetch_add(1, Ordering::Relaxed);
        self.records
            .get(key)
            .map(|record| (*record).clone())
            .ok_or_else(|| MimeError::KeyNotFound(key.to_string()))
    }

    /// Store `record` under `key`, replacing whatever was there
    ///
    /// Invalid records are rejected before the map is touched.
    pub fn write(&self, key: impl Into<String>, record: Record) -> Result<()> {
        let key = key.into();
        record::validate(&key, &record)?;

        let previous = self.records.insert(key, Arc::new(record));

        self.activity.reads.fetch_add(1, Ordering::Relaxed);
        self.activity.writes.fetch_add(1, Ordering::Relaxed);
        if previous.is_none() {
            self.activity.size.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }

    /// Remove `key` if present; absent keys are a no-op
    pub fn destroy(&self, key: &str) {
        let removed = self.records.remove(key);

        self.activity.reads.fetch_add(1, Ordering::Relaxed);
        self.activity.writes.fetch_add(1, Ordering::Relaxed);
        if removed.is_some() {
            self.activity.size.fetch_sub(1, Ordering::Relaxed);
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Save a snapshot to the file this store is bound to
    ///
    /// Shards are copied one at a time without a global lock, so writes
    /// racing with a save may or may not be included. Concurrent saves run
    /// one after another.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.config.snapshot_path)
    }

    /// Save a snapshot to an explicit destination
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        snapshot::save(self, path.as_ref(), self.config.sync_on_save)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of stored records; may be stale under concurrent writes
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All keys currently stored, in no particular order
    pub fn keys(&self) -> Vec<String> {
        self.records.keys()
    }

    /// Point-in-time copy of every entry, shard by shard
    pub fn entries(&self) -> Vec<(String, Arc<Record>)> {
        self.records.entries()
    }

    /// Activity counters since open
    pub fn stats(&self) -> ActivityStats {
        ActivityStats {
            reads: self.activity.reads.load(Ordering::Relaxed),
            writes: self.activity.writes.load(Ordering::Relaxed),
            size: self.activity.size.load(Ordering::Relaxed).max(0) as u64,
        }
    }

    /// Held by the snapshot manager for the whole of a save
    pub(crate) fn lock_saves(&self) -> MutexGuard<'_, ()> {
        self.save_lock.lock()
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.config.snapshot_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("snapshot_path", &self.config.snapshot_path)
            .field("shard_count", &self.config.shard_count)
            .field("stats", &self.stats())
            .finish()
    }
}
