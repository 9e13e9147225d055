//! Sharded map implementation
//!
//! A fixed array of `RwLock<HashMap>` shards. A key always hashes to the same
//! shard, so single-key operations only contend with keys in that shard.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;

use crossbeam::utils::CachePadded;
use parking_lot::RwLock;

use crate::record::Record;

type Shard = CachePadded<RwLock<HashMap<String, Arc<Record>>>>;

/// Concurrent `String -> Arc<Record>` map
///
/// Values are swapped as whole `Arc`s under the shard's write lock, so a
/// reader either sees the old record or the new one, never a mix.
pub struct ShardedMap {
    shards: Box<[Shard]>,

    /// `shard_count - 1`; shard_count is a power of two
    mask: usize,

    hasher: RandomState,
}

impl ShardedMap {
    /// Create an empty map with `shard_count` shards (power of two)
    pub fn new(shard_count: usize) -> Self {
        debug_assert!(shard_count.is_power_of_two());
        let shards = (0..shard_count)
            .map(|_| CachePadded::new(RwLock::new(HashMap::new())))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            shards,
            mask: shard_count - 1,
            hasher: RandomState::new(),
        }
    }

    fn shard(&self, key: &str) -> &Shard {
        let index = (self.hasher.hash_one(key) as usize) & self.mask;
        &self.shards[index]
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.shard(key).read().contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<Arc<Record>> {
        self.shard(key).read().get(key).cloned()
    }

    /// Insert or replace, returning the previous record
    pub fn insert(&self, key: String, record: Arc<Record>) -> Option<Arc<Record>> {
        self.shard(&key).write().insert(key, record)
    }

    pub fn remove(&self, key: &str) -> Option<Arc<Record>> {
        self.shard(key).write().remove(key)
    }

    /// Total entries; may be stale under concurrent writes
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.read().is_empty())
    }

    /// Visit every entry, one shard at a time
    ///
    /// Each shard is read-locked only while it is being copied out, so
    /// writers to other shards proceed concurrently. The result may mix
    /// state from before and after a concurrent write.
    pub fn entries(&self) -> Vec<(String, Arc<Record>)> {
        let mut out = Vec::new();
        for shard in self.shards.iter() {
            let guard = shard.read();
            out.extend(guard.iter().map(|(k, v)| (k.clone(), Arc::clone(v))));
        }
        out
    }

    pub fn keys(&self) -> Vec<String> {
        let mut out = Vec::new();
        for shard in self.shards.iter() {
            out.extend(shard.read().keys().cloned());
        }
        out
    }
}
