use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard, RawMutex};

use crate::core::types::DocId;

/// Bucket-partitioned accumulator keyed by document id, with one lock per
/// bucket. Backs the parallel ranker: different buckets can be written from
/// different threads with no contention, and the per-bucket lock is the
/// only synchronization the parallel path needs.
pub struct ShardedMap<V> {
    buckets: Vec<Mutex<BTreeMap<DocId, V>>>,
}

/// A locked, mutable reference to one bucket's slot for a key, created with
/// `V::default()` on first access. The bucket's lock is held for the
/// lifetime of this guard and released when it is dropped.
pub struct Access<'a, V> {
    guard: MappedMutexGuard<'a, RawMutex, V>,
}

impl<'a, V> Deref for Access<'a, V> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.guard
    }
}

impl<'a, V> DerefMut for Access<'a, V> {
    fn deref_mut(&mut self) -> &mut V {
        &mut self.guard
    }
}

impl<V: Default + Clone> ShardedMap<V> {
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "ShardedMap requires at least one bucket");
        ShardedMap {
            buckets: (0..bucket_count).map(|_| Mutex::new(BTreeMap::new())).collect(),
        }
    }

    fn bucket_index(&self, key: DocId) -> usize {
        key.value().rem_euclid(self.buckets.len() as i64) as usize
    }

    /// Locks `key`'s bucket and returns a guarded mutable reference to its
    /// value, inserting `V::default()` first if the key is absent.
    pub fn access(&self, key: DocId) -> Access<'_, V> {
        let idx = self.bucket_index(key);
        let guard = self.buckets[idx].lock();
        let mapped = MutexGuard::map(guard, |bucket| bucket.entry(key).or_default());
        Access { guard: mapped }
    }

    /// Locks `key`'s bucket and removes the entry if present.
    pub fn erase(&self, key: DocId) {
        let idx = self.bucket_index(key);
        self.buckets[idx].lock().remove(&key);
    }

    /// Locks each bucket in turn and merges its contents into a single
    /// ordered map. Intended to be called from one thread after the
    /// parallel phase completes.
    pub fn build_ordinary_map(&self) -> BTreeMap<DocId, V> {
        let mut result = BTreeMap::new();
        for bucket in &self.buckets {
            let guard = bucket.lock();
            for (key, value) in guard.iter() {
                result.insert(*key, value.clone());
            }
        }
        result
    }
}
