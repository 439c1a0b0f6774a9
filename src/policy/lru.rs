//! # Least Recently Used (LRU) Cache Implementation
//!
//! Fixed-capacity key/value cache that evicts the least recently used entry
//! when a new key arrives and the cache is full. Capacity counts entries, not
//! bytes.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                          LruCache<K, V>                                  │
//!   │                                                                          │
//!   │   ┌────────────────────────────────────────────────────────────────────┐ │
//!   │   │                    Arc<RwLock<LruCore<K, V>>>                      │ │
//!   │   └────────────────────────────────────────────────────────────────────┘ │
//!   │                                  │                                       │
//!   │                                  ▼                                       │
//!   │   ┌────────────────────────────────────────────────────────────────────┐ │
//!   │   │                         LruCore<K, V>                              │ │
//!   │   │                                                                    │ │
//!   │   │   ┌──────────────────────────────────────────────────────────────┐ │ │
//!   │   │   │  FxHashMap<K, SlotId>  (index, non-owning handles)           │ │ │
//!   │   │   │                                                              │ │ │
//!   │   │   │  ┌─────────┬────────────────────────────────────────────┐    │ │ │
//!   │   │   │  │   Key   │  SlotId                                    │    │ │ │
//!   │   │   │  ├─────────┼────────────────────────────────────────────┤    │ │ │
//!   │   │   │  │ order_1 │  ────────────────────────────────────────┐ │    │ │ │
//!   │   │   │  │ order_2 │  ──────────────────────────────────┐     │ │    │ │ │
//!   │   │   │  │ order_3 │  ────────────────────────────┐     │     │ │    │ │ │
//!   │   │   │  └─────────┴──────────────────────────────┼─────┼─────┼─┘    │ │ │
//!   │   │   └───────────────────────────────────────────┼─────┼─────┼──────┘ │ │
//!   │   │                                               │     │     │        │ │
//!   │   │   ┌───────────────────────────────────────────┼─────┼─────┼──────┐ │ │
//!   │   │   │  IntrusiveList<Entry<K, V>> (owns entries) ▼     ▼     ▼     │ │ │
//!   │   │   │                                                              │ │ │
//!   │   │   │  [root] ◄──► [id_3] ◄──► [id_2] ◄──► [id_1] ◄──► [root]      │ │ │
//!   │   │   │               MRU                      LRU                   │ │ │
//!   │   │   └──────────────────────────────────────────────────────────────┘ │ │
//!   │   └────────────────────────────────────────────────────────────────────┘ │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The list owns every entry; the index only stores `SlotId` handles into it.
//! Both live behind the same lock, so no other thread can observe a key that
//! is indexed but not listed, or the reverse.
//!
//! ## Key Components
//!
//! | Component          | Description                                        |
//! |--------------------|----------------------------------------------------|
//! | `LruCore<K, V>`    | Single-threaded core: recency list + index         |
//! | `LruCache<K, V>`   | Thread-safe wrapper with `parking_lot::RwLock`     |
//! | `Entry<K, V>`      | List payload: key + `Arc<V>`                       |
//! | `Iter<'_, K, V>`   | MRU-first iterator holding the read lock           |
//!
//! ## LRU Operations Flow
//!
//! ```text
//!   PUT new key (cache full)
//!   ═══════════════════════════════════════════════════════════════════════════
//!
//!   Before:
//!     root ──► [A] ◄──► [B] ◄──► [C] ◄── root    (capacity = 3)
//!              MRU                LRU
//!
//!   put(D):
//!     1. Take node [C] from the back
//!     2. Unindex C, overwrite the node's entry with D, index D
//!     3. Move the node to the front (no allocation, slot reused)
//!
//!   After:
//!     root ──► [D] ◄──► [A] ◄──► [B] ◄── root
//!
//!   ═══════════════════════════════════════════════════════════════════════════
//!
//!   GET existing key
//!   ═══════════════════════════════════════════════════════════════════════════
//!
//!   get(B):
//!     1. Find B's SlotId in the index: O(1)
//!     2. Relink the node after root: O(1)
//!
//!   After:
//!     root ──► [B] ◄──► [A] ◄──► [C] ◄── root
//! ```
//!
//! ## LruCache Methods
//!
//! | Method               | Lock Type | Description                          |
//! |----------------------|-----------|--------------------------------------|
//! | `new(capacity)`      | None      | Create cache, panics on 0            |
//! | `try_new(capacity)`  | None      | Create cache, `ConfigError` on 0     |
//! | `put(k, v)`          | Write     | Insert/update, may evict LRU         |
//! | `get(&k)`            | Write     | Get + move to MRU                    |
//! | `get_or_default(&k)` | Write     | Like `get`, miss yields the default  |
//! | `peek(&k)`           | Read      | Get without reordering               |
//! | `contains(&k)`       | Read      | Check key existence                  |
//! | `remove(&k)`         | Write     | Remove entry                         |
//! | `pop_lru()`          | Write     | Remove the LRU entry                 |
//! | `peek_lru()`         | Read      | Look at the LRU entry                |
//! | `recency_rank(&k)`   | Read      | Position from MRU (O(n))             |
//! | `size()` / `len()`   | Read      | Current entry count                  |
//! | `iter()`             | Read      | MRU-first traversal (lock held)      |
//! | `clear()`            | Write     | Remove all entries                   |
//!
//! ## Concurrency Model
//!
//! ```text
//!   Thread 1           Thread 2           Thread 3
//!      │                  │                  │
//!      │ get(order_1)     │ put(order_2)     │ iter()
//!      ▼                  ▼                  ▼
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                     RwLock                               │
//!   │                                                          │
//!   │  get() requires WRITE lock (moves node to front)         │
//!   │  put()/remove()/clear() require WRITE lock               │
//!   │  size()/peek()/iter() take the READ lock                 │
//!   └──────────────────────────────────────────────────────────┘
//! ```
//!
//! An [`Iter`] keeps the read lock until it is dropped. Calling a
//! write-locking method on the same cache from the thread that holds the
//! iterator deadlocks.
//!
//! ## Example Usage
//!
//! ```
//! use ringcache::policy::lru::LruCache;
//!
//! let cache: LruCache<&str, u32> = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get("a").as_deref(), Some(&1));
//!
//! cache.put("c", 3); // evicts "b"
//! assert!(cache.get("b").is_none());
//!
//! let keys: Vec<_> = cache.iter().map(|(k, _)| k).collect();
//! assert_eq!(keys, vec!["c", "a"]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ds::{IntrusiveList, SlotId};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::{
    CoreMetricsRecorder, LruMetrics, LruMetricsSnapshot, MetricsReset, MetricsSnapshotProvider,
};
use crate::traits::SharedCache;

/// Upper bound on the storage reserved up front; larger caches grow on demand.
const PREALLOC_LIMIT: usize = 1024;

/// List payload: the key is kept next to the value so eviction can unindex it.
struct Entry<K, V> {
    key: K,
    value: Arc<V>,
}

/// Single-threaded LRU core: recency list plus key index.
///
/// Every public operation keeps the index and the list in 1:1
/// correspondence. Thread safety is provided by [`LruCache`].
pub struct LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    list: IntrusiveList<Entry<K, V>>,
    index: FxHashMap<K, SlotId>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a core holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) for
    /// user-supplied capacities.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(core) => core,
            Err(err) => panic!("LruCore::new: {err}"),
        }
    }

    /// Creates a core, rejecting a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::zero_capacity());
        }
        let reserve = capacity.min(PREALLOC_LIMIT);
        Ok(LruCore {
            list: IntrusiveList::with_capacity(reserve),
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Inserts or updates `key`, leaving it at the MRU position.
    ///
    /// When `key` is new and the cache is full, the LRU entry is dropped and
    /// its list node is reused for the new entry.
    pub fn put(&mut self, key: K, value: Arc<V>) {
        #[cfg(feature = "metrics")]
        self.metrics.record_put_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_put_update();

            match self.list.get_mut(id) {
                Some(entry) => entry.value = value,
                None => panic!("lru index points at a node missing from the list"),
            }
            self.list.move_to_front(id);
            return;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_put_new();

        if self.list.len() >= self.capacity {
            self.recycle_back(key, value);
        } else {
            let id = self.list.push_front(Entry {
                key: key.clone(),
                value,
            });
            self.index.insert(key, id);
        }

        debug_assert_eq!(self.index.len(), self.list.len());
    }

    fn recycle_back(&mut self, key: K, value: Arc<V>) {
        let id = match self.list.back() {
            Some(id) => id,
            None => unreachable!("full cache with an empty recency list"),
        };
        let evicted = self.list.put_new_value(
            id,
            Entry {
                key: key.clone(),
                value,
            },
        );
        if self.index.remove(&evicted.key) != Some(id) {
            panic!("evicted lru node was not indexed under its own key");
        }
        self.index.insert(key, id);
        self.list.move_to_front(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();
        trace!(capacity = self.capacity, "evicted least recently used entry");
    }

    /// Returns the value for `key` and moves it to the MRU position.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Returns the value for `key` without touching recency order.
    pub fn peek<Q>(&self, key: &Q) -> Option<&Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &id = self.index.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Removes `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.index.remove(key)?;
        let entry = self.list.remove(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_removal();

        Some(entry.value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, Arc<V>)> {
        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();

        Some((entry.key, entry.value))
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &Arc<V>)> {
        self.list
            .back_value()
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the position of `key` counted from the MRU end (0 = MRU). O(n).
    pub fn recency_rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &target = self.index.get(key)?;
        self.list.iter_ids().position(|id| id == target)
    }

    /// Iterates `(key, value)` pairs from MRU to LRU.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Arc<V>)> + '_ {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.list.clear();
        self.index.clear();
    }

    /// Verifies that the index and the recency list agree. O(n).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but the list holds {} nodes",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.list.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.list.len(),
                self.capacity
            )));
        }

        let mut reachable = 0usize;
        for (id, entry) in self.list.iter_entries() {
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == id => {},
                Some(_) => {
                    return Err(InvariantError::new(
                        "index maps a listed key to a different node",
                    ));
                },
                None => return Err(InvariantError::new("listed key is missing from the index")),
            }
            reachable += 1;
        }
        if reachable != self.list.len() {
            return Err(InvariantError::new(format!(
                "only {} of {} nodes are reachable from the root",
                reachable,
                self.list.len()
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        if let Err(err) = self.check_invariants() {
            panic!("lru invariant violated: {err}");
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            put_calls: self.metrics.put_calls,
            put_updates: self.metrics.put_updates,
            put_new: self.metrics.put_new,
            evicted_entries: self.metrics.evicted_entries,
            removals: self.metrics.removals,
            clears: self.metrics.clears,
            cache_len: self.list.len(),
            capacity: self.capacity,
        }
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

impl<K, V> fmt::Debug for LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCore")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

/// Thread-safe LRU cache: one `RwLock` around an [`LruCore`].
///
/// Cloning is cheap and yields another handle to the same cache.
pub struct LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    inner: Arc<RwLock<LruCore<K, V>>>,
    default_value: Option<Arc<V>>,
}

impl<K, V> Clone for LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            default_value: self.default_value.clone(),
        }
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("LruCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .field("has_default", &self.default_value.is_some())
            .finish_non_exhaustive()
    }
}

impl<K, V> LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a thread-safe cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use ringcache::policy::lru::LruCache;
    ///
    /// let cache: LruCache<u32, String> = LruCache::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::from_parts(LruCore::new(capacity), None)
    }

    /// Fallible constructor for user-supplied capacities.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(LruCore::try_new(capacity)?, None))
    }

    /// Creates a cache whose [`get_or_default`](Self::get_or_default) returns
    /// `default` on a miss.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_default(capacity: usize, default: V) -> Self {
        Self::from_parts(LruCore::new(capacity), Some(Arc::new(default)))
    }

    pub(crate) fn from_parts(core: LruCore<K, V>, default_value: Option<Arc<V>>) -> Self {
        debug!(
            capacity = core.capacity(),
            has_default = default_value.is_some(),
            "lru cache created"
        );
        LruCache {
            inner: Arc::new(RwLock::new(core)),
            default_value,
        }
    }

    /// Inserts or updates `key`, wrapping `value` in an `Arc`.
    ///
    /// # Example
    ///
    /// ```
    /// use ringcache::policy::lru::LruCache;
    ///
    /// let cache: LruCache<u32, &str> = LruCache::new(2);
    /// cache.put(1, "a");
    /// cache.put(1, "b");
    /// assert_eq!(cache.size(), 1);
    /// assert_eq!(*cache.get(&1).unwrap(), "b");
    /// ```
    pub fn put(&self, key: K, value: V) {
        let value = Arc::new(value);
        self.inner.write().put(key, value);
    }

    /// Inserts an already shared value.
    pub fn put_arc(&self, key: K, value: Arc<V>) {
        self.inner.write().put(key, value);
    }

    /// Returns the value for `key`, moving it to the MRU position.
    ///
    /// Takes the write lock: a lookup reorders the recency list.
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut cache = self.inner.write();
        cache.get(key).map(Arc::clone)
    }

    /// Like [`get`](Self::get), but a miss yields the configured default.
    ///
    /// A cached value equal to the default cannot be told apart from a miss
    /// through this method; use `get` when that matters.
    ///
    /// # Example
    ///
    /// ```
    /// use ringcache::policy::lru::LruCache;
    ///
    /// let cache: LruCache<&str, i32> = LruCache::with_default(3, -1);
    /// cache.put("a", 1);
    /// assert_eq!(cache.get_or_default("a").as_deref(), Some(&1));
    /// assert_eq!(cache.get_or_default("zzz").as_deref(), Some(&-1));
    /// ```
    pub fn get_or_default<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).or_else(|| self.default_value.clone())
    }

    /// Returns the configured miss value, if any.
    pub fn default_value(&self) -> Option<&Arc<V>> {
        self.default_value.as_ref()
    }

    /// Returns the value for `key` without reordering. Read lock only.
    pub fn peek<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let cache = self.inner.read();
        cache.peek(key).map(Arc::clone)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains(key)
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().remove(key)
    }

    pub fn pop_lru(&self) -> Option<(K, Arc<V>)> {
        self.inner.write().pop_lru()
    }

    pub fn peek_lru(&self) -> Option<(K, Arc<V>)> {
        let cache = self.inner.read();
        cache
            .peek_lru()
            .map(|(key, value)| (key.clone(), Arc::clone(value)))
    }

    pub fn recency_rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().recency_rank(key)
    }

    /// Current number of entries.
    pub fn size(&self) -> usize {
        self.inner.read().len()
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Iterates `(key, value)` pairs from MRU to LRU.
    ///
    /// The read lock is held until the iterator is dropped; writers block for
    /// that long. Each call starts again from the current MRU entry.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let guard = self.inner.read();
        let cursor = guard.list.front();
        Iter { guard, cursor }
    }

    /// Snapshot of the keys in MRU-to-LRU order.
    pub fn keys(&self) -> Vec<K> {
        self.inner.read().iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.read().check_invariants()
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        self.inner.read().metrics_snapshot()
    }

    pub fn reset_metrics(&self) {
        self.inner.write().reset_metrics();
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> SharedCache<K, V> for LruCache<K, V>
where
    K: Clone + Eq + Hash + Send + Sync,
    V: Send + Sync,
{
    fn put(&self, key: K, value: V) {
        LruCache::put(self, key, value);
    }

    fn put_arc(&self, key: K, value: Arc<V>) {
        LruCache::put_arc(self, key, value);
    }

    fn get(&self, key: &K) -> Option<Arc<V>> {
        LruCache::get(self, key)
    }

    fn size(&self) -> usize {
        LruCache::size(self)
    }

    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }
}

/// MRU-first iterator over an [`LruCache`], holding its read lock.
pub struct Iter<'a, K, V>
where
    K: Clone + Eq + Hash,
{
    guard: RwLockReadGuard<'a, LruCore<K, V>>,
    cursor: Option<SlotId>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Clone + Eq + Hash,
{
    type Item = (K, Arc<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let entry = self.guard.list.get(id)?;
        let item = (entry.key.clone(), Arc::clone(&entry.value));
        self.cursor = self.guard.list.next_id(id);
        Some(item)
    }
}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    type Item = (K, Arc<V>);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
