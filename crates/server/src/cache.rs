//! Day-scoped cache.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;
use time::Date;

/// A keyed cache whose entries are valid for one calendar day.
///
/// The whole map is cleared the first time an operation arrives with a
/// different "current day" than the one the cache was last written for. The
/// current day is an explicit argument on every operation, so callers own
/// the clock and tests can drive rollover directly.
pub struct DayCache<K, V> {
    inner: Mutex<DayCacheInner<K, V>>,
}

struct DayCacheInner<K, V> {
    day: Option<Date>,
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V: Clone> DayCache<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(DayCacheInner {
                day: None,
                entries: HashMap::new(),
            }),
        }
    }

    /// Look up a cached value for `key`, valid on `today`.
    pub fn get(&self, today: Date, key: &K) -> Option<V> {
        let mut inner = self.lock();
        if inner.day != Some(today) {
            inner.entries.clear();
            inner.day = Some(today);
            return None;
        }
        inner.entries.get(key).cloned()
    }

    /// Store a value for `key`, valid on `today`.
    pub fn insert(&self, today: Date, key: K, value: V) {
        let mut inner = self.lock();
        if inner.day != Some(today) {
            inner.entries.clear();
            inner.day = Some(today);
        }
        inner.entries.insert(key, value);
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DayCacheInner<K, V>> {
        // A poisoned map only ever holds cached values; recover it.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<K: Eq + Hash, V: Clone> Default for DayCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
