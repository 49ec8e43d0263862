//! Time-bounded memoization for accessor reads.
//!
//! Each accessor keeps one cache per operation, keyed by the operation's
//! argument tuple. Entries expire after the TTL and are never invalidated
//! otherwise: the data set is written once at startup.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub struct TtlCache<K, V> {
    ttl: Duration,
    /// `None` expiry means the TTL overflowed `Instant`; the entry never expires
    entries: Mutex<HashMap<K, (V, Option<Instant>)>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the live entry for `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .get(key)
            .filter(|(_, expires_at)| is_live(*expires_at))
            .map(|(value, _)| value.clone())
    }

    pub fn insert(&self, key: K, value: V) {
        let expires_at = Instant::now().checked_add(self.ttl);
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(|_, (_, exp)| is_live(*exp));
        entries.insert(key, (value, expires_at));
    }

    /// Serve `key` from the cache or compute, store and return it.
    ///
    /// Errors are not cached. The lock is not held while `f` runs.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, f: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }
        let value = f()?;
        self.insert(key, value.clone());
        Ok(value)
    }

    /// Infallible variant of [`get_or_try_insert_with`](Self::get_or_try_insert_with).
    pub fn get_or_insert_with<F>(&self, key: K, f: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self.get_or_try_insert_with::<std::convert::Infallible, _>(key, || Ok(f())) {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.values().filter(|(_, exp)| is_live(*exp)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_live(expires_at: Option<Instant>) -> bool {
    expires_at.map_or(true, |at| Instant::now() < at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_hit_within_window() {
        let cache: TtlCache<(String, u32), Vec<u32>> = TtlCache::new(Duration::from_secs(60));
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            vec![1, 2, 3]
        };

        let first = cache.get_or_insert_with(("players".into(), 1), compute);
        let second = cache.get_or_insert_with(("players".into(), 1), compute);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let cache: TtlCache<Option<i64>, usize> = TtlCache::new(Duration::from_secs(60));
        assert_eq!(cache.get_or_insert_with(None, || 15), 15);
        assert_eq!(cache.get_or_insert_with(Some(1), || 3), 3);
        assert_eq!(cache.get(&None), Some(15));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_zero_ttl_never_hits() {
        let cache: TtlCache<u8, u8> = TtlCache::new(Duration::ZERO);
        cache.insert(1, 10);
        assert_eq!(cache.get(&1), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache: TtlCache<u8, u8> = TtlCache::new(Duration::from_secs(60));
        let failed: Result<u8, &str> = cache.get_or_try_insert_with(1, || Err("offline"));
        assert!(failed.is_err());
        let ok: Result<u8, &str> = cache.get_or_try_insert_with(1, || Ok(7));
        assert_eq!(ok, Ok(7));
    }

    #[test]
    fn test_huge_ttl_never_expires() {
        let cache: TtlCache<u8, u8> = TtlCache::new(Duration::from_secs(u64::MAX));
        assert_eq!(cache.get_or_insert_with(1, || 10), 10);
        assert_eq!(cache.get(&1), Some(10));
        assert_eq!(cache.len(), 1);
    }
}
