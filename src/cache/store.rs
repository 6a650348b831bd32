//! Cache store trait and in-memory implementation.

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Source of the current time, injectable so expiry is testable.
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// Trait for cache store backends.
///
/// Reads and writes never fail and never touch I/O: an expired, missing or
/// unreadable entry is simply a miss. Only a repository's remote fetch path
/// can fail.
pub trait CacheStore: Send + Sync {
  /// Returns the stored value if present and not expired. Expired entries
  /// are evicted as a side effect.
  fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T>;

  /// Inserts or overwrites. A `ttl` of `None` uses the store default.
  fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>);

  /// Removes a single entry.
  fn remove(&self, key: &str);

  /// Clears every entry unconditionally.
  fn remove_all(&self);
}

/// Store implementation that doesn't cache anything.
/// Used when caching is disabled - all operations are no-ops.
pub struct NoopCache;

impl CacheStore for NoopCache {
  fn get<T: DeserializeOwned>(&self, _key: &str) -> Option<T> {
    None // Always miss
  }

  fn set<T: Serialize>(&self, _key: &str, _value: &T, _ttl: Option<Duration>) {
    // Discard
  }

  fn remove(&self, _key: &str) {}

  fn remove_all(&self) {}
}

struct Entry {
  value: Value,
  expires_at: DateTime<Utc>,
  last_used: u64,
}

struct Inner {
  entries: HashMap<String, Entry>,
  /// Monotonic access counter backing the least-recently-used ordering.
  tick: u64,
}

/// Process-lifetime in-memory cache with per-entry TTL.
///
/// Values of any serializable shape share one store; a read that cannot be
/// deserialized as the requested type counts as a miss and evicts the entry.
/// With a capacity bound configured, inserts beyond the bound evict the
/// least-recently-used entries. All operations are safe under concurrent
/// callers; the internal lock is only ever held for map access.
pub struct InMemoryCache {
  inner: Mutex<Inner>,
  default_ttl: Duration,
  capacity: Option<usize>,
  clock: Box<dyn Clock>,
}

impl InMemoryCache {
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(Inner {
        entries: HashMap::new(),
        tick: 0,
      }),
      default_ttl: Duration::hours(12),
      capacity: None,
      clock: Box::new(SystemClock),
    }
  }

  /// Set the TTL applied when `set` is called without an explicit one.
  pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
    self.default_ttl = ttl;
    self
  }

  /// Bound the number of entries; inserts beyond the bound evict the
  /// least-recently-used entries.
  pub fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = Some(capacity);
    self
  }

  /// Replace the time source.
  pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
    self.clock = Box::new(clock);
    self
  }

  fn lock(&self) -> MutexGuard<'_, Inner> {
    // Entries are always written whole, so the map is usable even if another
    // thread panicked while holding the lock.
    self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl Default for InMemoryCache {
  fn default() -> Self {
    Self::new()
  }
}

impl CacheStore for InMemoryCache {
  fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
    let now = self.clock.now();
    let mut inner = self.lock();

    let expired = match inner.entries.get(key) {
      None => {
        debug!(key, "cache miss");
        return None;
      }
      Some(entry) => now > entry.expires_at,
    };

    if expired {
      inner.entries.remove(key);
      debug!(key, "cache expired");
      return None;
    }

    inner.tick += 1;
    let tick = inner.tick;
    let entry = inner.entries.get_mut(key)?;
    entry.last_used = tick;
    let value = entry.value.clone();
    drop(inner);

    match serde_json::from_value(value) {
      Ok(decoded) => {
        debug!(key, "cache hit");
        Some(decoded)
      }
      Err(error) => {
        // Stored shape doesn't match the requested type: fail closed.
        debug!(key, %error, "cache entry unreadable, evicting");
        self.remove(key);
        None
      }
    }
  }

  fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) {
    let value = match serde_json::to_value(value) {
      Ok(value) => value,
      Err(error) => {
        debug!(key, %error, "value not serializable, not cached");
        return;
      }
    };

    let expires_at = self.clock.now() + ttl.unwrap_or(self.default_ttl);

    let mut inner = self.lock();
    inner.tick += 1;
    let tick = inner.tick;
    inner.entries.insert(
      key.to_string(),
      Entry {
        value,
        expires_at,
        last_used: tick,
      },
    );
    debug!(key, "cache set");

    if let Some(capacity) = self.capacity {
      while inner.entries.len() > capacity {
        let oldest = inner
          .entries
          .iter()
          .min_by_key(|(_, entry)| entry.last_used)
          .map(|(key, _)| key.clone());

        match oldest {
          Some(evicted) => {
            inner.entries.remove(&evicted);
            debug!(key = %evicted, "cache evicted over capacity");
          }
          None => break,
        }
      }
    }
  }

  fn remove(&self, key: &str) {
    self.lock().entries.remove(key);
    debug!(key, "cache removed");
  }

  fn remove_all(&self) {
    self.lock().entries.clear();
    debug!("cache cleared");
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use serde::Deserialize;
  use std::sync::Arc;

  #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
  struct Payload {
    name: String,
    count: u32,
  }

  fn payload(name: &str) -> Payload {
    Payload {
      name: name.to_string(),
      count: 7,
    }
  }

  /// Clock that only moves when told to.
  #[derive(Clone)]
  struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
  }

  impl FixedClock {
    fn new() -> Self {
      Self {
        now: Arc::new(Mutex::new(Utc.with_ymd_and_hms(2021, 5, 1, 12, 0, 0).unwrap())),
      }
    }

    fn advance(&self, by: Duration) {
      *self.now.lock().unwrap() += by;
    }
  }

  impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
      *self.now.lock().unwrap()
    }
  }

  #[test]
  fn set_then_get_returns_the_value() {
    let cache = InMemoryCache::new();

    cache.set("key", &payload("fresh"), None);

    assert_eq!(cache.get::<Payload>("key"), Some(payload("fresh")));
  }

  #[test]
  fn get_on_missing_key_is_a_miss() {
    let cache = InMemoryCache::new();

    assert_eq!(cache.get::<Payload>("absent"), None);
  }

  #[test]
  fn entry_expires_after_its_ttl() {
    let clock = FixedClock::new();
    let cache = InMemoryCache::new().with_clock(clock.clone());

    cache.set("key", &payload("stale"), Some(Duration::minutes(5)));
    assert!(cache.get::<Payload>("key").is_some());

    clock.advance(Duration::minutes(6));
    assert_eq!(cache.get::<Payload>("key"), None);
    // The expired entry was evicted, not merely hidden.
    assert_eq!(cache.get::<Payload>("key"), None);
  }

  #[test]
  fn default_ttl_applies_when_none_is_given() {
    let clock = FixedClock::new();
    let cache = InMemoryCache::new().with_clock(clock.clone());

    cache.set("key", &payload("half-day"), None);

    clock.advance(Duration::hours(11));
    assert!(cache.get::<Payload>("key").is_some());

    clock.advance(Duration::hours(2));
    assert_eq!(cache.get::<Payload>("key"), None);
  }

  #[test]
  fn overwrite_replaces_the_value() {
    let cache = InMemoryCache::new();

    cache.set("key", &payload("first"), None);
    cache.set("key", &payload("second"), None);

    assert_eq!(cache.get::<Payload>("key"), Some(payload("second")));
  }

  #[test]
  fn remove_deletes_a_single_entry() {
    let cache = InMemoryCache::new();

    cache.set("keep", &payload("keep"), None);
    cache.set("drop", &payload("drop"), None);
    cache.remove("drop");

    assert_eq!(cache.get::<Payload>("drop"), None);
    assert!(cache.get::<Payload>("keep").is_some());
  }

  #[test]
  fn remove_all_clears_every_entry() {
    let cache = InMemoryCache::new();
    let keys = ["a", "b", "c", "d"];

    for key in keys {
      cache.set(key, &payload(key), None);
    }
    cache.remove_all();

    for key in keys {
      assert_eq!(cache.get::<Payload>(key), None);
    }
  }

  #[test]
  fn type_mismatch_reads_fail_closed() {
    let cache = InMemoryCache::new();

    cache.set("key", &payload("typed"), None);

    assert_eq!(cache.get::<u32>("key"), None);
    // The mismatching entry was evicted entirely.
    assert_eq!(cache.get::<Payload>("key"), None);
  }

  #[test]
  fn capacity_bound_evicts_least_recently_used() {
    let cache = InMemoryCache::new().with_capacity(2);

    cache.set("a", &payload("a"), None);
    cache.set("b", &payload("b"), None);
    // Touch "a" so "b" becomes the least recently used.
    assert!(cache.get::<Payload>("a").is_some());
    cache.set("c", &payload("c"), None);

    assert_eq!(cache.get::<Payload>("b"), None);
    assert!(cache.get::<Payload>("a").is_some());
    assert!(cache.get::<Payload>("c").is_some());
  }

  #[test]
  fn noop_cache_never_stores() {
    let cache = NoopCache;

    cache.set("key", &payload("ignored"), None);

    assert_eq!(cache.get::<Payload>("key"), None);
  }
}
