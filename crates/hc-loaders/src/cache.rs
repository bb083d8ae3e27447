/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */
//! In-memory TTL cache shared by every loader key.
//!
//! Entries are namespaced by loader key so that two loaders with
//! overlapping key spaces never observe each other's values. Expiry is
//! checked lazily on read; [`CacheStore::clear_expired`] is the only active
//! eviction path.

use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Separator between the loader key and the cache key in a slot key.
const SLOT_SEPARATOR: char = '\u{1f}';

/// Derive the stable cache key for a logical key.
///
/// An explicit override wins; otherwise the key is JSON-serialized.
pub fn cache_key_for<K: Serialize>(key: &K, explicit: Option<&str>) -> serde_json::Result<String> {
  match explicit {
    Some(key) => Ok(key.to_string()),
    None => serde_json::to_string(key),
  }
}

/// Build the internal slot key for a cache key within a loader namespace.
pub fn make_slot(loader_key: &str, cache_key: &str) -> String {
  format!("{}{}{}", loader_key, SLOT_SEPARATOR, cache_key)
}

/// Result of a cache lookup
#[derive(Debug, PartialEq)]
pub enum CacheResult<T> {
  /// Entry present and within its TTL
  Hit(T),
  /// No entry for the key
  Miss,
  /// Entry existed but had outlived its TTL and was evicted
  Expired,
}

impl<T> CacheResult<T> {
  /// Returns true if this is a cache hit
  pub fn is_hit(&self) -> bool {
    matches!(self, CacheResult::Hit(_))
  }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
  value: V,
  inserted_at: Instant,
  ttl: Duration,
}

impl<V> CacheEntry<V> {
  fn is_expired(&self, now: Instant) -> bool {
    now.saturating_duration_since(self.inserted_at) > self.ttl
  }
}

/// Value cache keyed by slot key.
#[derive(Debug)]
pub struct CacheStore<V> {
  entries: HashMap<String, CacheEntry<V>>,
  default_ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
  pub fn new(default_ttl: Duration) -> Self {
    Self { entries: HashMap::new(), default_ttl }
  }

  /// Look up a slot, evicting it if it has expired.
  pub fn get(&mut self, slot: &str) -> CacheResult<V> {
    let now = Instant::now();
    match self.entries.get(slot) {
      Some(entry) if entry.is_expired(now) => {
        self.entries.remove(slot);
        CacheResult::Expired
      }
      Some(entry) => CacheResult::Hit(entry.value.clone()),
      None => CacheResult::Miss,
    }
  }

  /// Store a value, using the default TTL unless one is given.
  pub fn insert(&mut self, slot: String, value: V, ttl: Option<Duration>) {
    let entry =
      CacheEntry { value, inserted_at: Instant::now(), ttl: ttl.unwrap_or(self.default_ttl) };
    self.entries.insert(slot, entry);
  }

  /// Evict every entry older than its TTL and return how many were removed.
  pub fn clear_expired(&mut self) -> usize {
    let now = Instant::now();
    let before = self.entries.len();
    self.entries.retain(|_, entry| !entry.is_expired(now));
    before - self.entries.len()
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Number of entries stored under a loader key (expired ones included).
  pub fn len_for_loader(&self, loader_key: &str) -> usize {
    let prefix = make_slot(loader_key, "");
    self.entries.keys().filter(|slot| slot.starts_with(&prefix)).count()
  }
}
