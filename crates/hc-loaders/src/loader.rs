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
//! Base traits, configuration and options for batched loading

use crate::{BatchLoader, LoaderResult, QueryPerformanceMonitor, RelationshipPreloader};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for a [`BatchLoader`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLoaderConfig {
  /// Coalescing window, measured from the last key added to a batch
  pub batch_timeout: Duration,

  /// Maximum number of keys handed to a fetcher in one call
  pub max_batch_size: usize,

  /// Default cache entry lifetime
  pub cache_expiry: Duration,

  /// Batches slower than this are logged as slow
  pub slow_batch_threshold: Duration,

  /// How long a duplicate request waits on the in-flight one
  pub dedup_wait: Duration,
}

impl Default for BatchLoaderConfig {
  fn default() -> Self {
    let batch_timeout = Duration::from_millis(hc_core::DEFAULT_BATCH_TIMEOUT_MS);
    Self {
      batch_timeout,
      max_batch_size: hc_core::DEFAULT_MAX_BATCH_SIZE,
      cache_expiry: Duration::from_millis(hc_core::DEFAULT_CACHE_TTL_MS),
      slow_batch_threshold: Duration::from_millis(hc_core::DEFAULT_SLOW_BATCH_MS),
      dedup_wait: dedup_wait(batch_timeout, hc_core::DEFAULT_DEDUP_WAIT_FACTOR),
    }
  }
}

impl BatchLoaderConfig {
  /// Builder: set the coalescing window
  pub fn with_batch_timeout(mut self, timeout: Duration) -> Self {
    self.batch_timeout = timeout;
    self
  }

  /// Builder: set the maximum batch size (clamped to at least one key)
  pub fn with_max_batch_size(mut self, size: usize) -> Self {
    self.max_batch_size = size.max(1);
    self
  }

  /// Builder: set the default cache TTL
  pub fn with_cache_expiry(mut self, expiry: Duration) -> Self {
    self.cache_expiry = expiry;
    self
  }

  /// Builder: set the slow batch threshold
  pub fn with_slow_batch_threshold(mut self, threshold: Duration) -> Self {
    self.slow_batch_threshold = threshold;
    self
  }

  /// Builder: set the duplicate-request wait bound
  pub fn with_dedup_wait(mut self, wait: Duration) -> Self {
    self.dedup_wait = wait;
    self
  }
}

impl From<&hc_core::Config> for BatchLoaderConfig {
  fn from(config: &hc_core::Config) -> Self {
    let batch_timeout = Duration::from_millis(config.batch_timeout_ms);
    Self {
      batch_timeout,
      max_batch_size: config.max_batch_size.max(1),
      cache_expiry: Duration::from_millis(config.cache_ttl_ms),
      slow_batch_threshold: Duration::from_millis(config.slow_batch_ms),
      dedup_wait: dedup_wait(batch_timeout, config.dedup_wait_factor),
    }
  }
}

/// Duplicate-request wait bound, saturating instead of overflowing
fn dedup_wait(batch_timeout: Duration, factor: u32) -> Duration {
  batch_timeout.checked_mul(factor).unwrap_or(Duration::MAX)
}

/// Scheduling priority of a single load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
  Low,
  #[default]
  Normal,
  /// Goes to the front of the batch and triggers immediate execution
  High,
}

/// Per-request options for [`BatchLoader::load`]
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
  /// Overrides the JSON-serialized cache key
  pub cache_key: Option<String>,
  /// Overrides the loader's default cache TTL
  pub ttl: Option<Duration>,
  pub priority: Priority,
  /// Namespaces the loader key
  pub relationship_type: Option<String>,
}

impl LoadOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_cache_key(mut self, key: impl Into<String>) -> Self {
    self.cache_key = Some(key.into());
    self
  }

  pub fn with_ttl(mut self, ttl: Duration) -> Self {
    self.ttl = Some(ttl);
    self
  }

  pub fn with_priority(mut self, priority: Priority) -> Self {
    self.priority = priority;
    self
  }

  pub fn with_relationship_type(mut self, relationship_type: impl Into<String>) -> Self {
    self.relationship_type = Some(relationship_type.into());
    self
  }
}

/// Options for [`BatchLoader::preload`] and [`BatchLoader::warm_cache`]
#[derive(Debug, Clone)]
pub struct PreloadOptions {
  /// Chunk size; defaults to the loader's maximum batch size
  pub batch_size: Option<usize>,
  pub priority: Priority,
  pub ttl: Option<Duration>,
  pub relationship_type: Option<String>,
}

impl Default for PreloadOptions {
  fn default() -> Self {
    Self { batch_size: None, priority: Priority::High, ttl: None, relationship_type: None }
  }
}

impl PreloadOptions {
  pub fn with_batch_size(mut self, size: usize) -> Self {
    self.batch_size = Some(size.max(1));
    self
  }

  pub fn with_priority(mut self, priority: Priority) -> Self {
    self.priority = priority;
    self
  }

  pub fn with_ttl(mut self, ttl: Duration) -> Self {
    self.ttl = Some(ttl);
    self
  }

  pub fn with_relationship_type(mut self, relationship_type: impl Into<String>) -> Self {
    self.relationship_type = Some(relationship_type.into());
    self
  }

  pub(crate) fn load_options(&self) -> LoadOptions {
    LoadOptions {
      cache_key: None,
      ttl: self.ttl,
      priority: self.priority,
      relationship_type: self.relationship_type.clone(),
    }
  }
}

/// Options for [`BatchLoader::load_many`]
#[derive(Debug, Clone, Default)]
pub struct LoadManyOptions {
  /// Return an empty result instead of an error when the fetch fails
  pub allow_partial: bool,
  pub ttl: Option<Duration>,
  pub relationship_type: Option<String>,
}

impl LoadManyOptions {
  pub fn with_allow_partial(mut self, allow: bool) -> Self {
    self.allow_partial = allow;
    self
  }

  pub fn with_ttl(mut self, ttl: Duration) -> Self {
    self.ttl = Some(ttl);
    self
  }

  pub fn with_relationship_type(mut self, relationship_type: impl Into<String>) -> Self {
    self.relationship_type = Some(relationship_type.into());
    self
  }
}

/// Key type bound for everything the loader batches
pub trait LoadKey: Serialize + Clone + Send + Sync + 'static {}

impl<T> LoadKey for T where T: Serialize + Clone + Send + Sync + 'static {}

/// Value type bound for everything the loader caches
pub trait LoadValue: Clone + Send + Sync + 'static {}

impl<T> LoadValue for T where T: Clone + Send + Sync + 'static {}

/// The external key-by-key fetch function a [`BatchLoader`] sits in front of.
///
/// Implementations typically run one `IN (...)` query or one bulk API call.
#[async_trait]
pub trait BatchFetch<K, V>: Send + Sync {
  /// Fetch values for an ordered set of keys
  async fn fetch(&self, keys: &[K]) -> LoaderResult<Vec<V>>;

  /// Identity of this fetcher; requests are grouped into batches by it
  fn name(&self) -> &str;

  /// Re-derive the key a result belongs to.
  ///
  /// When `None`, results are matched to requested keys by position.
  fn key_of(&self, _value: &V) -> Option<K> {
    None
  }
}

/// Loader key for a fetcher name and optional relationship namespace
pub fn loader_key(name: &str, relationship_type: Option<&str>) -> String {
  match relationship_type {
    Some(rel) if !rel.is_empty() => format!("{}:{}", name, rel),
    _ => name.to_string(),
  }
}

/// Shared context constructed once at start-up and handed to consumers
#[derive(Clone)]
pub struct LoaderContext<K, V> {
  pub loader: BatchLoader<K, V>,
  pub preloader: RelationshipPreloader<K, V>,
  pub monitor: Arc<QueryPerformanceMonitor>,
}

impl<K: LoadKey, V: LoadValue> LoaderContext<K, V> {
  pub fn new(config: BatchLoaderConfig) -> Self {
    let loader = BatchLoader::new(config);
    let preloader = RelationshipPreloader::new(loader.clone());
    Self { loader, preloader, monitor: Arc::new(QueryPerformanceMonitor::default()) }
  }

  pub fn from_config(config: &hc_core::Config) -> Self {
    Self::new(BatchLoaderConfig::from(config))
  }
}
