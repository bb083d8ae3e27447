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
//! Coalescing, deduplicating key loader.
//!
//! Requests for individual keys that arrive within a short window are
//! grouped per loader key and handed to the fetcher in a single call.
//! Results land in a shared TTL cache; concurrent requests for the same key
//! share one in-flight fetch.
//!
//! ```rust,ignore
//! use hc_loaders::{BatchLoader, BatchLoaderConfig, LoadOptions};
//!
//! let loader = BatchLoader::new(BatchLoaderConfig::default());
//! let author = loader.load(post.author_id, users.clone(), LoadOptions::new()).await?;
//! ```

use futures::future::join_all;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::batching::{create_batches, Batch, PendingKey};
use crate::cache::{cache_key_for, make_slot, CacheResult, CacheStore};
use crate::loader::{
  loader_key, BatchFetch, BatchLoaderConfig, LoadKey, LoadManyOptions, LoadOptions, LoadValue,
  PreloadOptions, Priority,
};
use crate::metrics::{LoaderMetrics, PerformanceSnapshot};
use crate::{LoaderError, LoaderResult};

/// Shared fetcher handle accepted by every loading operation
pub type Fetcher<K, V> = Arc<dyn BatchFetch<K, V>>;

struct LoaderState<K, V> {
  cache: CacheStore<V>,
  batches: HashMap<String, Batch<K, V>>,
  /// In-flight requests by slot; waiters subscribe to the sender
  pending: HashMap<String, broadcast::Sender<Option<V>>>,
  /// Slots currently being processed, per loader key
  in_flight: HashMap<String, HashSet<String>>,
  metrics: HashMap<String, LoaderMetrics>,
  /// Bumped by `clear_cache` so batches started earlier don't repopulate it
  generation: u64,
}

impl<K, V: Clone> LoaderState<K, V> {
  fn is_in_flight(&self, loader_key: &str, slot: &str) -> bool {
    self.in_flight.get(loader_key).is_some_and(|slots| slots.contains(slot))
  }

  fn metrics_mut(&mut self, loader_key: &str) -> &mut LoaderMetrics {
    self.metrics.entry(loader_key.to_string()).or_default()
  }

  /// Hand a result to every waiter of `slot` and forget the request.
  fn resolve(&mut self, loader_key: &str, slot: &str, value: Option<V>) {
    if let Some(sender) = self.pending.remove(slot) {
      // No receivers left just means every caller gave up
      let _ = sender.send(value);
    }
    if let Some(slots) = self.in_flight.get_mut(loader_key) {
      slots.remove(slot);
      if slots.is_empty() {
        self.in_flight.remove(loader_key);
      }
    }
  }
}

struct Inner<K, V> {
  config: BatchLoaderConfig,
  state: Mutex<LoaderState<K, V>>,
}

enum Waiter<V> {
  /// This request enqueued the key; wait for its batch
  Leader(broadcast::Receiver<Option<V>>),
  /// Another request already enqueued the key; wait a bounded time
  Follower(broadcast::Receiver<Option<V>>),
}

/// Batched loader shared across the application.
///
/// Cloning is cheap and every clone shares the same cache, batches and
/// metrics.
pub struct BatchLoader<K, V> {
  inner: Arc<Inner<K, V>>,
}

impl<K, V> Clone for BatchLoader<K, V> {
  fn clone(&self) -> Self {
    Self { inner: Arc::clone(&self.inner) }
  }
}

impl<K: LoadKey, V: LoadValue> Default for BatchLoader<K, V> {
  fn default() -> Self {
    Self::new(BatchLoaderConfig::default())
  }
}

impl<K: LoadKey, V: LoadValue> BatchLoader<K, V> {
  pub fn new(config: BatchLoaderConfig) -> Self {
    let state = LoaderState {
      cache: CacheStore::new(config.cache_expiry),
      batches: HashMap::new(),
      pending: HashMap::new(),
      in_flight: HashMap::new(),
      metrics: HashMap::new(),
      generation: 0,
    };
    Self { inner: Arc::new(Inner { config, state: Mutex::new(state) }) }
  }

  pub fn config(&self) -> &BatchLoaderConfig {
    &self.inner.config
  }

  /// Load the value for a single key.
  ///
  /// Returns the cached value when present, joins an in-flight request for
  /// the same key, or enqueues the key into its loader's batch. Resolves to
  /// `None` when the fetcher has no record for the key, the batch failed, or
  /// a duplicate request waited longer than the configured bound.
  pub async fn load(
    &self,
    key: K,
    fetcher: Fetcher<K, V>,
    options: LoadOptions,
  ) -> LoaderResult<Option<V>> {
    let loader_key = loader_key(fetcher.name(), options.relationship_type.as_deref());
    let key_json = serde_json::to_string(&key)?;
    let cache_key = cache_key_for(&key, options.cache_key.as_deref())?;
    let slot = make_slot(&loader_key, &cache_key);

    let waiter = {
      let mut state = self.inner.state.lock().await;

      let lookup = state.cache.get(&slot);
      state.metrics_mut(&loader_key).record_lookup(lookup.is_hit());
      if let CacheResult::Hit(value) = lookup {
        return Ok(Some(value));
      }

      let request = PendingKey { key, key_json, slot, ttl: options.ttl };
      let waiter = self.enqueue(&mut state, &loader_key, request, &fetcher, options.priority);
      if matches!(waiter, Waiter::Leader(_)) {
        self.arm_flush(&mut state, &loader_key, options.priority);
      }
      waiter
    };

    Ok(self.wait(waiter, &cache_key).await)
  }

  /// Race [`load`](Self::load) against an external cancellation signal.
  ///
  /// Resolves to `None` when the signal completes first. The key stays in
  /// its batch, so the value is still cached for later callers.
  pub async fn load_until<S>(
    &self,
    key: K,
    fetcher: Fetcher<K, V>,
    options: LoadOptions,
    signal: S,
  ) -> LoaderResult<Option<V>>
  where
    S: Future<Output = ()>,
  {
    tokio::select! {
      result = self.load(key, fetcher, options) => result,
      _ = signal => {
        debug!("Load cancelled by caller");
        Ok(None)
      }
    }
  }

  /// Load many keys through the batching path, chunked and in parallel.
  ///
  /// Duplicate keys are collapsed; the result is keyed by the
  /// JSON-serialized key.
  pub async fn preload(
    &self,
    keys: Vec<K>,
    fetcher: Fetcher<K, V>,
    options: PreloadOptions,
  ) -> LoaderResult<HashMap<String, Option<V>>> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(keys.len());
    for key in keys {
      let json = serde_json::to_string(&key)?;
      if seen.insert(json.clone()) {
        unique.push((json, key));
      }
    }

    let chunk_size = options.batch_size.unwrap_or(self.inner.config.max_batch_size);
    let load_options = options.load_options();

    let chunks = create_batches(unique.into_iter(), chunk_size)
      .into_iter()
      .map(|chunk| self.load_chunk(chunk, &fetcher, &load_options));

    let mut results = HashMap::new();
    for chunk in join_all(chunks).await {
      results.extend(chunk);
    }
    Ok(results)
  }

  /// Resolve one preload chunk of `(json_key, key)` pairs.
  ///
  /// The whole chunk is queued under a single lock before any flush can run,
  /// so it reaches the fetcher as one batch even on a multi-threaded runtime.
  async fn load_chunk(
    &self,
    chunk: Vec<(String, K)>,
    fetcher: &Fetcher<K, V>,
    options: &LoadOptions,
  ) -> Vec<(String, Option<V>)> {
    let loader_key = loader_key(fetcher.name(), options.relationship_type.as_deref());
    let mut resolved = Vec::with_capacity(chunk.len());
    let mut waiting = Vec::new();
    {
      let mut state = self.inner.state.lock().await;
      let mut enqueued = false;
      for (json, key) in chunk {
        let slot = make_slot(&loader_key, &json);
        let lookup = state.cache.get(&slot);
        state.metrics_mut(&loader_key).record_lookup(lookup.is_hit());
        if let CacheResult::Hit(value) = lookup {
          resolved.push((json, Some(value)));
          continue;
        }

        let request = PendingKey { key, key_json: json.clone(), slot, ttl: options.ttl };
        let waiter = self.enqueue(&mut state, &loader_key, request, fetcher, options.priority);
        enqueued |= matches!(waiter, Waiter::Leader(_));
        waiting.push((json, waiter));
      }
      if enqueued {
        self.arm_flush(&mut state, &loader_key, options.priority);
      }
    }

    let waits = waiting.into_iter().map(|(json, waiter)| async move {
      let value = self.wait(waiter, &json).await;
      (json, value)
    });
    resolved.extend(join_all(waits).await);
    resolved
  }

  /// Load a set of keys with exactly one fetch call for the uncached ones.
  ///
  /// Results are cached under the key `key_extractor` derives from each
  /// returned value. Cached values come first in the output, followed by
  /// fetched ones; input order is not preserved.
  pub async fn load_many<F>(
    &self,
    keys: Vec<K>,
    fetcher: Fetcher<K, V>,
    key_extractor: F,
    options: LoadManyOptions,
  ) -> LoaderResult<Vec<V>>
  where
    F: Fn(&V) -> K,
  {
    let loader_key = loader_key(fetcher.name(), options.relationship_type.as_deref());

    let mut cached = Vec::new();
    let mut uncached = Vec::new();
    let generation = {
      let mut state = self.inner.state.lock().await;
      let mut seen = HashSet::new();
      for key in keys {
        let cache_key = serde_json::to_string(&key)?;
        if !seen.insert(cache_key.clone()) {
          continue;
        }
        let lookup = state.cache.get(&make_slot(&loader_key, &cache_key));
        state.metrics_mut(&loader_key).record_lookup(lookup.is_hit());
        match lookup {
          CacheResult::Hit(value) => cached.push(value),
          CacheResult::Miss | CacheResult::Expired => uncached.push(key),
        }
      }
      state.generation
    };

    if uncached.is_empty() {
      return Ok(cached);
    }

    let batch_size = uncached.len();
    let started = Instant::now();
    let outcome = fetcher.fetch(&uncached).await;
    let elapsed = started.elapsed();

    let mut state = self.inner.state.lock().await;
    state.metrics_mut(&loader_key).record_batch(batch_size, elapsed);

    match outcome {
      Ok(values) => {
        if state.generation == generation {
          for value in &values {
            let cache_key = serde_json::to_string(&key_extractor(value))?;
            state.cache.insert(make_slot(&loader_key, &cache_key), value.clone(), options.ttl);
          }
        } else {
          debug!(%loader_key, batch_size, "Not caching load_many result after cache clear");
        }
        debug!(%loader_key, batch_size, fetched = values.len(), "load_many fetched uncached keys");
        cached.extend(values);
        Ok(cached)
      }
      Err(e) => {
        error!(
          %loader_key,
          batch_size,
          elapsed_ms = elapsed.as_millis() as u64,
          error = %e,
          "load_many fetch failed"
        );
        if options.allow_partial {
          Ok(Vec::new())
        } else {
          Err(e)
        }
      }
    }
  }

  /// Preload keys in a detached background task at low priority.
  ///
  /// Failures are logged, never propagated.
  pub fn warm_cache(
    &self,
    keys: Vec<K>,
    fetcher: Fetcher<K, V>,
    options: PreloadOptions,
  ) -> JoinHandle<()> {
    let loader = self.clone();
    let options = options.with_priority(Priority::Low);
    tokio::spawn(async move {
      let requested = keys.len();
      match loader.preload(keys, fetcher, options).await {
        Ok(results) => {
          let found = results.values().filter(|value| value.is_some()).count();
          info!(requested, found, "Cache warmed");
        }
        Err(e) => warn!(error = %e, "Cache warming failed"),
      }
    })
  }

  /// Evict every expired cache entry and return how many were removed.
  pub async fn clear_expired_cache(&self) -> usize {
    let mut state = self.inner.state.lock().await;
    let evicted = state.cache.clear_expired();
    if evicted > 0 {
      info!(evicted, "Cleared expired cache entries");
    }
    evicted
  }

  /// Drop all cached values, pending requests and scheduled batches.
  ///
  /// Callers still waiting on a dropped request resolve to `None`.
  pub async fn clear_cache(&self) {
    let mut state = self.inner.state.lock().await;
    state.cache.clear();
    state.pending.clear();
    state.in_flight.clear();
    for (_, mut batch) in state.batches.drain() {
      batch.cancel_timer();
    }
    state.generation += 1;
    debug!("Batch loader cache cleared");
  }

  /// Snapshot of per-loader-key metrics
  pub async fn get_performance_metrics(&self) -> HashMap<String, PerformanceSnapshot> {
    let state = self.inner.state.lock().await;
    state
      .metrics
      .iter()
      .map(|(loader_key, metrics)| {
        (loader_key.clone(), metrics.snapshot(state.cache.len_for_loader(loader_key)))
      })
      .collect()
  }

  /// Number of entries currently cached across all loader keys
  pub async fn cache_len(&self) -> usize {
    self.inner.state.lock().await.cache.len()
  }

  /// Join the in-flight request for `request.slot`, or enqueue the key.
  fn enqueue(
    &self,
    state: &mut LoaderState<K, V>,
    loader_key: &str,
    request: PendingKey<K>,
    fetcher: &Fetcher<K, V>,
    priority: Priority,
  ) -> Waiter<V> {
    if state.is_in_flight(loader_key, &request.slot) {
      if let Some(sender) = state.pending.get(&request.slot) {
        return Waiter::Follower(sender.subscribe());
      }
    }

    let (sender, receiver) = broadcast::channel(1);
    state.pending.insert(request.slot.clone(), sender);
    state.in_flight.entry(loader_key.to_string()).or_default().insert(request.slot.clone());
    state
      .batches
      .entry(loader_key.to_string())
      .or_insert_with(|| Batch::new(Arc::clone(fetcher)))
      .push(request, priority);
    Waiter::Leader(receiver)
  }

  /// Flush now on high priority or a full batch, otherwise restart the timer.
  fn arm_flush(&self, state: &mut LoaderState<K, V>, loader_key: &str, priority: Priority) {
    let max_batch_size = self.inner.config.max_batch_size.max(1);
    let Some(batch) = state.batches.get_mut(loader_key) else {
      return;
    };
    batch.cancel_timer();

    if priority == Priority::High || batch.len() >= max_batch_size {
      for _ in 0..batch.len().div_ceil(max_batch_size) {
        self.spawn_flush(loader_key.to_string());
      }
    } else {
      batch.timer = Some(self.schedule_flush(loader_key.to_string()));
    }
  }

  async fn wait(&self, waiter: Waiter<V>, cache_key: &str) -> Option<V> {
    match waiter {
      Waiter::Leader(mut receiver) => receiver.recv().await.ok().flatten(),
      Waiter::Follower(mut receiver) => {
        match tokio::time::timeout(self.inner.config.dedup_wait, receiver.recv()).await {
          Ok(result) => result.ok().flatten(),
          Err(_) => {
            debug!(%cache_key, "Duplicate request timed out waiting for in-flight load");
            None
          }
        }
      }
    }
  }

  fn schedule_flush(&self, loader_key: String) -> JoinHandle<()> {
    let loader = self.clone();
    let delay = self.inner.config.batch_timeout;
    tokio::spawn(async move {
      tokio::time::sleep(delay).await;
      // Failures are logged inside execute_batch
      let _ = loader.execute_batch(loader_key, true).await;
    })
  }

  fn spawn_flush(&self, loader_key: String) {
    let loader = self.clone();
    tokio::spawn(async move {
      let _ = loader.execute_batch(loader_key, false).await;
    });
  }

  /// Flush up to `max_batch_size` keys of one loader key.
  ///
  /// `from_timer` is set when called from the batch's own timer task, whose
  /// handle must be released rather than aborted.
  async fn execute_batch(&self, loader_key: String, from_timer: bool) -> LoaderResult<()> {
    let (fetcher, items, generation) = {
      let mut state = self.inner.state.lock().await;
      let generation = state.generation;
      let Some(batch) = state.batches.get_mut(&loader_key) else {
        return Ok(());
      };

      if from_timer {
        batch.timer = None;
      } else {
        batch.cancel_timer();
      }

      let items = batch.take(self.inner.config.max_batch_size);
      let fetcher = Arc::clone(&batch.fetcher);
      if batch.is_empty() {
        state.batches.remove(&loader_key);
      } else {
        let timer = self.schedule_flush(loader_key.clone());
        if let Some(batch) = state.batches.get_mut(&loader_key) {
          batch.timer = Some(timer);
        }
      }
      (fetcher, items, generation)
    };

    if items.is_empty() {
      return Ok(());
    }

    let batch_size = items.len();
    let keys: Vec<K> = items.iter().map(|item| item.key.clone()).collect();
    debug!(%loader_key, batch_size, "Executing batch");

    // A panicking fetcher surfaces as a join error instead of stranding waiters
    let started = Instant::now();
    let fetch_task = {
      let fetcher = Arc::clone(&fetcher);
      tokio::spawn(async move { fetcher.fetch(&keys).await })
    };
    let outcome = match fetch_task.await {
      Ok(result) => result,
      Err(e) => Err(LoaderError::from(e)),
    };
    let elapsed = started.elapsed();

    let mut state = self.inner.state.lock().await;
    state.metrics_mut(&loader_key).record_batch(batch_size, elapsed);
    if state.generation != generation {
      debug!(%loader_key, batch_size, "Discarding batch result after cache clear");
      return outcome.map(|_| ());
    }

    match outcome {
      Ok(values) => {
        let resolved = match_results(fetcher.as_ref(), &items, values);
        for (item, value) in items.iter().zip(resolved) {
          if let Some(value) = &value {
            state.cache.insert(item.slot.clone(), value.clone(), item.ttl);
          }
          state.resolve(&loader_key, &item.slot, value);
        }

        if elapsed > self.inner.config.slow_batch_threshold {
          warn!(
            %loader_key,
            batch_size,
            elapsed_ms = elapsed.as_millis() as u64,
            "Slow batch execution"
          );
        }
        Ok(())
      }
      Err(e) => {
        error!(
          %loader_key,
          batch_size,
          elapsed_ms = elapsed.as_millis() as u64,
          error = %e,
          "Batch execution failed"
        );
        for item in &items {
          state.resolve(&loader_key, &item.slot, None);
        }
        Err(e)
      }
    }
  }
}

/// Pair fetched values with the keys that requested them.
///
/// Values the fetcher can re-key are matched by key; otherwise values are
/// matched by position.
fn match_results<K: LoadKey, V: LoadValue>(
  fetcher: &dyn BatchFetch<K, V>,
  items: &[PendingKey<K>],
  values: Vec<V>,
) -> Vec<Option<V>> {
  let mut by_key = HashMap::new();
  let mut positional = Vec::new();
  for value in values {
    match fetcher.key_of(&value).and_then(|key| serde_json::to_string(&key).ok()) {
      Some(json) => {
        by_key.insert(json, value);
      }
      None => positional.push(value),
    }
  }

  if by_key.is_empty() {
    let mut positional = positional.into_iter();
    items.iter().map(|_| positional.next()).collect()
  } else {
    items.iter().map(|item| by_key.get(&item.key_json).cloned()).collect()
  }
}
