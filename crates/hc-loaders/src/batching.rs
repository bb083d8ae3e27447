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
//! Pending batch bookkeeping for one loader key

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::loader::{BatchFetch, Priority};

/// One key waiting in a batch
#[derive(Debug, Clone)]
pub struct PendingKey<K> {
  pub key: K,
  /// JSON form of `key`, used to match results re-keyed by the fetcher
  pub key_json: String,
  /// Namespaced cache slot the result is stored under
  pub slot: String,
  pub ttl: Option<Duration>,
}

/// Keys accumulated for one loader key, plus the fetcher and timer that will
/// flush them.
pub struct Batch<K, V> {
  items: VecDeque<PendingKey<K>>,
  high_priority: usize,
  pub fetcher: Arc<dyn BatchFetch<K, V>>,
  pub timer: Option<JoinHandle<()>>,
}

impl<K, V> Batch<K, V> {
  pub fn new(fetcher: Arc<dyn BatchFetch<K, V>>) -> Self {
    Self { items: VecDeque::new(), high_priority: 0, fetcher, timer: None }
  }

  /// Add a key; high-priority keys go ahead of everything else but keep
  /// their insertion order among themselves.
  pub fn push(&mut self, item: PendingKey<K>, priority: Priority) {
    match priority {
      Priority::High => {
        self.items.insert(self.high_priority, item);
        self.high_priority += 1;
      }
      Priority::Normal | Priority::Low => self.items.push_back(item),
    }
  }

  /// Remove up to `max` keys from the front of the batch.
  pub fn take(&mut self, max: usize) -> Vec<PendingKey<K>> {
    let count = max.min(self.items.len());
    self.high_priority = self.high_priority.saturating_sub(count);
    self.items.drain(..count).collect()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Abort the scheduled flush, if any.
  pub fn cancel_timer(&mut self) {
    if let Some(timer) = self.timer.take() {
      timer.abort();
    }
  }
}

/// Helper function to create batches from an iterator
pub fn create_batches<T>(items: impl Iterator<Item = T>, batch_size: usize) -> Vec<Vec<T>> {
  let batch_size = batch_size.max(1);
  let mut batches = Vec::new();
  let mut current_batch = Vec::with_capacity(batch_size);

  for item in items {
    current_batch.push(item);
    if current_batch.len() >= batch_size {
      batches.push(std::mem::replace(&mut current_batch, Vec::with_capacity(batch_size)));
    }
  }

  if !current_batch.is_empty() {
    batches.push(current_batch);
  }

  batches
}
