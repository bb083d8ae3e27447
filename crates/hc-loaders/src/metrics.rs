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
//! Per-loader-key performance counters.
//!
//! Advisory only: nothing in the loader's correctness depends on these.

use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

/// Number of recent batch sizes kept for the rolling average
pub const BATCH_SIZE_WINDOW: usize = 100;

/// Running totals for one loader key
#[derive(Debug, Clone, Default)]
pub struct LoaderMetrics {
  total_queries: u64,
  total_execution_time: Duration,
  batch_sizes: VecDeque<usize>,
  cache_lookups: u64,
  cache_hits: u64,
}

impl LoaderMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record one executed fetch call
  pub fn record_batch(&mut self, batch_size: usize, elapsed: Duration) {
    self.total_queries += 1;
    self.total_execution_time += elapsed;
    if self.batch_sizes.len() == BATCH_SIZE_WINDOW {
      self.batch_sizes.pop_front();
    }
    self.batch_sizes.push_back(batch_size);
  }

  /// Record a cache lookup made on behalf of this loader key
  pub fn record_lookup(&mut self, hit: bool) {
    self.cache_lookups += 1;
    if hit {
      self.cache_hits += 1;
    }
  }

  pub fn total_queries(&self) -> u64 {
    self.total_queries
  }

  pub fn avg_execution_time(&self) -> Duration {
    if self.total_queries == 0 {
      Duration::ZERO
    } else {
      Duration::from_secs_f64(self.total_execution_time.as_secs_f64() / self.total_queries as f64)
    }
  }

  pub fn avg_batch_size(&self) -> f64 {
    if self.batch_sizes.is_empty() {
      0.0
    } else {
      self.batch_sizes.iter().sum::<usize>() as f64 / self.batch_sizes.len() as f64
    }
  }

  pub fn cache_hit_ratio(&self) -> f64 {
    if self.cache_lookups == 0 {
      0.0
    } else {
      self.cache_hits as f64 / self.cache_lookups as f64
    }
  }

  pub fn snapshot(&self, cache_size: usize) -> PerformanceSnapshot {
    PerformanceSnapshot {
      total_queries: self.total_queries,
      avg_execution_time_ms: self.avg_execution_time().as_secs_f64() * 1000.0,
      avg_batch_size: self.avg_batch_size(),
      cache_hit_ratio: self.cache_hit_ratio(),
      cache_size,
    }
  }
}

/// Read-only view of [`LoaderMetrics`] returned to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSnapshot {
  pub total_queries: u64,
  pub avg_execution_time_ms: f64,
  pub avg_batch_size: f64,
  pub cache_hit_ratio: f64,
  pub cache_size: usize,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_metrics() {
    let metrics = LoaderMetrics::new();
    assert_eq!(metrics.total_queries(), 0);
    assert_eq!(metrics.avg_execution_time(), Duration::ZERO);
    assert_eq!(metrics.avg_batch_size(), 0.0);
    assert_eq!(metrics.cache_hit_ratio(), 0.0);
  }

  #[test]
  fn test_record_batch_averages() {
    let mut metrics = LoaderMetrics::new();
    metrics.record_batch(2, Duration::from_millis(10));
    metrics.record_batch(4, Duration::from_millis(30));
    assert_eq!(metrics.total_queries(), 2);
    assert_eq!(metrics.avg_execution_time(), Duration::from_millis(20));
    assert_eq!(metrics.avg_batch_size(), 3.0);
  }

  #[test]
  fn test_avg_execution_time_past_u32_batches() {
    let mut metrics = LoaderMetrics::new();
    metrics.total_queries = u64::from(u32::MAX) + 1;
    metrics.total_execution_time = Duration::from_secs(u64::from(u32::MAX) + 1);
    assert_eq!(metrics.avg_execution_time(), Duration::from_secs(1));
  }

  #[test]
  fn test_batch_size_window_is_bounded() {
    let mut metrics = LoaderMetrics::new();
    for _ in 0..BATCH_SIZE_WINDOW {
      metrics.record_batch(1, Duration::from_millis(1));
    }
    for _ in 0..BATCH_SIZE_WINDOW {
      metrics.record_batch(3, Duration::from_millis(1));
    }
    assert_eq!(metrics.total_queries(), 200);
    assert_eq!(metrics.avg_batch_size(), 3.0);
  }

  #[test]
  fn test_cache_hit_ratio() {
    let mut metrics = LoaderMetrics::new();
    metrics.record_lookup(true);
    metrics.record_lookup(false);
    metrics.record_lookup(false);
    metrics.record_lookup(true);
    assert_eq!(metrics.cache_hit_ratio(), 0.5);
  }

  #[test]
  fn test_snapshot_serializes() {
    let mut metrics = LoaderMetrics::new();
    metrics.record_batch(5, Duration::from_millis(4));
    let snapshot = metrics.snapshot(5);
    assert_eq!(snapshot.cache_size, 5);
    assert_eq!(snapshot.avg_execution_time_ms, 4.0);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["total_queries"], 1);
    assert_eq!(json["cache_size"], 5);
  }
}
