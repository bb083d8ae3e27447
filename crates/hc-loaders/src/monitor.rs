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
//! Timing for named data-access queries.
//!
//! Keeps the most recent samples per query name and warns when a single
//! execution exceeds the slow query threshold.

use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::warn;

use crate::LoaderResult;

/// Samples kept per query name
pub const SAMPLE_WINDOW: usize = 100;

/// Default threshold above which a query is reported as slow
pub const DEFAULT_SLOW_QUERY_THRESHOLD: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
struct QuerySample {
  duration: Duration,
  rows: usize,
}

#[derive(Debug, Default)]
struct QueryHistory {
  samples: VecDeque<QuerySample>,
  slow_count: u64,
}

/// Aggregated timings for one query name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySummary {
  pub count: usize,
  pub avg_ms: f64,
  pub max_ms: f64,
  pub slow_count: u64,
  pub total_rows: usize,
}

/// Tracks execution time of named data-access queries.
pub struct QueryPerformanceMonitor {
  queries: Arc<Mutex<HashMap<String, QueryHistory>>>,
  slow_query_threshold: Duration,
}

impl Default for QueryPerformanceMonitor {
  fn default() -> Self {
    Self::new(DEFAULT_SLOW_QUERY_THRESHOLD)
  }
}

impl QueryPerformanceMonitor {
  pub fn new(slow_query_threshold: Duration) -> Self {
    Self { queries: Arc::new(Mutex::new(HashMap::new())), slow_query_threshold }
  }

  pub async fn record(&self, query_name: &str, duration: Duration, rows: usize) {
    let mut queries = self.queries.lock().await;
    let history = queries.entry(query_name.to_string()).or_default();
    if history.samples.len() == SAMPLE_WINDOW {
      history.samples.pop_front();
    }
    history.samples.push_back(QuerySample { duration, rows });

    if duration > self.slow_query_threshold {
      history.slow_count += 1;
      warn!(
        query = query_name,
        elapsed_ms = duration.as_millis() as u64,
        rows,
        "Slow query detected"
      );
    }
  }

  /// Run `operation`, record how long it took and how many rows it returned.
  pub async fn time<T, F>(&self, query_name: &str, operation: F) -> LoaderResult<Vec<T>>
  where
    F: Future<Output = LoaderResult<Vec<T>>>,
  {
    let started = Instant::now();
    let result = operation.await;
    let rows = result.as_ref().map(Vec::len).unwrap_or(0);
    self.record(query_name, started.elapsed(), rows).await;
    result
  }

  pub async fn summary(&self) -> HashMap<String, QuerySummary> {
    let queries = self.queries.lock().await;
    queries
      .iter()
      .filter(|(_, history)| !history.samples.is_empty())
      .map(|(name, history)| {
        let count = history.samples.len();
        let total: Duration = history.samples.iter().map(|s| s.duration).sum();
        let max = history.samples.iter().map(|s| s.duration).max().unwrap_or_default();
        let summary = QuerySummary {
          count,
          avg_ms: total.as_secs_f64() * 1000.0 / count as f64,
          max_ms: max.as_secs_f64() * 1000.0,
          slow_count: history.slow_count,
          total_rows: history.samples.iter().map(|s| s.rows).sum(),
        };
        (name.clone(), summary)
      })
      .collect()
  }

  /// Names of queries whose slowest recorded sample exceeds the threshold
  pub async fn slow_queries(&self) -> Vec<String> {
    let queries = self.queries.lock().await;
    let mut names: Vec<String> = queries
      .iter()
      .filter(|(_, history)| {
        history.samples.iter().any(|sample| sample.duration > self.slow_query_threshold)
      })
      .map(|(name, _)| name.clone())
      .collect();
    names.sort();
    names
  }

  pub async fn reset(&self) {
    self.queries.lock().await.clear();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::LoaderError;

  #[tokio::test]
  async fn test_record_and_summary() {
    let monitor = QueryPerformanceMonitor::default();
    monitor.record("posts_by_author", Duration::from_millis(10), 3).await;
    monitor.record("posts_by_author", Duration::from_millis(30), 5).await;

    let summary = monitor.summary().await;
    let posts = &summary["posts_by_author"];
    assert_eq!(posts.count, 2);
    assert_eq!(posts.avg_ms, 20.0);
    assert_eq!(posts.max_ms, 30.0);
    assert_eq!(posts.total_rows, 8);
    assert_eq!(posts.slow_count, 0);
  }

  #[tokio::test]
  async fn test_slow_queries() {
    let monitor = QueryPerformanceMonitor::new(Duration::from_millis(100));
    monitor.record("fast", Duration::from_millis(5), 1).await;
    monitor.record("slow", Duration::from_millis(250), 1).await;

    assert_eq!(monitor.slow_queries().await, vec!["slow".to_string()]);
    assert_eq!(monitor.summary().await["slow"].slow_count, 1);
  }

  #[tokio::test]
  async fn test_sample_window_is_bounded() {
    let monitor = QueryPerformanceMonitor::default();
    for _ in 0..(SAMPLE_WINDOW + 20) {
      monitor.record("q", Duration::from_millis(1), 1).await;
    }
    assert_eq!(monitor.summary().await["q"].count, SAMPLE_WINDOW);
  }

  #[tokio::test(start_paused = true)]
  async fn test_time_records_rows_and_errors() {
    let monitor = QueryPerformanceMonitor::default();

    let rows = monitor
      .time("ok", async {
        tokio::time::sleep(Duration::from_millis(40)).await;
        Ok(vec![1, 2, 3])
      })
      .await
      .unwrap();
    assert_eq!(rows.len(), 3);

    let failed: LoaderResult<Vec<i32>> =
      monitor.time("broken", async { Err(LoaderError::Fetch("down".to_string())) }).await;
    assert!(failed.is_err());

    let summary = monitor.summary().await;
    assert_eq!(summary["ok"].total_rows, 3);
    assert!(summary["ok"].avg_ms >= 40.0);
    assert_eq!(summary["broken"].total_rows, 0);
  }

  #[tokio::test]
  async fn test_reset() {
    let monitor = QueryPerformanceMonitor::default();
    monitor.record("q", Duration::from_millis(1), 1).await;
    monitor.reset().await;
    assert!(monitor.summary().await.is_empty());
  }
}
