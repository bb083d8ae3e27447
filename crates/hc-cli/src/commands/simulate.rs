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

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Args;
use futures::future::join_all;
use hc_core::Config;
use hc_loaders::prelude::*;
use hc_loaders::{PerformanceSnapshot, QueryPerformanceMonitor, QuerySummary};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug)]
pub struct SimulateArgs {
  /// Number of distinct patient ids to request
  #[arg(short, long, default_value = "50")]
  keys: u64,

  /// Concurrent requests issued for every id
  #[arg(short, long, default_value = "3")]
  duplicates: usize,

  /// Simulated latency of one fetch call, in milliseconds
  #[arg(long, default_value = "5")]
  latency_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
struct PatientRecord {
  id: u64,
  display_name: String,
}

/// In-memory patient table standing in for an `IN (...)` query
struct PatientDirectory {
  monitor: Arc<QueryPerformanceMonitor>,
  latency: Duration,
  calls: AtomicUsize,
  keys_fetched: AtomicUsize,
}

#[async_trait]
impl BatchFetch<u64, PatientRecord> for PatientDirectory {
  async fn fetch(&self, keys: &[u64]) -> LoaderResult<Vec<PatientRecord>> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    self.keys_fetched.fetch_add(keys.len(), Ordering::SeqCst);

    self
      .monitor
      .time("patients_by_id", async {
        tokio::time::sleep(self.latency).await;
        Ok(
          keys
            .iter()
            .map(|id| PatientRecord { id: *id, display_name: format!("Patient {:04}", id) })
            .collect(),
        )
      })
      .await
  }

  fn name(&self) -> &str {
    "patients"
  }

  fn key_of(&self, value: &PatientRecord) -> Option<u64> {
    Some(value.id)
  }
}

#[derive(Debug, Serialize)]
struct SimulationReport {
  requests: usize,
  unique_keys: u64,
  resolved: usize,
  fetch_calls: usize,
  keys_fetched: usize,
  loaders: HashMap<String, PerformanceSnapshot>,
  queries: HashMap<String, QuerySummary>,
}

pub async fn execute(args: SimulateArgs, config: &Config) -> Result<()> {
  let report = run(&args, config).await?;
  info!(
    requests = report.requests,
    fetch_calls = report.fetch_calls,
    keys_fetched = report.keys_fetched,
    "Simulation finished"
  );
  let output = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
  println!("{}", output);
  Ok(())
}

async fn run(args: &SimulateArgs, config: &Config) -> Result<SimulationReport> {
  let context: LoaderContext<u64, PatientRecord> = LoaderContext::from_config(config);
  let directory = Arc::new(PatientDirectory {
    monitor: Arc::clone(&context.monitor),
    latency: Duration::from_millis(args.latency_ms),
    calls: AtomicUsize::new(0),
    keys_fetched: AtomicUsize::new(0),
  });
  let fetcher: Fetcher<u64, PatientRecord> = directory.clone();

  let requests: Vec<u64> = (0..args.duplicates).flat_map(|_| 1..=args.keys).collect();
  info!(requests = requests.len(), unique_keys = args.keys, "Starting simulation");

  let loads = requests
    .iter()
    .map(|id| context.loader.load(*id, Arc::clone(&fetcher), LoadOptions::new()));

  let mut resolved = 0;
  for result in join_all(loads).await {
    if result?.is_some() {
      resolved += 1;
    }
  }

  Ok(SimulationReport {
    requests: requests.len(),
    unique_keys: args.keys,
    resolved,
    fetch_calls: directory.calls.load(Ordering::SeqCst),
    keys_fetched: directory.keys_fetched.load(Ordering::SeqCst),
    loaders: context.loader.get_performance_metrics().await,
    queries: context.monitor.summary().await,
  })
}
