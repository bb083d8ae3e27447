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
//! Configuration management for the batching and error-formatting layer

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main configuration struct shared by the loader and formatter crates
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
  /// Coalescing window in milliseconds
  pub batch_timeout_ms: u64,

  /// Maximum number of keys per fetch call
  pub max_batch_size: usize,

  /// Cache entry lifetime in milliseconds
  pub cache_ttl_ms: u64,

  /// Threshold above which a batch is reported as slow
  pub slow_batch_ms: u64,

  /// Multiplier applied to the batch timeout for duplicate-request waits
  pub dedup_wait_factor: u32,

  /// Default locale tag for error messages
  pub locale: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      batch_timeout_ms: crate::DEFAULT_BATCH_TIMEOUT_MS,
      max_batch_size: crate::DEFAULT_MAX_BATCH_SIZE,
      cache_ttl_ms: crate::DEFAULT_CACHE_TTL_MS,
      slow_batch_ms: crate::DEFAULT_SLOW_BATCH_MS,
      dedup_wait_factor: crate::DEFAULT_DEDUP_WAIT_FACTOR,
      locale: crate::DEFAULT_LOCALE.to_string(),
    }
  }
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Build a config from an arbitrary variable source.
  ///
  /// Missing variables fall back to the crate defaults; present but
  /// unparsable ones are rejected.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Config::default();

    let batch_timeout_ms =
      parse_var(&lookup, "HC_BATCH_TIMEOUT_MS", defaults.batch_timeout_ms)?;
    let max_batch_size = parse_var(&lookup, "HC_MAX_BATCH_SIZE", defaults.max_batch_size)?;
    let cache_ttl_ms = parse_var(&lookup, "HC_CACHE_TTL_MS", defaults.cache_ttl_ms)?;
    let slow_batch_ms = parse_var(&lookup, "HC_SLOW_BATCH_MS", defaults.slow_batch_ms)?;
    let dedup_wait_factor =
      parse_var(&lookup, "HC_DEDUP_WAIT_FACTOR", defaults.dedup_wait_factor)?;
    let locale = lookup("HC_LOCALE").unwrap_or(defaults.locale);

    if max_batch_size == 0 {
      return Err(Error::Config("HC_MAX_BATCH_SIZE must be greater than zero".to_string()));
    }

    Ok(Config {
      batch_timeout_ms,
      max_batch_size,
      cache_ttl_ms,
      slow_batch_ms,
      dedup_wait_factor,
      locale,
    })
  }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
{
  match lookup(name) {
    Some(raw) => raw.trim().parse().map_err(|_| Error::Config(format!("Invalid {}", name))),
    None => Ok(default),
  }
}
