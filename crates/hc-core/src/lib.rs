pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Coalescing window used when `HC_BATCH_TIMEOUT_MS` is not set.
pub const DEFAULT_BATCH_TIMEOUT_MS: u64 = 10;

/// Largest batch handed to a fetcher in one call.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;

/// Cache entry lifetime (5 minutes).
pub const DEFAULT_CACHE_TTL_MS: u64 = 300_000;

/// Batches slower than this are logged at warn level.
pub const DEFAULT_SLOW_BATCH_MS: u64 = 100;

/// A duplicate request waits this many batch windows before giving up.
pub const DEFAULT_DEDUP_WAIT_FACTOR: u32 = 2;

/// Locale used when none is configured or the configured one is unknown.
pub const DEFAULT_LOCALE: &str = "en";
