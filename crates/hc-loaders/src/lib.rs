//! # hc-loaders
//!
//! Query-optimization layer that sits in front of an external, I/O-bound,
//! key-by-key fetch function.
//!
//! This crate provides:
//! - [`BatchLoader`]: coalesces per-key requests into batched fetch calls,
//!   deduplicates concurrent requests and caches results with a TTL
//! - [`RelationshipPreloader`]: resolves foreign keys for a page of parent records
//! - [`QueryPerformanceMonitor`]: timing and slow-query tracking for named queries
//! - [`LoaderContext`]: one object that owns all of the above for the host application

pub mod batch_loader;
pub mod batching;
pub mod cache;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod monitor;
pub mod relationship;

// Re-export commonly used types
pub use batch_loader::{BatchLoader, Fetcher};
pub use error::{LoaderError, LoaderResult};
pub use loader::{
  BatchFetch, BatchLoaderConfig, LoadManyOptions, LoadOptions, LoaderContext, PreloadOptions,
  Priority,
};
pub use metrics::PerformanceSnapshot;
pub use monitor::{QueryPerformanceMonitor, QuerySummary};
pub use relationship::RelationshipPreloader;

// Prelude for convenient imports
pub mod prelude {
  pub use crate::{
    BatchFetch, BatchLoader, BatchLoaderConfig, Fetcher, LoadManyOptions, LoadOptions,
    LoaderContext, LoaderError, LoaderResult, PreloadOptions, Priority,
  };
}
