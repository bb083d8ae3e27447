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
use async_trait::async_trait;
use hc_loaders::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
struct User {
  id: String,
  name: String,
}

/// In-memory user table that records every fetch call.
struct UserTable {
  name: &'static str,
  calls: Mutex<Vec<Vec<String>>>,
  fail: bool,
}

impl UserTable {
  fn new(name: &'static str) -> Arc<Self> {
    Arc::new(Self { name, calls: Mutex::new(Vec::new()), fail: false })
  }

  fn failing(name: &'static str) -> Arc<Self> {
    Arc::new(Self { name, calls: Mutex::new(Vec::new()), fail: true })
  }

  fn calls(&self) -> Vec<Vec<String>> {
    self.calls.lock().unwrap().clone()
  }
}

#[async_trait]
impl BatchFetch<String, User> for UserTable {
  async fn fetch(&self, keys: &[String]) -> LoaderResult<Vec<User>> {
    self.calls.lock().unwrap().push(keys.to_vec());
    if self.fail {
      return Err(LoaderError::Fetch("connection reset".to_string()));
    }
    // Returned in reverse order to exercise key-based matching
    Ok(
      keys
        .iter()
        .rev()
        .map(|id| User { id: id.clone(), name: format!("User {}", id) })
        .collect(),
    )
  }

  fn name(&self) -> &str {
    self.name
  }

  fn key_of(&self, value: &User) -> Option<String> {
    Some(value.id.clone())
  }
}

fn key(id: &str) -> String {
  id.to_string()
}

#[tokio::test(start_paused = true)]
async fn duplicate_keys_in_one_window_fetch_once() {
  let loader: BatchLoader<String, User> = BatchLoader::default();
  let table = UserTable::new("author");

  let (first, second, other) = tokio::join!(
    loader.load(key("u1"), table.clone(), LoadOptions::new()),
    loader.load(key("u1"), table.clone(), LoadOptions::new()),
    loader.load(key("u2"), table.clone(), LoadOptions::new()),
  );

  assert_eq!(table.calls(), vec![vec![key("u1"), key("u2")]]);

  let first = first.unwrap().expect("u1 resolved");
  let second = second.unwrap().expect("duplicate u1 resolved");
  assert_eq!(first, second);
  assert_eq!(first.name, "User u1");
  assert_eq!(other.unwrap().unwrap().id, "u2");
}

#[tokio::test(start_paused = true)]
async fn expired_entries_are_refetched() {
  let config = BatchLoaderConfig::default().with_cache_expiry(Duration::from_millis(200));
  let loader: BatchLoader<String, User> = BatchLoader::new(config);
  let table = UserTable::new("users");

  loader.load(key("u1"), table.clone(), LoadOptions::new()).await.unwrap();
  loader.load(key("u1"), table.clone(), LoadOptions::new()).await.unwrap();
  assert_eq!(table.calls().len(), 1);

  tokio::time::advance(Duration::from_millis(250)).await;
  let refreshed = loader.load(key("u1"), table.clone(), LoadOptions::new()).await.unwrap();
  assert!(refreshed.is_some());
  assert_eq!(table.calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn preload_returns_unique_keys() {
  let loader: BatchLoader<String, User> = BatchLoader::default();
  let table = UserTable::new("users");

  let keys = vec![key("a"), key("b"), key("a"), key("c"), key("b")];
  let results = loader.preload(keys, table.clone(), PreloadOptions::default()).await.unwrap();

  let mut returned: Vec<&String> = results.keys().collect();
  returned.sort();
  assert_eq!(returned, vec!["\"a\"", "\"b\"", "\"c\""]);
  assert!(results.values().all(Option::is_some));

  let fetched: usize = table.calls().iter().map(Vec::len).sum();
  assert_eq!(fetched, 3);
}

#[tokio::test(start_paused = true)]
async fn preload_chunks_by_batch_size() {
  let loader: BatchLoader<String, User> = BatchLoader::default();
  let table = UserTable::new("users");

  let keys: Vec<String> = (0..5).map(|i| format!("k{}", i)).collect();
  let options = PreloadOptions::default().with_batch_size(2).with_priority(Priority::Normal);
  let results = loader.preload(keys, table.clone(), options).await.unwrap();

  assert_eq!(results.len(), 5);
  // Chunks run in parallel through the same coalescing window
  let fetched: usize = table.calls().iter().map(Vec::len).sum();
  assert_eq!(fetched, 5);
}

#[tokio::test(start_paused = true)]
async fn load_many_skips_cached_keys() {
  let loader: BatchLoader<String, User> = BatchLoader::default();
  let table = UserTable::new("users");

  loader.load(key("u1"), table.clone(), LoadOptions::new()).await.unwrap();

  let users = loader
    .load_many(
      vec![key("u1"), key("u2"), key("u3"), key("u2")],
      table.clone(),
      |user: &User| user.id.clone(),
      LoadManyOptions::default(),
    )
    .await
    .unwrap();

  let calls = table.calls();
  assert_eq!(calls.len(), 2);
  assert_eq!(calls[1], vec![key("u2"), key("u3")]);

  let mut ids: Vec<&str> = users.iter().map(|user| user.id.as_str()).collect();
  ids.sort();
  assert_eq!(ids, vec!["u1", "u2", "u3"]);

  // Fetched values were cached under their extracted keys
  let cached = loader.load(key("u3"), table.clone(), LoadOptions::new()).await.unwrap();
  assert!(cached.is_some());
  assert_eq!(table.calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn load_many_failure_rethrows_or_returns_empty() {
  let loader: BatchLoader<String, User> = BatchLoader::default();
  let table = UserTable::failing("users");

  let strict = loader
    .load_many(vec![key("u1")], table.clone(), |user: &User| user.id.clone(), Default::default())
    .await;
  assert!(matches!(strict, Err(LoaderError::Fetch(_))));

  let partial = loader
    .load_many(
      vec![key("u1")],
      table.clone(),
      |user: &User| user.id.clone(),
      LoadManyOptions::default().with_allow_partial(true),
    )
    .await
    .unwrap();
  assert!(partial.is_empty());
}

#[tokio::test(start_paused = true)]
async fn loaders_do_not_share_cache_entries() {
  let loader: BatchLoader<String, User> = BatchLoader::default();
  let authors = UserTable::new("author");
  let reviewers = UserTable::new("reviewer");

  loader.load(key("u1"), authors.clone(), LoadOptions::new()).await.unwrap();
  loader.load(key("u1"), reviewers.clone(), LoadOptions::new()).await.unwrap();

  assert_eq!(authors.calls().len(), 1);
  assert_eq!(reviewers.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn context_shares_loader_with_preloader() {
  let context: LoaderContext<String, User> =
    LoaderContext::from_config(&hc_core::Config::default());
  let table = UserTable::new("users");

  let parents = vec![("post-1", Some(key("u1"))), ("post-2", Some(key("u2")))];
  context
    .preloader
    .preload_relationship(&parents, "author", |(_, author)| author.clone(), table.clone())
    .await
    .unwrap();

  let metrics = context.loader.get_performance_metrics().await;
  assert_eq!(metrics["users:author"].cache_size, 2);
}
