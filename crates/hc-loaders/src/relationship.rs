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
//! Relationship preloading on top of [`BatchLoader`].
//!
//! Given a page of parent records, collect the foreign keys they reference
//! and resolve them in as few fetch calls as possible, so rendering the page
//! doesn't issue one query per parent.

use std::collections::HashMap;

use crate::batch_loader::{BatchLoader, Fetcher};
use crate::loader::{LoadKey, LoadValue, PreloadOptions};
use crate::LoaderResult;

#[derive(Clone)]
pub struct RelationshipPreloader<K, V> {
  loader: BatchLoader<K, V>,
}

impl<K: LoadKey, V: LoadValue> RelationshipPreloader<K, V> {
  pub fn new(loader: BatchLoader<K, V>) -> Self {
    Self { loader }
  }

  /// Preload the records `parents` point at through `foreign_key`.
  ///
  /// Parents without a reference are skipped. The result is keyed by the
  /// JSON-serialized foreign key.
  pub async fn preload_relationship<P, F>(
    &self,
    parents: &[P],
    relationship_type: &str,
    foreign_key: F,
    fetcher: Fetcher<K, V>,
  ) -> LoaderResult<HashMap<String, Option<V>>>
  where
    F: Fn(&P) -> Option<K>,
  {
    let keys: Vec<K> = parents.iter().filter_map(&foreign_key).collect();
    if keys.is_empty() {
      return Ok(HashMap::new());
    }

    let options = PreloadOptions::default().with_relationship_type(relationship_type);
    self.loader.preload(keys, fetcher, options).await
  }

  /// Pair every parent with its related record, keeping parent order.
  pub async fn attach<P, F>(
    &self,
    parents: Vec<P>,
    relationship_type: &str,
    foreign_key: F,
    fetcher: Fetcher<K, V>,
  ) -> LoaderResult<Vec<(P, Option<V>)>>
  where
    F: Fn(&P) -> Option<K>,
  {
    let related =
      self.preload_relationship(&parents, relationship_type, &foreign_key, fetcher).await?;

    parents
      .into_iter()
      .map(|parent| -> LoaderResult<(P, Option<V>)> {
        let value = match foreign_key(&parent) {
          Some(key) => related.get(&serde_json::to_string(&key)?).cloned().flatten(),
          None => None,
        };
        Ok((parent, value))
      })
      .collect()
  }
}
