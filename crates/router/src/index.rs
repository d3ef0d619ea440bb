// Copyright 2024 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::Result;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Bucket name to owning mount point index.
///
/// Reads take the shared side of `entries`. Every mutation after startup goes
/// through `placement`, so a lazy insert never interleaves with another lazy
/// insert or with a removal.
#[derive(Debug, Default)]
pub struct BucketIndex {
    entries: RwLock<HashMap<String, usize>>,
    placement: Mutex<()>,
}

impl BucketIndex {
    pub fn new(entries: HashMap<String, usize>) -> Self {
        Self {
            entries: RwLock::new(entries),
            placement: Mutex::new(()),
        }
    }

    pub async fn get(&self, bucket: &str) -> Option<usize> {
        self.entries.read().await.get(bucket).copied()
    }

    /// Returns the owner of `bucket`, calling `select` to place it when the
    /// bucket is unknown.
    ///
    /// The index is checked again after the placement lock is taken, so
    /// concurrent callers racing on the same unseen bucket run `select` once
    /// and all observe the same owner. A failed `select` leaves no entry.
    pub async fn resolve_with<F, Fut>(&self, bucket: &str, select: F) -> Result<usize>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<usize>>,
    {
        if let Some(idx) = self.get(bucket).await {
            return Ok(idx);
        }

        let _guard = self.placement.lock().await;

        if let Some(idx) = self.get(bucket).await {
            debug!("bucket {} placed by a concurrent caller on mount point {}", bucket, idx);
            return Ok(idx);
        }

        let idx = select().await?;
        self.entries.write().await.insert(bucket.to_owned(), idx);
        Ok(idx)
    }

    pub async fn remove(&self, bucket: &str) -> Option<usize> {
        let _guard = self.placement.lock().await;
        self.entries.write().await.remove(bucket)
    }

    pub async fn snapshot(&self) -> HashMap<String, usize> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
