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

use super::*;

impl<B: StorageAPI> MountStore<B> {
    /// Opens one backend per configured volume, then builds the bucket index
    /// from what is already on disk.
    ///
    /// Any backend that fails to open aborts startup; backends opened before
    /// it are dropped.
    #[allow(clippy::new_ret_no_self)]
    #[instrument(level = "debug", skip(cfg, open))]
    pub async fn new<F, Fut>(cfg: &MountConfig, open: F) -> Result<Arc<Self>>
    where
        F: Fn(PathBuf) -> Fut,
        Fut: Future<Output = Result<B>>,
    {
        cfg.validate()?;

        let mut backends = Vec::with_capacity(cfg.volumes.len());
        for path in cfg.volumes.iter() {
            let backend = open(path.clone()).await.map_err(|err| {
                error!("open backend for {} failed: {}", path.display(), err);
                err
            })?;
            backends.push((path.clone(), backend));
        }

        Self::from_backends(backends, cfg.min_free_capacity).await
    }

    /// Builds the store over already opened backends, in priority order.
    #[instrument(level = "debug", skip(backends))]
    pub async fn from_backends(backends: Vec<(PathBuf, B)>, min_free_capacity: u64) -> Result<Arc<Self>> {
        if backends.is_empty() {
            return Err(StorageError::NoMountPoints);
        }

        let mount_points: Vec<MountPoint<B>> = backends
            .into_iter()
            .enumerate()
            .map(|(i, (path, backend))| MountPoint::new(i, path, Arc::new(backend)))
            .collect();

        let entries = build_index(&mount_points).await?;

        info!(
            "mount point router ready: {} mount points, {} buckets indexed",
            mount_points.len(),
            entries.len()
        );

        Ok(Arc::new(Self {
            id: Uuid::new_v4(),
            mount_points,
            index: BucketIndex::new(entries),
            min_free_capacity,
        }))
    }
}

/// Every top-level directory of a mount point is a bucket owned by it. The
/// metadata bucket is skipped during the scan and pinned to the first mount
/// point afterwards.
async fn build_index<B>(mount_points: &[MountPoint<B>]) -> Result<HashMap<String, usize>> {
    let mut entries: HashMap<String, usize> = HashMap::new();

    for mp in mount_points.iter() {
        let mut dir = tokio::fs::read_dir(&mp.path).await.map_err(|err| {
            error!("read mount point {} failed: {}", mp.endpoint, err);
            StorageError::other(format!("read mount point {}: {}", mp.endpoint, err))
        })?;

        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(name) => {
                    warn!("skip non utf-8 directory {:?} on {}", name, mp.endpoint);
                    continue;
                }
            };

            if is_meta_bucketname(&name) {
                continue;
            }

            if let Some(&owner) = entries.get(&name) {
                let first = mount_points[owner].endpoint.clone();
                error!("bucket {} found on both {} and {}", name, first, mp.endpoint);
                return Err(StorageError::DuplicateBucket(name, first, mp.endpoint.clone()));
            }

            debug!("index bucket {} on {}", name, mp.endpoint);
            entries.insert(name, mp.index);
        }
    }

    entries.insert(MOUNTFS_META_BUCKET.to_owned(), 0);

    Ok(entries)
}
