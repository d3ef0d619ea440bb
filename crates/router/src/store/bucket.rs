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
    pub(super) async fn handle_make_bucket(&self, bucket: &str, opts: &MakeBucketOptions) -> Result<()> {
        let mp = self.resolve(bucket).await?;
        // A failed create keeps the placement: a concurrent writer may already
        // rely on it.
        mp.backend.make_bucket(bucket, opts).await
    }

    pub(super) async fn handle_get_bucket_info(&self, bucket: &str, opts: &BucketOptions) -> Result<BucketInfo> {
        let mp = self.lookup(bucket).await?;
        let mut info = mp.backend.get_bucket_info(bucket, opts).await?;
        info.endpoint = Some(mp.endpoint.clone());
        Ok(info)
    }

    pub(super) async fn handle_list_bucket(&self, opts: &BucketOptions) -> Result<Vec<BucketInfo>> {
        let mut buckets = Vec::new();
        for mp in self.mount_points.iter() {
            let mut res = mp.backend.list_bucket(opts).await.map_err(|err| {
                error!("list buckets on {} failed: {}", mp.endpoint, err);
                err
            })?;
            buckets.append(&mut res);
        }

        let entries = self.index.snapshot().await;
        for info in buckets.iter_mut() {
            if let Some(&idx) = entries.get(&info.name) {
                info.endpoint = Some(self.mount_points[idx].endpoint.clone());
            }
        }

        Ok(buckets)
    }

    pub(super) async fn handle_delete_bucket(&self, bucket: &str, opts: &DeleteBucketOptions) -> Result<()> {
        let mp = self.lookup(bucket).await?;
        if let Err(err) = mp.backend.delete_bucket(bucket, opts).await {
            // The owner never created it, so the placement left by a failed
            // write is stale.
            if is_err_bucket_not_found(&err) {
                self.index.remove(bucket).await;
                debug!("dropped stale placement of {} on {}", bucket, mp.endpoint);
            }
            return Err(err);
        }

        self.index.remove(bucket).await;
        debug!("bucket {} removed from {}", bucket, mp.endpoint);
        Ok(())
    }

    pub(super) async fn handle_storage_info(&self) -> StorageInfo {
        let futures = self.mount_points.iter().map(|mp| mp.backend.storage_info());
        let results = join_all(futures).await;

        let mut total = StorageInfo {
            backend: BackendByte::FS,
            ..Default::default()
        };

        for (mp, mut info) in self.mount_points.iter().zip(results) {
            if info.disks.is_empty() {
                info.disks.push(Disk {
                    endpoint: mp.endpoint.clone(),
                    drive_path: mp.endpoint.clone(),
                    state: "ok".to_string(),
                    total_space: info.total,
                    used_space: info.used,
                    available_space: info.available,
                    local: true,
                    pool_index: 0,
                });
            }
            for disk in info.disks.iter_mut() {
                disk.pool_index = mp.index as i32;
                if disk.endpoint.is_empty() {
                    disk.endpoint = mp.endpoint.clone();
                }
            }
            total.merge(info);
        }

        total
    }

    pub(super) async fn handle_shutdown(&self) -> Result<()> {
        for mp in self.mount_points.iter() {
            if let Err(err) = mp.backend.shutdown().await {
                error!("shutdown {} failed: {}", mp.endpoint, err);
                return Err(err);
            }
            debug!("mount point {} shut down", mp.endpoint);
        }
        Ok(())
    }
}
