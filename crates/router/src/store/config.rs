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
    pub(super) async fn handle_set_bucket_policy(&self, bucket: &str, policy: &BucketPolicy) -> Result<()> {
        self.meta_mount_point().await.backend.set_bucket_policy(bucket, policy).await
    }

    pub(super) async fn handle_get_bucket_policy(&self, bucket: &str) -> Result<BucketPolicy> {
        self.meta_mount_point().await.backend.get_bucket_policy(bucket).await
    }

    pub(super) async fn handle_delete_bucket_policy(&self, bucket: &str) -> Result<()> {
        self.meta_mount_point().await.backend.delete_bucket_policy(bucket).await
    }

    pub(super) async fn handle_set_bucket_lifecycle(&self, bucket: &str, lifecycle: &BucketLifecycle) -> Result<()> {
        self.meta_mount_point()
            .await
            .backend
            .set_bucket_lifecycle(bucket, lifecycle)
            .await
    }

    pub(super) async fn handle_get_bucket_lifecycle(&self, bucket: &str) -> Result<BucketLifecycle> {
        self.meta_mount_point().await.backend.get_bucket_lifecycle(bucket).await
    }

    pub(super) async fn handle_delete_bucket_lifecycle(&self, bucket: &str) -> Result<()> {
        self.meta_mount_point().await.backend.delete_bucket_lifecycle(bucket).await
    }
}
