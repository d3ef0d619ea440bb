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

use crate::error::{Error, Result, StorageError, is_err_bucket_not_found};
use crate::index::BucketIndex;
use crate::mount_point::MountPoint;
use crate::placement::select_mount_point;
use crate::store_api::{
    BucketConfigOperations, BucketInfo, BucketLifecycle, BucketOperations, BucketOptions, BucketPolicy, CompletePart,
    DeleteBucketOptions, DeletedObject, GetObjectReader, HTTPRangeSpec, HealOperations, ListMultipartsInfo, ListObjectsInfo,
    ListObjectsV2Info, ListOperations, ListPartsInfo, MakeBucketOptions, MultipartOperations, MultipartUploadResult, ObjectIO,
    ObjectInfo, ObjectOperations, ObjectOptions, ObjectToDelete, PartInfo, PutObjReader, StorageAPI,
};
use futures::future::join_all;
use http::HeaderMap;
use mountfs_config::{MOUNTFS_META_BUCKET, MountConfig, USER_DEFINED_ENDPOINT, is_meta_bucketname};
use mountfs_madmin::{BackendByte, Disk, HealOpts, HealResultItem, StorageInfo};
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

mod bucket;
mod config;
mod heal;
mod init;
mod multipart;
mod object;

/// Object layer spreading buckets over several single-volume backends.
///
/// Each bucket lives entirely on one mount point. The owner is found at
/// startup by scanning the mount points, or chosen by [`select_mount_point`]
/// the first time a write names an unknown bucket. Ownership only ends when
/// the bucket is deleted through this store.
#[derive(Debug)]
pub struct MountStore<B> {
    pub id: Uuid,
    mount_points: Vec<MountPoint<B>>,
    index: BucketIndex,
    min_free_capacity: u64,
}

impl<B: StorageAPI> MountStore<B> {
    pub fn mount_points(&self) -> &[MountPoint<B>] {
        &self.mount_points
    }

    pub fn min_free_capacity(&self) -> u64 {
        self.min_free_capacity
    }

    /// Endpoint of the mount point owning `bucket`, if the bucket is indexed.
    pub async fn bucket_endpoint(&self, bucket: &str) -> Option<&str> {
        self.index
            .get(bucket)
            .await
            .map(|idx| self.mount_points[idx].endpoint.as_str())
    }

    /// Snapshot of the bucket index as bucket name to endpoint.
    pub async fn indexed_buckets(&self) -> HashMap<String, String> {
        self.index
            .snapshot()
            .await
            .into_iter()
            .map(|(bucket, idx)| (bucket, self.mount_points[idx].endpoint.clone()))
            .collect()
    }

    // Read path: an unknown bucket does not exist, no backend is consulted.
    async fn lookup(&self, bucket: &str) -> Result<&MountPoint<B>> {
        match self.index.get(bucket).await {
            Some(idx) => Ok(&self.mount_points[idx]),
            None => Err(StorageError::BucketNotFound(bucket.to_owned())),
        }
    }

    // Write path: an unknown bucket gets placed.
    async fn resolve(&self, bucket: &str) -> Result<&MountPoint<B>> {
        let idx = if is_meta_bucketname(bucket) {
            // the metadata bucket never leaves the first mount point
            self.index.resolve_with(bucket, || async { Ok(0) }).await?
        } else {
            self.index
                .resolve_with(bucket, || select_mount_point(&self.mount_points, self.min_free_capacity))
                .await?
        };
        Ok(&self.mount_points[idx])
    }

    // Copies run on one backend; both buckets must be owned by it.
    async fn lookup_copy(&self, src_bucket: &str, dst_bucket: &str) -> Result<&MountPoint<B>> {
        let src = self.lookup(src_bucket).await?;
        let dst = self.lookup(dst_bucket).await?;
        if src.index != dst.index {
            warn!(
                "reject copy {} ({}) -> {} ({}): buckets live on different mount points",
                src_bucket, src.endpoint, dst_bucket, dst.endpoint
            );
            return Err(StorageError::CrossMountCopy(src_bucket.to_owned(), dst_bucket.to_owned()));
        }
        Ok(src)
    }

    // Bucket level configuration lives with the metadata bucket, which is
    // always owned by the first mount point.
    async fn meta_mount_point(&self) -> &MountPoint<B> {
        let idx = self.index.get(MOUNTFS_META_BUCKET).await.unwrap_or(0);
        &self.mount_points[idx]
    }
}

fn annotate_endpoint(info: &mut ObjectInfo, endpoint: &str) {
    info.user_defined
        .insert(USER_DEFINED_ENDPOINT.to_owned(), endpoint.to_owned());
}

fn not_implemented(op: &str) -> Error {
    warn!("{} is not supported by the mount point router", op);
    StorageError::NotImplemented
}

#[async_trait::async_trait]
impl<B: StorageAPI> ObjectIO for MountStore<B> {
    #[instrument(level = "debug", skip(self))]
    async fn get_object_reader(
        &self,
        bucket: &str,
        object: &str,
        range: Option<HTTPRangeSpec>,
        h: HeaderMap,
        opts: &ObjectOptions,
    ) -> Result<GetObjectReader> {
        self.handle_get_object_reader(bucket, object, range, h, opts).await
    }

    #[instrument(level = "debug", skip(self, data))]
    async fn put_object(&self, bucket: &str, object: &str, data: &mut PutObjReader, opts: &ObjectOptions) -> Result<ObjectInfo> {
        self.handle_put_object(bucket, object, data, opts).await
    }
}

#[async_trait::async_trait]
impl<B: StorageAPI> BucketOperations for MountStore<B> {
    #[instrument(skip(self))]
    async fn make_bucket(&self, bucket: &str, opts: &MakeBucketOptions) -> Result<()> {
        self.handle_make_bucket(bucket, opts).await
    }

    #[instrument(skip(self))]
    async fn get_bucket_info(&self, bucket: &str, opts: &BucketOptions) -> Result<BucketInfo> {
        self.handle_get_bucket_info(bucket, opts).await
    }

    #[instrument(skip(self))]
    async fn list_bucket(&self, opts: &BucketOptions) -> Result<Vec<BucketInfo>> {
        self.handle_list_bucket(opts).await
    }

    #[instrument(skip(self))]
    async fn delete_bucket(&self, bucket: &str, opts: &DeleteBucketOptions) -> Result<()> {
        self.handle_delete_bucket(bucket, opts).await
    }
}

#[async_trait::async_trait]
impl<B: StorageAPI> ObjectOperations for MountStore<B> {
    #[instrument(skip(self))]
    async fn get_object_info(&self, bucket: &str, object: &str, opts: &ObjectOptions) -> Result<ObjectInfo> {
        self.handle_get_object_info(bucket, object, opts).await
    }

    #[instrument(skip(self, src_info))]
    async fn copy_object(
        &self,
        src_bucket: &str,
        src_object: &str,
        dst_bucket: &str,
        dst_object: &str,
        src_info: &mut ObjectInfo,
        src_opts: &ObjectOptions,
        dst_opts: &ObjectOptions,
    ) -> Result<ObjectInfo> {
        self.handle_copy_object(src_bucket, src_object, dst_bucket, dst_object, src_info, src_opts, dst_opts)
            .await
    }

    #[instrument(skip(self))]
    async fn delete_object(&self, bucket: &str, object: &str, opts: ObjectOptions) -> Result<ObjectInfo> {
        self.handle_delete_object(bucket, object, opts).await
    }

    #[instrument(skip(self, objects))]
    async fn delete_objects(
        &self,
        bucket: &str,
        objects: Vec<ObjectToDelete>,
        opts: ObjectOptions,
    ) -> Result<(Vec<DeletedObject>, Vec<Option<Error>>)> {
        self.handle_delete_objects(bucket, objects, opts).await
    }
}

#[async_trait::async_trait]
impl<B: StorageAPI> ListOperations for MountStore<B> {
    #[instrument(skip(self))]
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        marker: Option<String>,
        delimiter: Option<String>,
        max_keys: i32,
    ) -> Result<ListObjectsInfo> {
        self.handle_list_objects(bucket, prefix, marker, delimiter, max_keys).await
    }

    // @continuation_token marker
    // @start_after as marker when continuation_token empty
    // @delimiter default="/", empty when recursive
    // @max_keys limit
    #[instrument(skip(self))]
    async fn list_objects_v2(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
        delimiter: Option<String>,
        max_keys: i32,
        fetch_owner: bool,
        start_after: Option<String>,
    ) -> Result<ListObjectsV2Info> {
        self.handle_list_objects_v2(bucket, prefix, continuation_token, delimiter, max_keys, fetch_owner, start_after)
            .await
    }
}

#[async_trait::async_trait]
impl<B: StorageAPI> MultipartOperations for MountStore<B> {
    #[instrument(skip(self))]
    async fn list_multipart_uploads(
        &self,
        bucket: &str,
        prefix: &str,
        key_marker: Option<String>,
        upload_id_marker: Option<String>,
        delimiter: Option<String>,
        max_uploads: usize,
    ) -> Result<ListMultipartsInfo> {
        self.handle_list_multipart_uploads(bucket, prefix, key_marker, upload_id_marker, delimiter, max_uploads)
            .await
    }

    #[instrument(skip(self))]
    async fn new_multipart_upload(&self, bucket: &str, object: &str, opts: &ObjectOptions) -> Result<MultipartUploadResult> {
        self.handle_new_multipart_upload(bucket, object, opts).await
    }

    #[instrument(skip(self, src_info))]
    async fn copy_object_part(
        &self,
        src_bucket: &str,
        src_object: &str,
        dst_bucket: &str,
        dst_object: &str,
        upload_id: &str,
        part_id: usize,
        start_offset: i64,
        length: i64,
        src_info: &ObjectInfo,
        src_opts: &ObjectOptions,
        dst_opts: &ObjectOptions,
    ) -> Result<PartInfo> {
        self.handle_copy_object_part(
            src_bucket,
            src_object,
            dst_bucket,
            dst_object,
            upload_id,
            part_id,
            start_offset,
            length,
            src_info,
            src_opts,
            dst_opts,
        )
        .await
    }

    #[instrument(skip(self, data))]
    async fn put_object_part(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        part_id: usize,
        data: &mut PutObjReader,
        opts: &ObjectOptions,
    ) -> Result<PartInfo> {
        self.handle_put_object_part(bucket, object, upload_id, part_id, data, opts)
            .await
    }

    #[instrument(skip(self))]
    async fn list_object_parts(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        part_number_marker: Option<usize>,
        max_parts: usize,
        opts: &ObjectOptions,
    ) -> Result<ListPartsInfo> {
        self.handle_list_object_parts(bucket, object, upload_id, part_number_marker, max_parts, opts)
            .await
    }

    #[instrument(skip(self))]
    async fn abort_multipart_upload(&self, bucket: &str, object: &str, upload_id: &str, opts: &ObjectOptions) -> Result<()> {
        self.handle_abort_multipart_upload(bucket, object, upload_id, opts).await
    }

    #[instrument(skip(self, uploaded_parts))]
    async fn complete_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        uploaded_parts: Vec<CompletePart>,
        opts: &ObjectOptions,
    ) -> Result<ObjectInfo> {
        self.handle_complete_multipart_upload(bucket, object, upload_id, uploaded_parts, opts)
            .await
    }
}

#[async_trait::async_trait]
impl<B: StorageAPI> HealOperations for MountStore<B> {
    #[instrument(skip(self))]
    async fn reload_format(&self, dry_run: bool) -> Result<()> {
        self.handle_reload_format(dry_run).await
    }

    #[instrument(skip(self))]
    async fn heal_format(&self, dry_run: bool) -> Result<HealResultItem> {
        self.handle_heal_format(dry_run).await
    }

    #[instrument(skip(self))]
    async fn heal_bucket(&self, bucket: &str, opts: &HealOpts) -> Result<HealResultItem> {
        self.handle_heal_bucket(bucket, opts).await
    }

    #[instrument(skip(self))]
    async fn heal_object(&self, bucket: &str, object: &str, version_id: &str, opts: &HealOpts) -> Result<HealResultItem> {
        self.handle_heal_object(bucket, object, version_id, opts).await
    }

    #[instrument(skip(self))]
    async fn heal_objects(&self, bucket: &str, prefix: &str, opts: &HealOpts) -> Result<()> {
        self.handle_heal_objects(bucket, prefix, opts).await
    }

    #[instrument(skip(self))]
    async fn list_buckets_heal(&self) -> Result<Vec<BucketInfo>> {
        self.handle_list_buckets_heal().await
    }

    #[instrument(skip(self))]
    async fn list_objects_heal(
        &self,
        bucket: &str,
        prefix: &str,
        marker: Option<String>,
        delimiter: Option<String>,
        max_keys: i32,
    ) -> Result<ListObjectsInfo> {
        self.handle_list_objects_heal(bucket, prefix, marker, delimiter, max_keys)
            .await
    }
}

#[async_trait::async_trait]
impl<B: StorageAPI> BucketConfigOperations for MountStore<B> {
    #[instrument(skip(self, policy))]
    async fn set_bucket_policy(&self, bucket: &str, policy: &BucketPolicy) -> Result<()> {
        self.handle_set_bucket_policy(bucket, policy).await
    }

    #[instrument(skip(self))]
    async fn get_bucket_policy(&self, bucket: &str) -> Result<BucketPolicy> {
        self.handle_get_bucket_policy(bucket).await
    }

    #[instrument(skip(self))]
    async fn delete_bucket_policy(&self, bucket: &str) -> Result<()> {
        self.handle_delete_bucket_policy(bucket).await
    }

    #[instrument(skip(self, lifecycle))]
    async fn set_bucket_lifecycle(&self, bucket: &str, lifecycle: &BucketLifecycle) -> Result<()> {
        self.handle_set_bucket_lifecycle(bucket, lifecycle).await
    }

    #[instrument(skip(self))]
    async fn get_bucket_lifecycle(&self, bucket: &str) -> Result<BucketLifecycle> {
        self.handle_get_bucket_lifecycle(bucket).await
    }

    #[instrument(skip(self))]
    async fn delete_bucket_lifecycle(&self, bucket: &str) -> Result<()> {
        self.handle_delete_bucket_lifecycle(bucket).await
    }
}

#[async_trait::async_trait]
impl<B: StorageAPI> StorageAPI for MountStore<B> {
    #[instrument(skip(self))]
    async fn storage_info(&self) -> StorageInfo {
        self.handle_storage_info().await
    }

    #[instrument(skip(self))]
    async fn shutdown(&self) -> Result<()> {
        self.handle_shutdown().await
    }

    #[instrument(skip(self))]
    async fn list_logical_buckets(&self) -> Result<Vec<BucketInfo>> {
        Err(not_implemented("list_logical_buckets"))
    }

    fn is_notification_supported(&self) -> bool {
        self.mount_points.iter().all(|mp| mp.backend.is_notification_supported())
    }

    fn is_listen_bucket_supported(&self) -> bool {
        self.mount_points.iter().all(|mp| mp.backend.is_listen_bucket_supported())
    }

    fn is_encryption_supported(&self) -> bool {
        self.mount_points.iter().all(|mp| mp.backend.is_encryption_supported())
    }

    fn is_compression_supported(&self) -> bool {
        self.mount_points.iter().all(|mp| mp.backend.is_compression_supported())
    }
}
