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

//! In-memory single-volume backend used by the router tests.

use crate::error::{Error, Result, StorageError};
use crate::store_api::*;
use bytes::Bytes;
use http::HeaderMap;
use mountfs_madmin::{HealOpts, HealResultItem, StorageInfo};
use std::collections::{BTreeMap, HashMap};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

pub(crate) const GIB: u64 = 1 << 30;

#[derive(Debug, Default)]
pub(crate) struct MockBackend {
    pub path: PathBuf,
    pub total: AtomicU64,
    pub available: AtomicU64,
    pub fail_shutdown: AtomicBool,
    pub fail_list: AtomicBool,
    pub notification: bool,
    calls: Mutex<Vec<String>>,
    buckets: Mutex<BTreeMap<String, ()>>,
    objects: Mutex<HashMap<(String, String), Vec<u8>>>,
    policies: Mutex<HashMap<String, Bytes>>,
}

impl MockBackend {
    /// Backend over `path` with `available` free bytes out of ten times as many.
    /// Directories already under `path` are reported as buckets.
    pub fn new(path: impl AsRef<Path>, available: u64) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut buckets = BTreeMap::new();
        if let Ok(rd) = std::fs::read_dir(&path) {
            for entry in rd.flatten() {
                if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                    buckets.insert(entry.file_name().to_string_lossy().into_owned(), ());
                }
            }
        }
        Self {
            path,
            total: AtomicU64::new(available.saturating_mul(10)),
            available: AtomicU64::new(available),
            buckets: Mutex::new(buckets),
            notification: true,
            ..Default::default()
        }
    }

    pub fn with_notification(mut self, supported: bool) -> Self {
        self.notification = supported;
        self
    }

    pub fn set_available(&self, available: u64) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded calls, ignoring capacity probes.
    pub fn data_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c != "storage_info")
            .collect()
    }

    pub fn has_bucket(&self, bucket: &str) -> bool {
        self.buckets.lock().unwrap().contains_key(bucket)
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn check_bucket(&self, bucket: &str) -> Result<()> {
        if self.has_bucket(bucket) {
            Ok(())
        } else {
            Err(StorageError::BucketNotFound(bucket.to_owned()))
        }
    }

    fn object_info(bucket: &str, object: &str, size: usize) -> ObjectInfo {
        ObjectInfo {
            bucket: bucket.to_owned(),
            name: object.to_owned(),
            size: size as i64,
            actual_size: size as i64,
            is_latest: true,
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl ObjectIO for MockBackend {
    async fn get_object_reader(
        &self,
        bucket: &str,
        object: &str,
        _range: Option<HTTPRangeSpec>,
        _h: HeaderMap,
        _opts: &ObjectOptions,
    ) -> Result<GetObjectReader> {
        self.record(format!("get_object_reader:{bucket}/{object}"));
        self.check_bucket(bucket)?;
        let data = self
            .objects
            .lock()
            .unwrap()
            .get(&(bucket.to_owned(), object.to_owned()))
            .cloned()
            .ok_or_else(|| StorageError::ObjectNotFound(bucket.to_owned(), object.to_owned()))?;
        let info = Self::object_info(bucket, object, data.len());
        Ok(GetObjectReader::new(Box::new(Cursor::new(data)), info))
    }

    async fn put_object(&self, bucket: &str, object: &str, data: &mut PutObjReader, opts: &ObjectOptions) -> Result<ObjectInfo> {
        self.record(format!("put_object:{bucket}/{object}"));
        self.check_bucket(bucket)?;
        let body = data.read_all().await?;
        let mut info = Self::object_info(bucket, object, body.len());
        info.user_defined = opts.user_defined.clone();
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_owned(), object.to_owned()), body);
        Ok(info)
    }
}

#[async_trait::async_trait]
impl BucketOperations for MockBackend {
    async fn make_bucket(&self, bucket: &str, _opts: &MakeBucketOptions) -> Result<()> {
        self.record(format!("make_bucket:{bucket}"));
        let mut buckets = self.buckets.lock().unwrap();
        if buckets.contains_key(bucket) {
            return Err(StorageError::BucketExists(bucket.to_owned()));
        }
        buckets.insert(bucket.to_owned(), ());
        Ok(())
    }

    async fn get_bucket_info(&self, bucket: &str, _opts: &BucketOptions) -> Result<BucketInfo> {
        self.record(format!("get_bucket_info:{bucket}"));
        self.check_bucket(bucket)?;
        Ok(BucketInfo {
            name: bucket.to_owned(),
            ..Default::default()
        })
    }

    async fn list_bucket(&self, _opts: &BucketOptions) -> Result<Vec<BucketInfo>> {
        self.record("list_bucket");
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(StorageError::other("list failed"));
        }
        Ok(self
            .buckets
            .lock()
            .unwrap()
            .keys()
            .map(|name| BucketInfo {
                name: name.clone(),
                endpoint: Some("backend-reported".to_string()),
                ..Default::default()
            })
            .collect())
    }

    async fn delete_bucket(&self, bucket: &str, _opts: &DeleteBucketOptions) -> Result<()> {
        self.record(format!("delete_bucket:{bucket}"));
        self.check_bucket(bucket)?;
        if self.objects.lock().unwrap().keys().any(|(b, _)| b == bucket) {
            return Err(StorageError::BucketNotEmpty(bucket.to_owned()));
        }
        self.buckets.lock().unwrap().remove(bucket);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ObjectOperations for MockBackend {
    async fn get_object_info(&self, bucket: &str, object: &str, _opts: &ObjectOptions) -> Result<ObjectInfo> {
        self.record(format!("get_object_info:{bucket}/{object}"));
        self.check_bucket(bucket)?;
        let objects = self.objects.lock().unwrap();
        let data = objects
            .get(&(bucket.to_owned(), object.to_owned()))
            .ok_or_else(|| StorageError::ObjectNotFound(bucket.to_owned(), object.to_owned()))?;
        Ok(Self::object_info(bucket, object, data.len()))
    }

    async fn copy_object(
        &self,
        src_bucket: &str,
        src_object: &str,
        dst_bucket: &str,
        dst_object: &str,
        _src_info: &mut ObjectInfo,
        _src_opts: &ObjectOptions,
        _dst_opts: &ObjectOptions,
    ) -> Result<ObjectInfo> {
        self.record(format!("copy_object:{src_bucket}/{src_object}->{dst_bucket}/{dst_object}"));
        self.check_bucket(src_bucket)?;
        self.check_bucket(dst_bucket)?;
        let mut objects = self.objects.lock().unwrap();
        let data = objects
            .get(&(src_bucket.to_owned(), src_object.to_owned()))
            .cloned()
            .ok_or_else(|| StorageError::ObjectNotFound(src_bucket.to_owned(), src_object.to_owned()))?;
        let info = Self::object_info(dst_bucket, dst_object, data.len());
        objects.insert((dst_bucket.to_owned(), dst_object.to_owned()), data);
        Ok(info)
    }

    async fn delete_object(&self, bucket: &str, object: &str, _opts: ObjectOptions) -> Result<ObjectInfo> {
        self.record(format!("delete_object:{bucket}/{object}"));
        self.check_bucket(bucket)?;
        match self.objects.lock().unwrap().remove(&(bucket.to_owned(), object.to_owned())) {
            Some(data) => Ok(Self::object_info(bucket, object, data.len())),
            None => Err(StorageError::ObjectNotFound(bucket.to_owned(), object.to_owned())),
        }
    }

    async fn delete_objects(
        &self,
        bucket: &str,
        objects: Vec<ObjectToDelete>,
        _opts: ObjectOptions,
    ) -> Result<(Vec<DeletedObject>, Vec<Option<Error>>)> {
        self.record(format!("delete_objects:{bucket}"));
        self.check_bucket(bucket)?;
        let mut store = self.objects.lock().unwrap();
        let mut deleted = Vec::with_capacity(objects.len());
        let mut errs = Vec::with_capacity(objects.len());
        for obj in objects {
            let found = store.remove(&(bucket.to_owned(), obj.object_name.clone())).is_some();
            deleted.push(DeletedObject {
                object_name: obj.object_name,
                version_id: obj.version_id,
                found,
                ..Default::default()
            });
            errs.push(None);
        }
        Ok((deleted, errs))
    }
}

#[async_trait::async_trait]
impl ListOperations for MockBackend {
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        _marker: Option<String>,
        _delimiter: Option<String>,
        _max_keys: i32,
    ) -> Result<ListObjectsInfo> {
        self.record(format!("list_objects:{bucket}"));
        self.check_bucket(bucket)?;
        let mut objects: Vec<ObjectInfo> = self
            .objects
            .lock()
            .unwrap()
            .iter()
            .filter(|((b, o), _)| b == bucket && o.starts_with(prefix))
            .map(|((b, o), data)| Self::object_info(b, o, data.len()))
            .collect();
        objects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(ListObjectsInfo {
            objects,
            ..Default::default()
        })
    }

    async fn list_objects_v2(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
        delimiter: Option<String>,
        max_keys: i32,
        _fetch_owner: bool,
        _start_after: Option<String>,
    ) -> Result<ListObjectsV2Info> {
        let res = self.list_objects(bucket, prefix, None, delimiter, max_keys).await?;
        Ok(ListObjectsV2Info {
            continuation_token,
            objects: res.objects,
            ..Default::default()
        })
    }
}

#[async_trait::async_trait]
impl MultipartOperations for MockBackend {
    async fn list_multipart_uploads(
        &self,
        bucket: &str,
        prefix: &str,
        _key_marker: Option<String>,
        _upload_id_marker: Option<String>,
        _delimiter: Option<String>,
        max_uploads: usize,
    ) -> Result<ListMultipartsInfo> {
        self.record(format!("list_multipart_uploads:{bucket}"));
        self.check_bucket(bucket)?;
        Ok(ListMultipartsInfo {
            max_uploads,
            prefix: prefix.to_owned(),
            ..Default::default()
        })
    }

    async fn new_multipart_upload(&self, bucket: &str, object: &str, _opts: &ObjectOptions) -> Result<MultipartUploadResult> {
        self.record(format!("new_multipart_upload:{bucket}/{object}"));
        self.check_bucket(bucket)?;
        Ok(MultipartUploadResult {
            upload_id: "upload-1".to_string(),
        })
    }

    async fn copy_object_part(
        &self,
        src_bucket: &str,
        src_object: &str,
        dst_bucket: &str,
        dst_object: &str,
        _upload_id: &str,
        part_id: usize,
        _start_offset: i64,
        length: i64,
        _src_info: &ObjectInfo,
        _src_opts: &ObjectOptions,
        _dst_opts: &ObjectOptions,
    ) -> Result<PartInfo> {
        self.record(format!("copy_object_part:{src_bucket}/{src_object}->{dst_bucket}/{dst_object}"));
        Ok(PartInfo {
            part_num: part_id,
            size: length.max(0) as usize,
            ..Default::default()
        })
    }

    async fn put_object_part(
        &self,
        bucket: &str,
        object: &str,
        _upload_id: &str,
        part_id: usize,
        data: &mut PutObjReader,
        _opts: &ObjectOptions,
    ) -> Result<PartInfo> {
        self.record(format!("put_object_part:{bucket}/{object}"));
        self.check_bucket(bucket)?;
        let body = data.read_all().await?;
        Ok(PartInfo {
            part_num: part_id,
            size: body.len(),
            actual_size: body.len() as i64,
            ..Default::default()
        })
    }

    async fn list_object_parts(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        _part_number_marker: Option<usize>,
        max_parts: usize,
        _opts: &ObjectOptions,
    ) -> Result<ListPartsInfo> {
        self.record(format!("list_object_parts:{bucket}/{object}"));
        Ok(ListPartsInfo {
            bucket: bucket.to_owned(),
            object: object.to_owned(),
            upload_id: upload_id.to_owned(),
            max_parts,
            ..Default::default()
        })
    }

    async fn abort_multipart_upload(&self, bucket: &str, object: &str, _upload_id: &str, _opts: &ObjectOptions) -> Result<()> {
        self.record(format!("abort_multipart_upload:{bucket}/{object}"));
        Ok(())
    }

    async fn complete_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        _upload_id: &str,
        uploaded_parts: Vec<CompletePart>,
        _opts: &ObjectOptions,
    ) -> Result<ObjectInfo> {
        self.record(format!("complete_multipart_upload:{bucket}/{object}"));
        self.check_bucket(bucket)?;
        let mut info = Self::object_info(bucket, object, 0);
        info.parts = uploaded_parts
            .iter()
            .map(|p| ObjectPartInfo {
                number: p.part_num,
                ..Default::default()
            })
            .collect();
        Ok(info)
    }
}

#[async_trait::async_trait]
impl HealOperations for MockBackend {
    async fn reload_format(&self, _dry_run: bool) -> Result<()> {
        self.record("reload_format");
        Ok(())
    }

    async fn heal_format(&self, _dry_run: bool) -> Result<HealResultItem> {
        self.record("heal_format");
        Ok(HealResultItem::default())
    }

    async fn heal_bucket(&self, bucket: &str, _opts: &HealOpts) -> Result<HealResultItem> {
        self.record(format!("heal_bucket:{bucket}"));
        Ok(HealResultItem::default())
    }

    async fn heal_object(&self, bucket: &str, object: &str, _version_id: &str, _opts: &HealOpts) -> Result<HealResultItem> {
        self.record(format!("heal_object:{bucket}/{object}"));
        Ok(HealResultItem::default())
    }

    async fn heal_objects(&self, bucket: &str, _prefix: &str, _opts: &HealOpts) -> Result<()> {
        self.record(format!("heal_objects:{bucket}"));
        Ok(())
    }

    async fn list_buckets_heal(&self) -> Result<Vec<BucketInfo>> {
        self.record("list_buckets_heal");
        Ok(Vec::new())
    }

    async fn list_objects_heal(
        &self,
        bucket: &str,
        _prefix: &str,
        _marker: Option<String>,
        _delimiter: Option<String>,
        _max_keys: i32,
    ) -> Result<ListObjectsInfo> {
        self.record(format!("list_objects_heal:{bucket}"));
        Ok(ListObjectsInfo::default())
    }
}

#[async_trait::async_trait]
impl BucketConfigOperations for MockBackend {
    async fn set_bucket_policy(&self, bucket: &str, policy: &BucketPolicy) -> Result<()> {
        self.record(format!("set_bucket_policy:{bucket}"));
        self.policies
            .lock()
            .unwrap()
            .insert(format!("policy/{bucket}"), policy.0.clone());
        Ok(())
    }

    async fn get_bucket_policy(&self, bucket: &str) -> Result<BucketPolicy> {
        self.record(format!("get_bucket_policy:{bucket}"));
        self.policies
            .lock()
            .unwrap()
            .get(&format!("policy/{bucket}"))
            .cloned()
            .map(BucketPolicy)
            .ok_or(StorageError::ConfigNotFound)
    }

    async fn delete_bucket_policy(&self, bucket: &str) -> Result<()> {
        self.record(format!("delete_bucket_policy:{bucket}"));
        self.policies.lock().unwrap().remove(&format!("policy/{bucket}"));
        Ok(())
    }

    async fn set_bucket_lifecycle(&self, bucket: &str, lifecycle: &BucketLifecycle) -> Result<()> {
        self.record(format!("set_bucket_lifecycle:{bucket}"));
        self.policies
            .lock()
            .unwrap()
            .insert(format!("lifecycle/{bucket}"), lifecycle.0.clone());
        Ok(())
    }

    async fn get_bucket_lifecycle(&self, bucket: &str) -> Result<BucketLifecycle> {
        self.record(format!("get_bucket_lifecycle:{bucket}"));
        self.policies
            .lock()
            .unwrap()
            .get(&format!("lifecycle/{bucket}"))
            .cloned()
            .map(BucketLifecycle)
            .ok_or(StorageError::ConfigNotFound)
    }

    async fn delete_bucket_lifecycle(&self, bucket: &str) -> Result<()> {
        self.record(format!("delete_bucket_lifecycle:{bucket}"));
        self.policies.lock().unwrap().remove(&format!("lifecycle/{bucket}"));
        Ok(())
    }
}

#[async_trait::async_trait]
impl StorageAPI for MockBackend {
    async fn storage_info(&self) -> StorageInfo {
        self.record("storage_info");
        let total = self.total.load(Ordering::SeqCst);
        let available = self.available.load(Ordering::SeqCst);
        StorageInfo::new(total, total.saturating_sub(available), available)
    }

    async fn shutdown(&self) -> Result<()> {
        self.record("shutdown");
        if self.fail_shutdown.load(Ordering::SeqCst) {
            return Err(StorageError::other(format!("shutdown {} failed", self.path.display())));
        }
        Ok(())
    }

    fn is_notification_supported(&self) -> bool {
        self.notification
    }

    fn is_listen_bucket_supported(&self) -> bool {
        true
    }

    fn is_encryption_supported(&self) -> bool {
        true
    }

    fn is_compression_supported(&self) -> bool {
        true
    }
}
