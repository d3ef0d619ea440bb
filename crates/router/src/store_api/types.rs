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

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MakeBucketOptions {
    pub lock_enabled: bool,
    pub versioning_enabled: bool,
    pub force_create: bool, // Create buckets even if they are already created.
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Debug, Default, Clone)]
pub struct DeleteBucketOptions {
    pub force: bool, // Force deletion
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BucketOptions {
    pub deleted: bool,
    pub cached: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketInfo {
    pub name: String,
    pub created: Option<OffsetDateTime>,
    pub versioning: bool,
    pub object_locking: bool,
    // Endpoint of the mount point that owns the bucket, filled in by the router.
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ObjectOptions {
    pub mod_time: Option<OffsetDateTime>,
    pub part_number: Option<usize>,
    pub version_id: Option<String>,
    pub versioned: bool,
    pub no_lock: bool,
    pub user_defined: HashMap<String, String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectPartInfo {
    pub etag: String,
    pub number: usize,
    pub size: usize,
    pub actual_size: i64,
    pub mod_time: Option<OffsetDateTime>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ObjectInfo {
    pub bucket: String,
    pub name: String,
    pub mod_time: Option<OffsetDateTime>,
    pub size: i64,
    pub actual_size: i64,
    pub is_dir: bool,
    pub user_defined: HashMap<String, String>,
    pub version_id: Option<Uuid>,
    pub delete_marker: bool,
    pub parts: Vec<ObjectPartInfo>,
    pub is_latest: bool,
    pub content_type: Option<String>,
    pub content_encoding: Option<String>,
    pub etag: Option<String>,
    pub storage_class: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct MultipartUploadResult {
    pub upload_id: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PartInfo {
    pub part_num: usize,
    pub last_mod: Option<OffsetDateTime>,
    pub size: usize,
    pub etag: Option<String>,
    pub actual_size: i64,
}

#[derive(Debug, Clone, Default)]
pub struct CompletePart {
    pub part_num: usize,
    pub etag: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ListObjectsInfo {
    // Indicates whether the returned list objects response is truncated.
    pub is_truncated: bool,

    // When response is truncated, the key to use as marker in the subsequent request.
    pub next_marker: Option<String>,

    pub objects: Vec<ObjectInfo>,

    pub prefixes: Vec<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ListObjectsV2Info {
    pub is_truncated: bool,

    pub continuation_token: Option<String>,
    pub next_continuation_token: Option<String>,

    pub objects: Vec<ObjectInfo>,

    pub prefixes: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MultipartInfo {
    // Name of the bucket.
    pub bucket: String,

    // Name of the object.
    pub object: String,

    // Upload ID identifying the multipart upload whose parts are being listed.
    pub upload_id: String,

    // Date and time at which the multipart upload was initiated.
    pub initiated: Option<OffsetDateTime>,

    // Any metadata set during InitMultipartUpload.
    pub user_defined: HashMap<String, String>,
}

/// ListMultipartsInfo - represents bucket resources for incomplete multipart uploads.
#[derive(Debug, Clone, Default)]
pub struct ListMultipartsInfo {
    pub key_marker: Option<String>,
    pub upload_id_marker: Option<String>,
    pub next_key_marker: Option<String>,
    pub next_upload_id_marker: Option<String>,
    pub max_uploads: usize,
    pub is_truncated: bool,
    pub uploads: Vec<MultipartInfo>,
    pub prefix: String,
    pub delimiter: Option<String>,
    pub common_prefixes: Vec<String>,
}

/// ListPartsInfo - represents list of all parts.
#[derive(Debug, Clone, Default)]
pub struct ListPartsInfo {
    /// Name of the bucket.
    pub bucket: String,

    /// Name of the object.
    pub object: String,

    /// Upload ID identifying the multipart upload whose parts are being listed.
    pub upload_id: String,

    /// Part number after which listing begins.
    pub part_number_marker: usize,

    /// When a list is truncated, the value to use for the part-number-marker
    /// request parameter in a subsequent request.
    pub next_part_number_marker: usize,

    /// Maximum number of parts that were allowed in the response.
    pub max_parts: usize,

    /// Indicates whether the returned list of parts is truncated.
    pub is_truncated: bool,

    /// List of all parts.
    pub parts: Vec<PartInfo>,
}

#[derive(Debug, Default, Clone)]
pub struct ObjectToDelete {
    pub object_name: String,
    pub version_id: Option<Uuid>,
}

#[derive(Debug, Default, Clone)]
pub struct DeletedObject {
    pub delete_marker: bool,
    pub object_name: String,
    pub version_id: Option<Uuid>,
    pub found: bool,
}

/// Raw bucket policy document (JSON) as persisted by the owning backend.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BucketPolicy(pub Bytes);

/// Raw bucket lifecycle configuration as persisted by the owning backend.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BucketLifecycle(pub Bytes);
