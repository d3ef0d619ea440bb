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

/// Application name
/// Default value: mountfs
pub const APP_NAME: &str = "mountfs";

/// Reserved bucket holding internal configuration (bucket policies,
/// lifecycle documents, IAM state).
///
/// The directory with this name is never indexed as a user bucket, and the
/// bucket itself is always served by the first configured mount point.
/// Default value: .mountfs.sys
pub const MOUNTFS_META_BUCKET: &str = ".mountfs.sys";

/// User-defined metadata key carrying the endpoint of the mount point that
/// physically stores an object.
/// Default value: endpoint
pub const USER_DEFINED_ENDPOINT: &str = "endpoint";

/// Returns true when `bucket` names the reserved metadata bucket.
pub fn is_meta_bucketname(bucket: &str) -> bool {
    bucket == MOUNTFS_META_BUCKET
}
