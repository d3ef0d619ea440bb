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

use const_str::concat;

pub const ENV_PREFIX: &str = "MOUNTFS_";

/// Environment variable listing the mount points, in placement priority order.
///
/// - Separators: commas and/or whitespace.
/// - Example: `export MOUNTFS_VOLUMES="/mnt/disk1,/mnt/disk2"`
/// - Note: the first entry also hosts the reserved metadata bucket.
pub const ENV_VOLUMES: &str = concat!(ENV_PREFIX, "VOLUMES");

/// Environment variable overriding the minimum free capacity (bytes) a mount
/// point must exceed to receive new buckets.
///
/// - Example: `export MOUNTFS_MIN_FREE_CAPACITY=4294967296`
pub const ENV_MIN_FREE_CAPACITY: &str = concat!(ENV_PREFIX, "MIN_FREE_CAPACITY");
