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

//! Placement of buckets that have no owner yet.
//!
//! This is a greedy first-fit over the configured order, not load balancing:
//! while bucket creation continues, the first eligible mount point takes every
//! new bucket until its free space drops to the threshold, then the next one
//! does. Free space is probed live on every call.

use crate::error::{Error, Result};
use crate::mount_point::MountPoint;
use crate::store_api::StorageAPI;
use tracing::{debug, info};

/// Returns the index of the first mount point, in configuration order, whose
/// available capacity strictly exceeds `min_free_capacity`.
pub async fn select_mount_point<B: StorageAPI>(mount_points: &[MountPoint<B>], min_free_capacity: u64) -> Result<usize> {
    for mp in mount_points {
        let info = mp.backend.storage_info().await;
        if info.available > min_free_capacity {
            info!("placing new bucket on {} ({} bytes available)", mp.endpoint, info.available);
            return Ok(mp.index);
        }
        debug!(
            "skip {} for placement: {} bytes available, need more than {}",
            mp.endpoint, info.available, min_free_capacity
        );
    }

    Err(Error::NoAvailableDisk)
}
