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

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendByte {
    #[default]
    Unknown,
    FS,
    Erasure,
}

/// Capacity report of one drive, as seen by the layer that owns it.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Disk {
    pub endpoint: String,
    pub drive_path: String,
    pub state: String,
    pub total_space: u64,
    pub used_space: u64,
    pub available_space: u64,
    pub local: bool,
    // Index of the mount point that reported this drive, -1 when unassigned.
    pub pool_index: i32,
}

/// StorageInfo is the capacity probe result of a storage layer.
///
/// `total`, `used` and `available` are bytes. `disks` optionally breaks the
/// totals down per drive.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageInfo {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub disks: Vec<Disk>,
    pub backend: BackendByte,
}

impl StorageInfo {
    pub fn new(total: u64, used: u64, available: u64) -> Self {
        Self {
            total,
            used,
            available,
            ..Default::default()
        }
    }

    /// Adds another probe result into this one, element-wise.
    pub fn merge(&mut self, other: StorageInfo) {
        self.total = self.total.saturating_add(other.total);
        self.used = self.used.saturating_add(other.used);
        self.available = self.available.saturating_add(other.available);
        self.disks.extend(other.disks);
        if self.backend == BackendByte::Unknown {
            self.backend = other.backend;
        }
    }
}
