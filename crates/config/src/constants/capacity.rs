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

pub const GIB: u64 = 1024 * 1024 * 1024;

/// Minimum free capacity a mount point must strictly exceed to be eligible
/// for new bucket placement.
/// Default value: 2 GiB
/// Environment variable: MOUNTFS_MIN_FREE_CAPACITY
pub const DEFAULT_MIN_FREE_CAPACITY: u64 = 2 * GIB;
