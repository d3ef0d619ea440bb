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

// Healing is a concern of each backend; the router has nothing to repair.
impl<B: StorageAPI> MountStore<B> {
    pub(super) async fn handle_reload_format(&self, _dry_run: bool) -> Result<()> {
        Err(not_implemented("reload_format"))
    }

    pub(super) async fn handle_heal_format(&self, _dry_run: bool) -> Result<HealResultItem> {
        Err(not_implemented("heal_format"))
    }

    pub(super) async fn handle_heal_bucket(&self, _bucket: &str, _opts: &HealOpts) -> Result<HealResultItem> {
        Err(not_implemented("heal_bucket"))
    }

    pub(super) async fn handle_heal_object(
        &self,
        _bucket: &str,
        _object: &str,
        _version_id: &str,
        _opts: &HealOpts,
    ) -> Result<HealResultItem> {
        Err(not_implemented("heal_object"))
    }

    pub(super) async fn handle_heal_objects(&self, _bucket: &str, _prefix: &str, _opts: &HealOpts) -> Result<()> {
        Err(not_implemented("heal_objects"))
    }

    pub(super) async fn handle_list_buckets_heal(&self) -> Result<Vec<BucketInfo>> {
        Err(not_implemented("list_buckets_heal"))
    }

    pub(super) async fn handle_list_objects_heal(
        &self,
        _bucket: &str,
        _prefix: &str,
        _marker: Option<String>,
        _delimiter: Option<String>,
        _max_keys: i32,
    ) -> Result<ListObjectsInfo> {
        Err(not_implemented("list_objects_heal"))
    }
}
