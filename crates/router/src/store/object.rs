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
    pub(super) async fn handle_get_object_reader(
        &self,
        bucket: &str,
        object: &str,
        range: Option<HTTPRangeSpec>,
        h: HeaderMap,
        opts: &ObjectOptions,
    ) -> Result<GetObjectReader> {
        let mp = self.lookup(bucket).await?;
        mp.backend.get_object_reader(bucket, object, range, h, opts).await
    }

    pub(super) async fn handle_put_object(
        &self,
        bucket: &str,
        object: &str,
        data: &mut PutObjReader,
        opts: &ObjectOptions,
    ) -> Result<ObjectInfo> {
        let mp = self.resolve(bucket).await?;
        let mut info = mp.backend.put_object(bucket, object, data, opts).await?;
        annotate_endpoint(&mut info, &mp.endpoint);
        Ok(info)
    }

    pub(super) async fn handle_get_object_info(&self, bucket: &str, object: &str, opts: &ObjectOptions) -> Result<ObjectInfo> {
        let mp = self.lookup(bucket).await?;
        let mut info = mp.backend.get_object_info(bucket, object, opts).await?;
        annotate_endpoint(&mut info, &mp.endpoint);
        Ok(info)
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) async fn handle_copy_object(
        &self,
        src_bucket: &str,
        src_object: &str,
        dst_bucket: &str,
        dst_object: &str,
        src_info: &mut ObjectInfo,
        src_opts: &ObjectOptions,
        dst_opts: &ObjectOptions,
    ) -> Result<ObjectInfo> {
        let mp = self.lookup_copy(src_bucket, dst_bucket).await?;
        let mut info = mp
            .backend
            .copy_object(src_bucket, src_object, dst_bucket, dst_object, src_info, src_opts, dst_opts)
            .await?;
        annotate_endpoint(&mut info, &mp.endpoint);
        Ok(info)
    }

    pub(super) async fn handle_delete_object(&self, bucket: &str, object: &str, opts: ObjectOptions) -> Result<ObjectInfo> {
        let mp = self.lookup(bucket).await?;
        mp.backend.delete_object(bucket, object, opts).await
    }

    pub(super) async fn handle_delete_objects(
        &self,
        bucket: &str,
        objects: Vec<ObjectToDelete>,
        opts: ObjectOptions,
    ) -> Result<(Vec<DeletedObject>, Vec<Option<Error>>)> {
        let mp = self.lookup(bucket).await?;
        mp.backend.delete_objects(bucket, objects, opts).await
    }

    pub(super) async fn handle_list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        marker: Option<String>,
        delimiter: Option<String>,
        max_keys: i32,
    ) -> Result<ListObjectsInfo> {
        let mp = self.lookup(bucket).await?;
        mp.backend.list_objects(bucket, prefix, marker, delimiter, max_keys).await
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) async fn handle_list_objects_v2(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
        delimiter: Option<String>,
        max_keys: i32,
        fetch_owner: bool,
        start_after: Option<String>,
    ) -> Result<ListObjectsV2Info> {
        let mp = self.lookup(bucket).await?;
        mp.backend
            .list_objects_v2(bucket, prefix, continuation_token, delimiter, max_keys, fetch_owner, start_after)
            .await
    }
}
