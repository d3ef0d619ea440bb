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
    pub(super) async fn handle_list_multipart_uploads(
        &self,
        bucket: &str,
        prefix: &str,
        key_marker: Option<String>,
        upload_id_marker: Option<String>,
        delimiter: Option<String>,
        max_uploads: usize,
    ) -> Result<ListMultipartsInfo> {
        let mp = self.lookup(bucket).await?;
        mp.backend
            .list_multipart_uploads(bucket, prefix, key_marker, upload_id_marker, delimiter, max_uploads)
            .await
    }

    pub(super) async fn handle_new_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        opts: &ObjectOptions,
    ) -> Result<MultipartUploadResult> {
        let mp = self.resolve(bucket).await?;
        mp.backend.new_multipart_upload(bucket, object, opts).await
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) async fn handle_copy_object_part(
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
        let mp = self.lookup_copy(src_bucket, dst_bucket).await?;
        mp.backend
            .copy_object_part(
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

    pub(super) async fn handle_put_object_part(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        part_id: usize,
        data: &mut PutObjReader,
        opts: &ObjectOptions,
    ) -> Result<PartInfo> {
        let mp = self.resolve(bucket).await?;
        mp.backend
            .put_object_part(bucket, object, upload_id, part_id, data, opts)
            .await
    }

    pub(super) async fn handle_list_object_parts(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        part_number_marker: Option<usize>,
        max_parts: usize,
        opts: &ObjectOptions,
    ) -> Result<ListPartsInfo> {
        let mp = self.lookup(bucket).await?;
        mp.backend
            .list_object_parts(bucket, object, upload_id, part_number_marker, max_parts, opts)
            .await
    }

    pub(super) async fn handle_abort_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        opts: &ObjectOptions,
    ) -> Result<()> {
        let mp = self.lookup(bucket).await?;
        mp.backend.abort_multipart_upload(bucket, object, upload_id, opts).await
    }

    pub(super) async fn handle_complete_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        uploaded_parts: Vec<CompletePart>,
        opts: &ObjectOptions,
    ) -> Result<ObjectInfo> {
        let mp = self.lookup(bucket).await?;
        let mut info = mp
            .backend
            .complete_multipart_upload(bucket, object, upload_id, uploaded_parts, opts)
            .await?;
        annotate_endpoint(&mut info, &mp.endpoint);
        Ok(info)
    }
}
