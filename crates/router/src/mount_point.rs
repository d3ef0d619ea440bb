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

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One configured storage root and the backend serving it.
#[derive(Debug)]
pub struct MountPoint<B> {
    /// Position in the configured volume list; also the placement priority.
    pub index: usize,
    pub path: PathBuf,
    /// Identifier reported to callers, the configured path as a string.
    pub endpoint: String,
    pub backend: Arc<B>,
}

impl<B> MountPoint<B> {
    pub fn new(index: usize, path: impl Into<PathBuf>, backend: Arc<B>) -> Self {
        let path = path.into();
        let endpoint = path.to_string_lossy().into_owned();
        Self {
            index,
            path,
            endpoint,
            backend,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<B> Clone for MountPoint<B> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            path: self.path.clone(),
            endpoint: self.endpoint.clone(),
            backend: self.backend.clone(),
        }
    }
}
