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

//! The storage API shared by single-volume backends and the router.
//!
//! Every backend implements [`StorageAPI`]; the router implements it as well,
//! so callers cannot tell one volume from many.

use crate::error::{Error, Result};
use bytes::Bytes;
use http::HeaderMap;
use mountfs_madmin::{HealOpts, HealResultItem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::io::Cursor;
use time::OffsetDateTime;
use tokio::io::{AsyncRead, AsyncReadExt};
use uuid::Uuid;

mod readers;
mod traits;
mod types;

pub use readers::*;
pub use traits::*;
pub use types::*;
