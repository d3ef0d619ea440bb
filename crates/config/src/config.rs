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

use crate::error::{ConfigError, Result};
use crate::{DEFAULT_MIN_FREE_CAPACITY, ENV_MIN_FREE_CAPACITY, ENV_VOLUMES};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Mount point configuration of a router.
///
/// `volumes` is ordered: placement of new buckets walks it front to back, and
/// the first entry hosts the reserved metadata bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    pub volumes: Vec<PathBuf>,
    pub min_free_capacity: u64,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            volumes: Vec::new(),
            min_free_capacity: DEFAULT_MIN_FREE_CAPACITY,
        }
    }
}

impl MountConfig {
    pub fn new<I, P>(volumes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            volumes: volumes.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_min_free_capacity(mut self, bytes: u64) -> Self {
        self.min_free_capacity = bytes;
        self
    }

    /// Loads the configuration from `MOUNTFS_VOLUMES` and
    /// `MOUNTFS_MIN_FREE_CAPACITY`, then validates it.
    pub fn from_env() -> Result<Self> {
        let volumes = env::var(ENV_VOLUMES)
            .map(|v| parse_volumes(&v))
            .unwrap_or_default();

        let min_free_capacity = match env::var(ENV_MIN_FREE_CAPACITY) {
            Ok(v) => v.trim().parse().unwrap_or_else(|_| {
                warn!("invalid {}={}, using default {}", ENV_MIN_FREE_CAPACITY, v, DEFAULT_MIN_FREE_CAPACITY);
                DEFAULT_MIN_FREE_CAPACITY
            }),
            Err(_) => DEFAULT_MIN_FREE_CAPACITY,
        };

        let cfg = Self {
            volumes,
            min_free_capacity,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.volumes.is_empty() {
            return Err(ConfigError::NoVolumes(ENV_VOLUMES));
        }

        let mut seen = HashSet::with_capacity(self.volumes.len());
        for volume in &self.volumes {
            if volume.as_os_str().is_empty() {
                return Err(ConfigError::EmptyVolume);
            }
            if !seen.insert(volume) {
                return Err(ConfigError::DuplicateVolume(volume.clone()));
            }
        }

        Ok(())
    }
}

fn parse_volumes(value: &str) -> Vec<PathBuf> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}
