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

pub type Error = StorageError;
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("not implemented")]
    NotImplemented,

    #[error("no available disk for storage")]
    NoAvailableDisk,

    #[error("no mount points configured")]
    NoMountPoints,

    #[error("Bucket {0} found on both {1} and {2}")]
    DuplicateBucket(String, String, String),

    #[error("Copy from {0} to {1} spans mount points")]
    CrossMountCopy(String, String),

    #[error("Invalid arguments provided for {0}/{1}-{2}")]
    InvalidArgument(String, String, String),

    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    #[error("Bucket not empty: {0}")]
    BucketNotEmpty(String),

    #[error("Bucket name invalid: {0}")]
    BucketNameInvalid(String),

    #[error("Bucket exists: {0}")]
    BucketExists(String),

    #[error("Object not found: {0}/{1}")]
    ObjectNotFound(String, String),

    #[error("Object name invalid: {0}/{1}")]
    ObjectNameInvalid(String, String),

    #[error("Invalid upload id: {0}/{1}-{2}")]
    InvalidUploadID(String, String, String),

    #[error("Specified part could not be found. PartNumber {0}, Expected {1}, got {2}")]
    InvalidPart(usize, String, String),

    #[error("Config not found")]
    ConfigNotFound,

    #[error("Disk full")]
    DiskFull,

    #[error("Volume not found")]
    VolumeNotFound,

    #[error("Invalid range specified: {0}")]
    InvalidRangeSpec(String),

    #[error("Unexpected error")]
    Unexpected,

    #[error("Io error: {0}")]
    Io(std::io::Error),
}

impl StorageError {
    pub fn other<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        StorageError::Io(std::io::Error::other(error))
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            StorageError::Io(_) => 0x01,
            StorageError::NotImplemented => 0x02,
            StorageError::NoAvailableDisk => 0x03,
            StorageError::NoMountPoints => 0x04,
            StorageError::DuplicateBucket(_, _, _) => 0x05,
            StorageError::CrossMountCopy(_, _) => 0x06,
            StorageError::InvalidArgument(_, _, _) => 0x07,
            StorageError::BucketNotFound(_) => 0x08,
            StorageError::BucketNotEmpty(_) => 0x09,
            StorageError::BucketNameInvalid(_) => 0x0A,
            StorageError::BucketExists(_) => 0x0B,
            StorageError::ObjectNotFound(_, _) => 0x0C,
            StorageError::ObjectNameInvalid(_, _) => 0x0D,
            StorageError::InvalidUploadID(_, _, _) => 0x0E,
            StorageError::InvalidPart(_, _, _) => 0x0F,
            StorageError::ConfigNotFound => 0x10,
            StorageError::DiskFull => 0x11,
            StorageError::VolumeNotFound => 0x12,
            StorageError::InvalidRangeSpec(_) => 0x13,
            StorageError::Unexpected => 0x14,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        match e.downcast::<StorageError>() {
            Ok(storage_error) => storage_error,
            Err(io_error) => StorageError::Io(io_error),
        }
    }
}

impl From<StorageError> for std::io::Error {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Io(io_error) => io_error,
            e => std::io::Error::other(e),
        }
    }
}

impl From<mountfs_config::ConfigError> for StorageError {
    fn from(e: mountfs_config::ConfigError) -> Self {
        match e {
            mountfs_config::ConfigError::NoVolumes(_) => StorageError::NoMountPoints,
            e => StorageError::other(e),
        }
    }
}

impl PartialEq for StorageError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StorageError::Io(e1), StorageError::Io(e2)) => e1.kind() == e2.kind() && e1.to_string() == e2.to_string(),
            (e1, e2) => e1.to_u32() == e2.to_u32(),
        }
    }
}

impl Clone for StorageError {
    fn clone(&self) -> Self {
        match self {
            StorageError::Io(e) => StorageError::Io(std::io::Error::new(e.kind(), e.to_string())),
            StorageError::NotImplemented => StorageError::NotImplemented,
            StorageError::NoAvailableDisk => StorageError::NoAvailableDisk,
            StorageError::NoMountPoints => StorageError::NoMountPoints,
            StorageError::DuplicateBucket(a, b, c) => StorageError::DuplicateBucket(a.clone(), b.clone(), c.clone()),
            StorageError::CrossMountCopy(a, b) => StorageError::CrossMountCopy(a.clone(), b.clone()),
            StorageError::InvalidArgument(a, b, c) => StorageError::InvalidArgument(a.clone(), b.clone(), c.clone()),
            StorageError::BucketNotFound(a) => StorageError::BucketNotFound(a.clone()),
            StorageError::BucketNotEmpty(a) => StorageError::BucketNotEmpty(a.clone()),
            StorageError::BucketNameInvalid(a) => StorageError::BucketNameInvalid(a.clone()),
            StorageError::BucketExists(a) => StorageError::BucketExists(a.clone()),
            StorageError::ObjectNotFound(a, b) => StorageError::ObjectNotFound(a.clone(), b.clone()),
            StorageError::ObjectNameInvalid(a, b) => StorageError::ObjectNameInvalid(a.clone(), b.clone()),
            StorageError::InvalidUploadID(a, b, c) => StorageError::InvalidUploadID(a.clone(), b.clone(), c.clone()),
            StorageError::InvalidPart(a, b, c) => StorageError::InvalidPart(*a, b.clone(), c.clone()),
            StorageError::ConfigNotFound => StorageError::ConfigNotFound,
            StorageError::DiskFull => StorageError::DiskFull,
            StorageError::VolumeNotFound => StorageError::VolumeNotFound,
            StorageError::InvalidRangeSpec(a) => StorageError::InvalidRangeSpec(a.clone()),
            StorageError::Unexpected => StorageError::Unexpected,
        }
    }
}

pub fn is_err_bucket_not_found(err: &Error) -> bool {
    matches!(err, &StorageError::VolumeNotFound) || matches!(err, &StorageError::BucketNotFound(_))
}

pub fn is_err_bucket_exists(err: &Error) -> bool {
    matches!(err, &StorageError::BucketExists(_))
}

pub fn is_err_object_not_found(err: &Error) -> bool {
    matches!(err, &StorageError::ObjectNotFound(_, _))
}

pub fn is_err_no_available_disk(err: &Error) -> bool {
    matches!(err, &StorageError::NoAvailableDisk)
}

pub fn is_err_not_implemented(err: &Error) -> bool {
    matches!(err, &StorageError::NotImplemented)
}
