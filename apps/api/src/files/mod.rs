//! Binary file storage for uploaded PDF resumes.
//!
//! `S3FileStore` targets S3 or a MinIO endpoint; `MemoryFileStore` is used when
//! no bucket is configured and in tests.

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

pub mod memory;
pub mod s3;

pub use memory::MemoryFileStore;
pub use s3::S3FileStore;

#[async_trait]
pub trait FileStore: Send + Sync {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<()>;

    /// Returns `None` when no object exists under `key`.
    async fn get(&self, key: &str) -> Result<Option<Bytes>>;

    /// Deleting a missing object is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
