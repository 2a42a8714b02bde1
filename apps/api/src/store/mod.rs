//! Key-value persistence: every feature keeps its state as one JSON document per key.
//!
//! Backends: `PgKeyValueStore` (PostgreSQL) and `MemoryKeyValueStore` (dev / tests).
//! `AppState` carries an `Arc<dyn KeyValueStore>`, picked at startup from config.

use anyhow::Result;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::warn;

pub mod memory;
pub mod postgres;

pub use memory::MemoryKeyValueStore;
pub use postgres::PgKeyValueStore;

pub const APPLICATIONS_KEY: &str = "foster_applications";
pub const RESUME_PROFILE_KEY: &str = "foster_resume";
pub const RESUME_LIBRARY_KEY: &str = "foster_resumes";
pub const INTERVIEW_NOTES_KEY: &str = "foster_interview_notes";
pub const AI_KEY_KEY: &str = "foster_ai_key";

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key has never been saved.
    async fn load(&self, key: &str) -> Result<Option<Value>>;

    /// Inserts or replaces the value under `key`.
    async fn save(&self, key: &str, value: Value) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;
}

/// Loads `key` as `T`, falling back to `T::default()` when the key is absent.
///
/// A stored value that no longer deserializes is treated as absent and logged,
/// so one corrupt document cannot take a whole feature down.
pub async fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match store.load(key).await? {
        None => Ok(T::default()),
        Some(value) => match serde_json::from_value(value) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                warn!("Stored value under '{key}' is unreadable, using default: {e}");
                Ok(T::default())
            }
        },
    }
}

pub async fn save_value<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    store.save(key, serde_json::to_value(value)?).await
}
