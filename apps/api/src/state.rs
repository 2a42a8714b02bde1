use std::sync::Arc;

use crate::chat::ChatClient;
use crate::config::Config;
use crate::files::FileStore;
use crate::store::KeyValueStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// JSON documents by key. Postgres-backed when `DATABASE_URL` is set.
    pub store: Arc<dyn KeyValueStore>,
    /// Uploaded PDF blobs. S3-backed when `S3_BUCKET` is set.
    pub files: Arc<dyn FileStore>,
    pub chat: ChatClient,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, files: Arc<dyn FileStore>, config: Config) -> Self {
        Self {
            store,
            files,
            chat: ChatClient::new(config.chat_api_base.clone()),
            config,
        }
    }
}
