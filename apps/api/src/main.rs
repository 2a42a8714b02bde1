mod ats;
mod chat;
mod config;
mod errors;
mod files;
mod models;
mod notes;
mod pdf;
mod resume;
mod routes;
mod settings;
mod state;
mod store;
mod tracker;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::client::MODEL;
use crate::config::{Config, S3Config};
use crate::files::{FileStore, MemoryFileStore, S3FileStore};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{KeyValueStore, MemoryKeyValueStore, PgKeyValueStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Foster API v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn KeyValueStore> = match &config.database_url {
        Some(url) => Arc::new(PgKeyValueStore::connect(url).await?),
        None => {
            warn!("DATABASE_URL not set, using in-memory storage (data is lost on restart)");
            Arc::new(MemoryKeyValueStore::default())
        }
    };

    let files: Arc<dyn FileStore> = match &config.s3 {
        Some(s3) => {
            let client = build_s3_client(s3).await;
            info!("S3 file store initialized (bucket: {})", s3.bucket);
            Arc::new(S3FileStore::new(client, s3.bucket.clone()))
        }
        None => {
            warn!("S3_BUCKET not set, keeping uploaded PDFs in memory");
            Arc::new(MemoryFileStore::default())
        }
    };

    info!("Chat relay targets {} ({})", config.chat_api_base, MODEL);

    let state = AppState::new(store, files, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &S3Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.access_key_id,
        &config.secret_access_key,
        None,
        None,
        "foster-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.endpoint)
        .load()
        .await;

    // Path-style addressing so bucket names work against MinIO endpoints.
    let s3_config = aws_sdk_s3::config::Builder::from(&s3_config)
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(s3_config)
}
