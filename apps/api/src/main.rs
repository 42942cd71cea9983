mod config;
mod content;
mod editor;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackend};
use crate::editor::{spawn_autosave, EditorSession};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::File => {
            let store = FileStore::new(config.data_dir.clone());
            info!("Persisting to {}", store.dir().display());
            Arc::new(store)
        }
        StorageBackend::Memory => {
            info!("Persisting in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let doc = storage::restore_or_default(store.as_ref()).await;
    let session = Arc::new(EditorSession::new(doc));

    if config.autosave {
        spawn_autosave(session.subscribe(), store.clone());
        info!("Autosave enabled");
    }

    let state = AppState {
        session,
        store,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
