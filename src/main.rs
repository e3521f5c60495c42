//! Shopping-list REST service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request               ┌──────────────────────────────────────┐
//!     ─────────────────────────────┼─▶ http/server ──▶ http/items ──┐     │
//!                                  │        │                       ▼     │
//!                                  │        │ (unmatched,        store    │
//!                                  │        ▼  production)      adapter   │
//!     Client Response              │  static assets                │      │
//!     ◀────────────────────────────┼────────────────◀──────────────┘      │
//!                                  │                                      │
//!                                  │  config · lifecycle · observability  │
//!                                  └──────────────────────────────────────┘
//! ```
//!
//! The API exposes the items resource (list, create, delete) under
//! `/api/items`, persisted to MongoDB. With no database URI configured,
//! development mode falls back to an in-memory store.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use shoplist::store::{ItemStore, MemoryStore, MongoStore};
use shoplist::{config, observability, HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = config::load_config(config_path.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        environment = ?config.environment,
        database = %config.database.database,
        "Configuration loaded"
    );

    let store: Arc<dyn ItemStore> = if config.database.uri.is_empty() {
        tracing::warn!("No database URI configured; using in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        let store = MongoStore::connect(&config.database).await?;
        tracing::info!("MongoDB connected");
        Arc::new(store)
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Server started");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
