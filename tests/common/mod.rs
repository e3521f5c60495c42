//! Shared helpers for API integration tests.
//!
//! Each test gets a real server on an ephemeral port backed by the
//! in-memory store, driven over the wire with reqwest.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use async_trait::async_trait;

use shoplist::config::AppConfig;
use shoplist::http::HttpServer;
use shoplist::lifecycle::Shutdown;
use shoplist::store::{Item, ItemStore, MemoryStore, StoreError};

/// A running test server and the store behind it.
pub struct TestApp {
    pub addr: SocketAddr,
    #[allow(dead_code)]
    pub store: Arc<dyn ItemStore>,
    shutdown: Shutdown,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stop the spawned server.
    #[allow(dead_code)]
    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Spawn the server with default (development) config.
#[allow(dead_code)]
pub async fn spawn_app() -> TestApp {
    spawn_app_with_config(AppConfig::default()).await
}

/// Spawn the server with the given config, memory-backed.
pub async fn spawn_app_with_config(config: AppConfig) -> TestApp {
    spawn_app_with_store(config, Arc::new(MemoryStore::new())).await
}

/// Spawn the server with the given config and an injected store.
pub async fn spawn_app_with_store(config: AppConfig, store: Arc<dyn ItemStore>) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store.clone());
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestApp {
        addr,
        store,
        shutdown,
    }
}

/// Store stub whose every operation reports the database as unreachable.
#[allow(dead_code)]
pub struct UnreachableStore;

#[async_trait]
impl ItemStore for UnreachableStore {
    async fn create(&self, _name: String) -> Result<Item, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Item, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn delete_by_id(&self, _id: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}
