#![allow(dead_code)]
use axum::Router;
use fertibase_domain::config::{DatabaseConfig, RemoteCatalogConfig};
use fertibase_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// HTTP server on an ephemeral localhost port serving a test router.
pub struct MockCatalogServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockCatalogServer {
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn remote_config(&self, timeout_ms: u64) -> RemoteCatalogConfig {
        RemoteCatalogConfig {
            base_url: self.base_url(),
            timeout_ms,
            retries: 0,
        }
    }
}

impl Drop for MockCatalogServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A localhost URL with nothing listening on it.
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

pub async fn memory_pool() -> SqlitePool {
    create_pool(&DatabaseConfig::default()).await.unwrap()
}
