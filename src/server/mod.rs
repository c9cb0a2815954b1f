//! HTTP server
//!
//! Binds the listener, builds the router around one shared [`CatalogStore`]
//! and serves requests until Ctrl-C.

pub mod handlers;
pub mod router;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::store::CatalogStore;

pub use router::router;

/// Catalog HTTP server
pub struct Server {
  listener: TcpListener,
  local_addr: SocketAddr,
  store: Arc<CatalogStore>,
  /// Server configuration
  config: Config,
}

impl Server {
  /// Bind the listener and create an empty store
  pub async fn start(config: Config) -> std::io::Result<Self> {
    let listener = TcpListener::bind(&config.server_addr).await?;
    let local_addr = listener.local_addr()?;
    info!("HTTP server bound to {}", local_addr);

    let store = Arc::new(CatalogStore::new());

    Ok(Self {
      listener,
      local_addr,
      store,
      config,
    })
  }

  /// Get local listening address
  pub fn local_addr(&self) -> SocketAddr {
    self.local_addr
  }

  /// Serve requests until a shutdown signal arrives. Each connection runs on
  /// its own task; in-flight requests are drained before returning.
  pub async fn run(self) -> std::io::Result<()> {
    info!("Server started, listening on {}", self.local_addr);
    info!("Log level: {}", self.config.log.level);

    let app = router(self.store);
    axum::serve(self.listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

    info!("Server stopped");
    Ok(())
  }
}

async fn shutdown_signal() {
  match tokio::signal::ctrl_c().await {
    Ok(()) => info!("Shutdown signal received"),
    Err(e) => {
      error!("Failed to listen for shutdown signal: {}", e);
      std::future::pending::<()>().await
    }
  }
}
