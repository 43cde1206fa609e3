//! Backend proxy for the bears website.
//!
//! Browsers cannot call the MediaWiki API cross-origin without help, so the
//! site goes through two read-only routes that forward to MediaWiki and reshape
//! the JSON:
//! - `GET /api/bear-data` -> `{ "wikitext": ... }`
//! - `GET /api/bear-image?fileName=...` -> `{ "imageUrl": ... }`
//!
//! The comment board lives here too, in memory only.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::client::WikiClient;
use crate::comments::CommentBoard;
use crate::config::Config;

pub use routes::create_router;

/// Shared state for the proxy handlers.
#[derive(Debug)]
pub struct ProxyState {
    /// Upstream MediaWiki client.
    pub client: WikiClient,

    /// Page whose wikitext `/api/bear-data` serves.
    pub page: String,

    /// Section of `page` to serve.
    pub section: u32,

    /// Visitor comments.
    pub comments: RwLock<CommentBoard>,
}

impl ProxyState {
    /// Create proxy state for the page named in `config`.
    #[must_use]
    pub fn new(client: WikiClient, config: &Config) -> Self {
        Self {
            client,
            page: config.page_title.clone(),
            section: config.section,
            comments: RwLock::new(CommentBoard::new()),
        }
    }
}

/// The bear proxy server.
#[derive(Debug)]
pub struct ProxyServer {
    state: Arc<ProxyState>,
}

impl ProxyServer {
    /// Create a new proxy server.
    #[must_use]
    pub fn new(client: WikiClient, config: &Config) -> Self {
        Self { state: Arc::new(ProxyState::new(client, config)) }
    }

    /// Serve on `port` until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run(self, port: u16) -> anyhow::Result<()> {
        let router = create_router(self.state);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server is running on http://{}", addr);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("Server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
