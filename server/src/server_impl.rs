//! Main server implementation
//!
//! Owns the configuration and application state, binds the listener and runs
//! axum until a shutdown signal arrives.

use axum::Router;
use shared::{Component, component_info, logging};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;
use crate::web;

/// Course management HTTP server
pub struct CourseServer {
    config: ServerConfig,
    state: AppState,
    shutdown_tx: mpsc::Sender<()>,
    shutdown_rx: mpsc::Receiver<()>,
}

impl CourseServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        Self {
            config,
            state,
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Build the axum router over this server's state
    pub fn build_router(&self) -> Router {
        web::build_router(self.state.clone())
    }

    /// Sender that stops the server gracefully when signalled
    pub fn get_shutdown_sender(&self) -> mpsc::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Bind the configured address and serve until shutdown
    pub async fn run(self) -> ServerResult<()> {
        let address = self.config.bind_address;
        let listener = TcpListener::bind(address).await.map_err(|e| {
            logging::log_error(Component::current(), "Bind", &e);
            ServerError::ServerStartupFailed {
                address: address.to_string(),
            }
        })?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until shutdown
    pub async fn serve(self, listener: TcpListener) -> ServerResult<()> {
        let router = self.build_router();
        let local_addr = listener.local_addr()?;
        let mut shutdown_rx = self.shutdown_rx;

        component_info!(Component::current(), "🌐 Course server listening on http://{}", local_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                // Sender dropped counts as a shutdown request too
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        logging::log_success(Component::current(), "Course server stopped gracefully");
        Ok(())
    }
}
