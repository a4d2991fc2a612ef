//! Kiosk API server lifecycle: starts/stops the axum HTTP server that the
//! wizard front end talks to.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::api::router::kiosk_router;
use crate::api::types::ApiContext;
use crate::KioskError;

// ═══════════════════════════════════════════════════════════
// Public types
// ═══════════════════════════════════════════════════════════

/// Session metadata for a running kiosk server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskSession {
    pub session_id: String,
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

/// Handle to a running kiosk server.
pub struct KioskServer {
    pub session: KioskSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl KioskServer {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Kiosk server shutdown signal sent");
        }
    }

    /// Wait for the server task to finish after `shutdown`.
    pub async fn stopped(mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!("Kiosk server task failed: {e}");
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Server lifecycle
// ═══════════════════════════════════════════════════════════

/// Start the kiosk server on the configured bind address.
pub async fn start_kiosk_server(ctx: ApiContext) -> Result<KioskServer, KioskError> {
    let addr = ctx.config.bind_addr;
    start_kiosk_server_on(ctx, addr).await
}

/// Start the kiosk server on a specific address. Port 0 picks an ephemeral
/// port, which tests rely on.
pub async fn start_kiosk_server_on(
    ctx: ApiContext,
    addr: SocketAddr,
) -> Result<KioskServer, KioskError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| KioskError::Bind { addr, source })?;

    let addr = listener.local_addr()?;

    tracing::info!(%addr, "Kiosk server binding");

    let app = kiosk_router(ctx);

    let session = KioskSession {
        session_id: Uuid::new_v4().to_string(),
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Kiosk server received shutdown signal");
        };

        tracing::info!(%addr, "Kiosk server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Kiosk server error: {e}");
        }

        tracing::info!("Kiosk server stopped");
    });

    Ok(KioskServer {
        session,
        shutdown_tx: Some(shutdown_tx),
        task: Some(task),
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
