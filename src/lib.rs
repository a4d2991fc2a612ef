pub mod api;
pub mod assessment;
pub mod config;
pub mod device;
pub mod models;

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::ApiContext;
use crate::config::KioskConfig;

/// Startup and shutdown failures of the kiosk service.
#[derive(Error, Debug)]
pub enum KioskError {
    #[error("Failed to bind kiosk server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Initialise tracing from `RUST_LOG`, falling back to the crate default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Run the kiosk service until Ctrl-C.
pub async fn run() -> Result<(), KioskError> {
    init_tracing();

    let kiosk_config = KioskConfig::from_env();
    tracing::info!(
        version = config::APP_VERSION,
        bind_addr = %kiosk_config.bind_addr,
        reading_policy = %kiosk_config.reading_policy,
        device_filter = %kiosk_config.device_filter,
        "{} starting",
        config::APP_NAME
    );

    let mut server = api::start_kiosk_server(ApiContext::new(kiosk_config)).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Interrupt received, shutting down");

    server.shutdown();
    server.stopped().await;
    Ok(())
}
