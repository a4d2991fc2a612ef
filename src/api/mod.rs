//! Kiosk HTTP API.
//!
//! Serves the wizard front end on localhost. Routes are nested under `/api/`
//! and wrapped by the access-log middleware and a permissive CORS layer (the
//! front end is served from a different origin).
//!
//! The router is composable: `kiosk_router()` returns a `Router` that can be
//! mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::kiosk_router;
pub use server::{start_kiosk_server, start_kiosk_server_on, KioskServer, KioskSession};
pub use types::ApiContext;
