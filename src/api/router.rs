//! Kiosk API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Layers (outermost → innermost): CORS → access log → handler.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the kiosk API router over a shared context.
pub fn kiosk_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/report", post(endpoints::report::generate))
        .route("/vitals/classify", post(endpoints::vitals::classify))
        .route("/body-composition", post(endpoints::body::estimate))
        .route(
            "/device/advertisement",
            post(endpoints::device::advertisement),
        )
        .route("/device/latest", get(endpoints::device::latest))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::audit::log_access));

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
}
