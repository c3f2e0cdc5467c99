//! Homeprice - house price prediction service
//!
//! Two binaries share this crate:
//!
//! ```text
//! ┌──────────────┐   artifact file   ┌─────────────────────────┐
//! │   trainer    │ ────────────────▶ │   server (Axum)         │
//! │  (offline)   │  models/model.bin │   loads once at start,  │
//! │  CSV → fit   │                   │   read-only per request │
//! └──────────────┘                   └─────────────────────────┘
//! ```
//!
//! The trainer fits a one-hot encoder, a numeric scaler and a random-forest
//! regressor on the training table and serializes the composite to a single
//! artifact. The server deserializes that artifact exactly once at startup
//! and answers `POST /predict/` against it for the life of the process.

pub mod config;
pub mod dataset;
pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod schema;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};
use pipeline::PricePipeline;

/// Shared application state
///
/// The pipeline is deserialized once at startup and never mutated afterwards,
/// so handlers share it behind an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PricePipeline>,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::status))
        .route("/predict/", post(handlers::predict::predict))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
