//! Heart Disease Detector
//!
//! Single-page educational demo: a thirteen-field medical data form bound
//! to a pre-trained heart disease classifier (ONNX).
//!
//! ```text
//! ┌──────────────┐  POST /   ┌──────────────┐  (1,13,1)  ┌──────────────┐
//! │  HTML form   │──────────▶│  Predictor   │───────────▶│  ONNX model  │
//! │  (13 inputs) │◀──────────│ clamp, scale │◀───────────│  (sigmoid)   │
//! └──────────────┘  banner   │  p > 0.5 ?   │     p      └──────────────┘
//!                            └──────────────┘
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod i18n;
pub mod model;
pub mod report;
pub mod ui;

use std::sync::Arc;

use axum::{routing::get, routing::post, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use error::{AppError, AppResult};

use i18n::Locale;
use model::Predictor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
    pub locale: Locale,
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page::index).post(handlers::page::submit))
        .route("/health", get(handlers::health::check))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .route("/api/v1/schema", get(handlers::schema::get))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
