//! Heart Disease Detector - server entry point

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heart_risk::config::{Config, LogFormat};
use heart_risk::model::{ModelCache, Predictor, RiskThreshold, StandardScaler};
use heart_risk::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "heart_risk=debug,tower_http=info".into());

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    tracing::info!("Heart Disease Detector starting...");
    tracing::info!("Model: {}", config.model_path.display());

    let model = Arc::new(ModelCache::new(&config.model_path, config.model_sha256.clone()));

    // Load once for the process lifetime; failure only disables prediction
    if model.is_loaded() {
        tracing::info!("Model ready");
    } else {
        tracing::warn!("Model unavailable - page will show the model banner");
    }

    let scaler = match &config.scaler_path {
        Some(path) => {
            let scaler = StandardScaler::load(path)
                .with_context(|| format!("loading scaler {}", path.display()))?;
            tracing::info!("Feature scaler loaded from {}", path.display());
            Some(scaler)
        }
        None => None,
    };

    let predictor = Predictor::new(model, scaler, RiskThreshold::new(config.risk_threshold));

    let state = AppState {
        predictor: Arc::new(predictor),
        locale: config.locale,
    };

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
