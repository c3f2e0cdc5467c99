//! Homeprice prediction server
//!
//! Loads the trained pipeline artifact once at startup and serves price
//! predictions over HTTP. A missing or corrupt artifact is fatal: the
//! process must not come up without a model.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homeprice::config::Config;
use homeprice::pipeline::PricePipeline;
use homeprice::{create_router, AppState};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homeprice=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Homeprice server starting...");
    tracing::info!("Model artifact: {}", config.model_path.display());

    let pipeline = PricePipeline::load(&config.model_path)
        .expect("Failed to load model artifact; run the trainer first");

    // Build application state
    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
