//! Medimatch Web Server
//!
//! Run with: cargo run -p medimatch-web

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use medimatch_config::Config;
use medimatch_dataset::DatasetIndex;
use medimatch_engine::{EngineOptions, Predictor};
use medimatch_web::router::build_router;
use medimatch_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Medimatch Web Server...");

    let config = Config::load()?;
    let opts = EngineOptions {
        min_symptom_match: config.matching.min_symptom_match,
        high_severity_threshold: config.matching.high_severity_threshold,
        adult_age_threshold: config.matching.adult_age_threshold,
    };

    // A failed load starts the server degraded rather than crashing; it
    // stays degraded until restarted with a valid dataset.
    let predictor = match DatasetIndex::load(&config.dataset.path) {
        Ok(index) => Predictor::new(Arc::new(index), opts),
        Err(e) => {
            warn!(error = %e, "dataset load failed, serving degraded responses");
            Predictor::degraded(opts)
        }
    };

    let app = build_router(AppState::new(predictor));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
