//! Shared application state for the web server.

use std::sync::Arc;

use medimatch_engine::Predictor;

/// Shared state injected into every Axum handler. The predictor carries the
/// immutable dataset index; nothing here mutates after startup.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
}

impl AppState {
    pub fn new(predictor: Predictor) -> Self {
        Self { predictor }
    }
}

pub type SharedState = Arc<AppState>;
