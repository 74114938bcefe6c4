//! Health and dataset statistics endpoints.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use medimatch_common::error::ApiError;
use medimatch_common::MediMatchError;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub dataset_loaded: bool,
    pub records: usize,
}

/// GET /api/health — liveness plus dataset readiness.
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    let records = state
        .predictor
        .index()
        .map(|index| index.len())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "ok",
        dataset_loaded: state.predictor.is_ready(),
        records,
    })
}

#[derive(Debug, Serialize)]
pub struct DatasetStats {
    pub records: usize,
    pub symptom_vocabulary: usize,
    pub loaded_at: String,
    pub source_file: String,
}

/// GET /api/dataset/stats — index shape, for dashboards and smoke checks.
pub async fn dataset_stats(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let index = state.predictor.index().ok_or_else(|| {
        MediMatchError::DataUnavailable("dataset index not loaded".into())
    })?;

    Ok(Json(DatasetStats {
        records: index.len(),
        symptom_vocabulary: index.symptom_vocabulary_len(),
        loaded_at: index.loaded_at().to_rfc3339(),
        source_file: index.source_file().display().to_string(),
    }))
}
