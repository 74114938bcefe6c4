//! Symptom prediction API.

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use medimatch_common::error::ApiError;
use medimatch_common::UserProfile;
use medimatch_engine::MatchResult;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub symptoms: String,
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub status: &'static str,
    pub data: MatchResult,
}

/// POST /api/predict — match symptoms and build a personalised result.
///
/// User-correctable failures and the degraded-service case answer 200 with
/// `status: "info"`; only internal faults become 500s. The mapping lives in
/// `ApiError`.
pub async fn predict(
    State(state): State<SharedState>,
    Json(req): Json<PredictRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let result = state.predictor.predict(&req.symptoms, &req.profile)?;

    info!(
        %request_id,
        disease = %result.disease,
        probability = result.probability,
        history_match = result.medical_history_match,
        "prediction served"
    );

    Ok(Json(PredictResponse {
        status: "success",
        data: result,
    }))
}
