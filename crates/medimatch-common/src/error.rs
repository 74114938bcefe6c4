//! Error taxonomy shared by the dataset, engine, and web crates.
//!
//! Every failure the engine can produce maps to one of four kinds. All four
//! carry a short human-readable message; internal error text never reaches
//! the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediMatchError {
    /// Dataset missing, unreadable, or empty at load. The service degrades
    /// to a fixed message instead of crashing.
    #[error("dataset unavailable: {0}")]
    DataUnavailable(String),

    /// User-correctable: the symptom text parsed to nothing usable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// User-correctable: no record met the minimum match score.
    #[error("no match: {0}")]
    NoMatch(String),

    /// Unexpected fault during scoring or formatting. Logged; the caller
    /// only ever sees the generic busy message.
    #[error("internal error: {0}")]
    Internal(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl MediMatchError {
    /// The message shown to the end user for this failure kind.
    pub fn user_message(&self) -> &str {
        match self {
            MediMatchError::DataUnavailable(_) => {
                "System is initializing. Please try again shortly."
            }
            MediMatchError::InvalidInput(msg) | MediMatchError::NoMatch(msg) => msg,
            MediMatchError::Internal(_) | MediMatchError::Config(_) => {
                "Our system is currently busy. Please try again shortly."
            }
        }
    }

    /// Internal faults become server errors; everything else is reported
    /// as informational with a corrective message.
    pub fn is_internal_fault(&self) -> bool {
        matches!(
            self,
            MediMatchError::Internal(_) | MediMatchError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MediMatchError>;

/// Wrapper that converts engine errors into the JSON envelope at the web
/// boundary. User-correctable and degraded-service failures answer 200 with
/// `status: "info"`; internal faults answer 500 with `status: "error"`.
#[derive(Debug)]
pub struct ApiError(pub MediMatchError);

impl From<MediMatchError> for ApiError {
    fn from(err: MediMatchError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.is_internal_fault() {
            tracing::error!(error = %err, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "status": "error",
                    "message": err.user_message(),
                })),
            )
                .into_response()
        } else {
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "status": "info",
                    "message": err.user_message(),
                    "data": null,
                })),
            )
                .into_response()
        }
    }
}
