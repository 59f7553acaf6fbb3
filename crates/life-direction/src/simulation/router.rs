use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use super::domain::HabitInput;
use super::simulate_future;
use super::validation::{validate_input, InputError};

/// Failures surfaced by the analysis endpoint.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Failed to analyze data")]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn status(&self) -> StatusCode {
        match self {
            AnalysisError::Input(_) => StatusCode::BAD_REQUEST,
            AnalysisError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        match &self {
            AnalysisError::Input(InputError::InvalidAge(age)) => {
                warn!(age, "rejected habit profile outside supported ages");
            }
            AnalysisError::Input(InputError::NonFinite(field)) => {
                warn!(field, "rejected habit profile with non-finite value");
            }
            AnalysisError::Input(InputError::MalformedBody(detail)) => {
                warn!(%detail, "rejected undecodable habit profile");
            }
            AnalysisError::Serialization(err) => {
                error!(error = %err, "analysis result could not be encoded");
            }
        }

        let payload = json!({ "error": self.to_string() });
        (self.status(), Json(payload)).into_response()
    }
}

/// Router exposing the stateless analysis endpoint.
pub fn analysis_router(body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/api/v1/analyze", post(analyze_handler))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
}

pub(crate) async fn analyze_handler(
    payload: Result<Json<HabitInput>, JsonRejection>,
) -> Result<Json<Value>, AnalysisError> {
    let Json(input) =
        payload.map_err(|rejection| InputError::MalformedBody(rejection.body_text()))?;

    validate_input(&input)?;

    let result = simulate_future(&input);
    debug!(
        overall = result.current_path.scores.overall,
        weakest = %result.weakest_area.name,
        "habit profile analyzed"
    );

    Ok(Json(serde_json::to_value(&result)?))
}
