//! JSON prediction handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::features::PatientInput;
use crate::report::RiskAssessment;
use crate::AppState;

/// Out-of-range fields are rejected here; the HTML form clamps instead
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<PatientInput>, JsonRejection>,
) -> AppResult<Json<RiskAssessment>> {
    let Json(input) = body?;
    input.validate()?;

    let predictor = state.predictor.clone();
    let result = tokio::task::spawn_blocking(move || predictor.predict(&input))
        .await
        .map_err(|e| AppError::InferenceError(e.to_string()))??;

    Ok(Json(RiskAssessment::new(&result, state.locale)))
}
