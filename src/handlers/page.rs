//! Page handlers: the form and its submit

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};

use crate::error::{AppError, AppResult};
use crate::features::PatientInput;
use crate::report::RiskAssessment;
use crate::ui::{render_page, PageContext, PageNotice};
use crate::AppState;

/// Form with widget defaults
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let input = PatientInput::default();
    let notice = (!state.predictor.model().is_loaded()).then_some(PageNotice::ModelMissing);

    Html(render_page(&PageContext {
        locale: state.locale,
        input: &input,
        notice,
        assessment: None,
    }))
}

/// "Analisis Risiko" pressed
///
/// Out-of-range values are clamped; a body that does not parse at all
/// gets the JSON error response.
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<PatientInput>, FormRejection>,
) -> AppResult<Html<String>> {
    let Form(raw) = form?;
    let input = raw.clamped();
    let predictor = state.predictor.clone();

    let outcome = tokio::task::spawn_blocking(move || predictor.predict(&input))
        .await
        .map_err(|e| AppError::InferenceError(e.to_string()))
        .and_then(|r| r.map_err(AppError::from));

    let (assessment, notice) = match outcome {
        Ok(result) => (Some(RiskAssessment::new(&result, state.locale)), None),
        Err(AppError::ModelUnavailable) => (None, Some(PageNotice::ModelMissing)),
        Err(e) => {
            tracing::error!("Prediction failed: {}", e);
            (None, Some(PageNotice::PredictionFailed))
        }
    };

    Ok(Html(render_page(&PageContext {
        locale: state.locale,
        input: &input,
        notice,
        assessment: assessment.as_ref(),
    })))
}
