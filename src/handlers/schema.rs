//! Form schema handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::features::{FieldSpec, LayoutInfo, FIELD_SPECS};
use crate::i18n::Locale;
use crate::AppState;

#[derive(Serialize)]
pub struct SchemaResponse {
    pub locale: Locale,
    pub layout: LayoutInfo,
    pub fields: &'static [FieldSpec],
    pub threshold: f32,
}

/// Widget specs and feature layout
pub async fn get(State(state): State<AppState>) -> Json<SchemaResponse> {
    Json(SchemaResponse {
        locale: state.locale,
        layout: LayoutInfo::current(),
        fields: &FIELD_SPECS,
        threshold: state.predictor.threshold().cutoff,
    })
}
