//! `POST /api/vitals/classify`: classify a set of vitals without building a
//! report. The history screen uses this to re-label stored sessions.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::assessment::{assess_vitals, VitalsAssessment};
use crate::models::VitalsInput;

pub async fn classify(
    State(ctx): State<ApiContext>,
    payload: Result<Json<VitalsInput>, JsonRejection>,
) -> Result<Json<VitalsAssessment>, ApiError> {
    let Json(input) = payload?;
    let vitals = input.resolve(ctx.config.reading_policy);
    Ok(Json(assess_vitals(&vitals)))
}
