//! Report endpoint.
//!
//! `POST /api/report`: patient details plus vitals from the wizard, returned
//! as one assembled report for the chosen render target.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::assessment::{assemble_report, HealthReport};
use crate::models::{PatientInput, RenderTarget, VitalsInput};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportRequest {
    pub patient: PatientInput,
    pub vitals: VitalsInput,
    pub target: RenderTarget,
}

pub async fn generate(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<HealthReport>, ApiError> {
    let Json(request) = payload?;
    let policy = ctx.config.reading_policy;

    let profile = request.patient.resolve(policy);
    let vitals = request.vitals.resolve(policy);

    Ok(Json(assemble_report(&profile, &vitals, request.target)))
}
