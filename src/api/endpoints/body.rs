//! `POST /api/body-composition`: standalone body composition estimate.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::assessment::{BodyInsights, BodyMeasurements, BodyReport};
use crate::models::reading::resolve_raw;
use crate::models::{RawReading, Sex};

/// Field names follow the wizard (`weight`, `height`, `gender`, `age`,
/// `impedance`); the unit-suffixed names are accepted too.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BodyCompositionRequest {
    #[serde(alias = "weight")]
    pub weight_kg: Option<RawReading>,
    #[serde(alias = "height")]
    pub height_cm: Option<RawReading>,
    #[serde(alias = "gender")]
    pub sex: Option<String>,
    #[serde(alias = "age")]
    pub age_years: Option<RawReading>,
    #[serde(alias = "impedance")]
    pub impedance_ohms: Option<RawReading>,
}

pub async fn estimate(
    State(ctx): State<ApiContext>,
    payload: Result<Json<BodyCompositionRequest>, JsonRejection>,
) -> Result<Json<BodyReport>, ApiError> {
    let Json(request) = payload?;
    let policy = ctx.config.reading_policy;
    let value = |raw: &Option<RawReading>| resolve_raw(raw.as_ref(), policy).or_zero();

    let age = value(&request.age_years);
    let measurements = BodyMeasurements::new(
        value(&request.weight_kg),
        value(&request.height_cm),
        Sex::from_intake(request.sex.as_deref().unwrap_or_default()),
        age,
        value(&request.impedance_ohms),
    );

    let composition = measurements.estimate();
    tracing::debug!(mode = %composition.measurement_mode, "Body composition estimated");
    let insights = BodyInsights::from_result(&composition, age);

    Ok(Json(BodyReport {
        composition,
        insights,
    }))
}
