//! Scale bridge endpoints.
//!
//! Two endpoints:
//! - `POST /api/device/advertisement`: a BLE advertisement relayed by the scanner
//! - `GET /api/device/latest`: latest decoded sample for "Fetch from Device"

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::device::advertisement::decode_base64_advertisement;
use crate::device::{is_target_device, ScaleSample, Stability};

#[derive(Debug, Deserialize)]
pub struct AdvertisementRequest {
    pub device_name: Option<String>,
    /// Manufacturer-specific data, base64 encoded.
    pub manufacturer_data: String,
}

#[derive(Debug, Serialize)]
pub struct AdvertisementResponse {
    /// False when the advertiser does not match the configured device filter.
    pub accepted: bool,
    pub sample: Option<ScaleSample>,
    pub stability: Option<Stability>,
}

pub async fn advertisement(
    State(ctx): State<ApiContext>,
    payload: Result<Json<AdvertisementRequest>, JsonRejection>,
) -> Result<Json<AdvertisementResponse>, ApiError> {
    let Json(request) = payload?;

    if !is_target_device(request.device_name.as_deref(), &ctx.config.device_filter) {
        tracing::debug!(
            device = request.device_name.as_deref().unwrap_or("unknown"),
            "Ignoring advertisement from non-target device"
        );
        return Ok(Json(AdvertisementResponse {
            accepted: false,
            sample: None,
            stability: None,
        }));
    }

    let decoded = decode_base64_advertisement(&request.manufacturer_data);
    let mut scale = ctx.lock_scale()?;

    let sample = match decoded {
        Ok(sample) => sample,
        Err(err) => {
            tracing::warn!(error = %err, "Scale advertisement rejected");
            scale.record_error(err.to_string());
            return Err(err.into());
        }
    };

    scale.record(sample);
    let stability = scale.stabilizer.push(sample.weight_kg, Instant::now());
    scale.stable = matches!(stability, Stability::Stable { .. });
    if let Stability::Stable { fresh: true, .. } = stability {
        tracing::info!(
            has_impedance = sample.has_impedance(),
            "Scale weight stabilised"
        );
    }

    Ok(Json(AdvertisementResponse {
        accepted: true,
        sample: Some(sample),
        stability: Some(stability),
    }))
}

/// Latest sample. Weight and impedance read 0 until the scale has reported.
#[derive(Debug, Serialize)]
pub struct LatestSampleResponse {
    pub weight: f64,
    pub impedance: f64,
    pub stable: bool,
    pub error: Option<String>,
}

pub async fn latest(State(ctx): State<ApiContext>) -> Result<Json<LatestSampleResponse>, ApiError> {
    let scale = ctx.lock_scale()?;
    let sample = scale.latest;
    Ok(Json(LatestSampleResponse {
        weight: sample.map_or(0.0, |s| s.weight_kg),
        impedance: sample.map_or(0.0, |s| s.impedance_ohms),
        stable: scale.stable,
        error: scale.last_error.clone(),
    }))
}
