//! Report assembly: one pass over a session's profile and vitals.
//!
//! Every render target consumes the same `HealthReport`, so on-screen and
//! emailed numbers cannot drift apart.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::body_composition::{BodyCompositionResult, BodyMeasurements};
use super::insights::BodyInsights;
use super::vitals::{assess_vitals, VitalsAssessment};
use crate::models::{PatientProfile, RenderTarget, VitalsReading};

pub const DISCLAIMER: &str = "This report is for general wellness screening only and is not a medical diagnosis. \
Please consult a qualified healthcare professional for medical advice.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyReport {
    pub composition: BodyCompositionResult,
    pub insights: BodyInsights,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub target: RenderTarget,
    pub patient: PatientProfile,
    pub vitals: VitalsAssessment,
    pub body: Option<BodyReport>,
    pub disclaimer: &'static str,
}

impl HealthReport {
    /// Same numbers, different render target.
    pub fn retarget(&self, target: RenderTarget) -> Self {
        Self {
            target,
            ..self.clone()
        }
    }
}

/// Body measurements for a session, when a weight was captured. The scale's
/// weight and the height field on the vitals step win over the profile.
pub fn body_measurements(profile: &PatientProfile, vitals: &VitalsReading) -> Option<BodyMeasurements> {
    let weight = vitals.weight_kg.or(profile.weight_kg).value()?;
    let height = vitals.height_cm.or(profile.height_cm).or_zero();
    Some(BodyMeasurements::new(
        weight,
        height,
        profile.sex,
        profile.age.or_zero(),
        vitals.impedance_ohms.or_zero(),
    ))
}

pub fn assemble_report(
    profile: &PatientProfile,
    vitals: &VitalsReading,
    target: RenderTarget,
) -> HealthReport {
    let report_id = Uuid::new_v4();
    let assessment = assess_vitals(vitals);

    let body = body_measurements(profile, vitals).map(|measurements| {
        let composition = measurements.estimate();
        let insights = BodyInsights::from_result(&composition, profile.age.or_zero());
        BodyReport {
            composition,
            insights,
        }
    });

    tracing::debug!(
        report_id = %report_id,
        render_target = %target,
        vitals_measured = assessment.measured_count(),
        body_composition = body.is_some(),
        "Assembled health report"
    );

    HealthReport {
        report_id,
        generated_at: Utc::now(),
        target,
        patient: profile.clone(),
        vitals: assessment,
        body,
        disclaimer: DISCLAIMER,
    }
}
