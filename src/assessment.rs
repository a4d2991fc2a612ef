//! Health assessment engine: the pure core behind every kiosk report.
//!
//! Sub-systems:
//! 1. Rounding: half-up rounding and panic-free clamps shared by every formula
//! 2. Vitals: blood pressure, SpO₂, pulse, temperature and eyesight screening
//! 3. Body composition: BIA estimate with a no-impedance fallback
//! 4. Insights: plain-language grades, body type and goals
//! 5. Report: one `HealthReport` per session, identical for every render target
//!
//! Nothing in here performs I/O or returns an error. Missing readings resolve
//! to `Unknown` labels or the degraded formulas.

pub mod body_composition;
pub mod insights;
pub mod report;
pub mod rounding;
pub mod vitals;

pub use body_composition::{compute_body_composition, BodyCompositionResult, BodyMeasurements};
pub use insights::BodyInsights;
pub use report::{assemble_report, BodyReport, HealthReport};
pub use vitals::{
    assess_vitals, classify_blood_pressure, classify_pulse, classify_spo2, classify_temperature,
    classify_visual_acuity, Classification, HealthStatus, VisualAcuityResult, VitalsAssessment,
};
