//! Vital-sign classification.
//!
//! Every classifier is total: an absent reading produces `HealthStatus::Unknown`
//! with a fixed advisory line instead of an error.

use serde::Serialize;

use crate::models::{Reading, VitalType, VitalsReading};

// ═══════════════════════════════════════════
// Status labels
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Unknown,
    Normal,
    Elevated,
    Stage1Hypertension,
    Stage2Hypertension,
    Low,
    High,
    Borderline,
    Fever,
    Screened,
}

/// Card colouring on the printed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Good,
    Caution,
    Alert,
    Neutral,
}

impl HealthStatus {
    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::Unknown => "—",
            HealthStatus::Normal => "Normal",
            HealthStatus::Elevated => "Elevated",
            HealthStatus::Stage1Hypertension => "Stage 1 Hypertension",
            HealthStatus::Stage2Hypertension => "Stage 2 Hypertension",
            HealthStatus::Low => "Low",
            HealthStatus::High => "High",
            HealthStatus::Borderline => "Borderline",
            HealthStatus::Fever => "Fever",
            HealthStatus::Screened => "Screening Result",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            HealthStatus::Normal => StatusTone::Good,
            HealthStatus::Elevated | HealthStatus::Borderline => StatusTone::Caution,
            HealthStatus::Stage1Hypertension
            | HealthStatus::Stage2Hypertension
            | HealthStatus::Low
            | HealthStatus::High
            | HealthStatus::Fever => StatusTone::Alert,
            HealthStatus::Unknown | HealthStatus::Screened => StatusTone::Neutral,
        }
    }
}

/// One classified vital: which metric, its status, and the advice line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub metric: VitalType,
    pub title: &'static str,
    pub unit: &'static str,
    pub status: HealthStatus,
    pub label: &'static str,
    pub tone: StatusTone,
    pub advice: &'static str,
}

impl Classification {
    fn new(metric: VitalType, status: HealthStatus, advice: &'static str) -> Self {
        Self {
            metric,
            title: metric.display_name(),
            unit: metric.default_unit(),
            status,
            label: status.label(),
            tone: status.tone(),
            advice,
        }
    }
}

// ═══════════════════════════════════════════
// Classifiers
// ═══════════════════════════════════════════

pub fn classify_blood_pressure(
    systolic: impl Into<Reading>,
    diastolic: impl Into<Reading>,
) -> Classification {
    let bp = |status, advice| Classification::new(VitalType::BloodPressure, status, advice);
    let (Some(s), Some(d)) = (systolic.into().value(), diastolic.into().value()) else {
        return bp(HealthStatus::Unknown, "No BP values provided.");
    };

    if s < 120.0 && d < 80.0 {
        bp(HealthStatus::Normal, "Great! Keep up a healthy lifestyle.")
    } else if s < 130.0 && d < 80.0 {
        bp(
            HealthStatus::Elevated,
            "Monitor regularly; consider diet/exercise.",
        )
    } else if (130.0..=139.0).contains(&s) || (80.0..=89.0).contains(&d) {
        bp(
            HealthStatus::Stage1Hypertension,
            "Consult a clinician; lifestyle changes recommended.",
        )
    } else if s >= 140.0 || d >= 90.0 {
        bp(HealthStatus::Stage2Hypertension, "Seek medical advice soon.")
    } else {
        // Fractional gaps such as 139.5/70 fall through every band.
        bp(HealthStatus::Unknown, "Check values.")
    }
}

pub fn classify_spo2(spo2: impl Into<Reading>) -> Classification {
    let ox = |status, advice| Classification::new(VitalType::OxygenSaturation, status, advice);
    match spo2.into().value() {
        None => ox(HealthStatus::Unknown, "No SpO₂ value provided."),
        Some(v) if v >= 95.0 => ox(
            HealthStatus::Normal,
            "Oxygen saturation is within normal range.",
        ),
        Some(v) if v >= 90.0 => ox(
            HealthStatus::Borderline,
            "Monitor; if symptoms occur, contact a clinician.",
        ),
        Some(_) => ox(
            HealthStatus::Low,
            "Low oxygen level; seek care if persistent.",
        ),
    }
}

pub fn classify_pulse(pulse: impl Into<Reading>) -> Classification {
    let hr = |status, advice| Classification::new(VitalType::HeartRate, status, advice);
    match pulse.into().value() {
        None => hr(HealthStatus::Unknown, "No pulse value provided."),
        Some(v) if (60.0..=100.0).contains(&v) => hr(
            HealthStatus::Normal,
            "Resting heart rate is within normal range.",
        ),
        Some(v) if v < 60.0 => hr(
            HealthStatus::Low,
            "Could be normal for athletes; else, monitor.",
        ),
        Some(_) => hr(
            HealthStatus::High,
            "Tachycardia; consider rest and consult if persistent.",
        ),
    }
}

/// Body temperature in °F.
pub fn classify_temperature(temperature_f: impl Into<Reading>) -> Classification {
    let t = |status, advice| Classification::new(VitalType::Temperature, status, advice);
    match temperature_f.into().value() {
        None => t(HealthStatus::Unknown, "No temperature provided."),
        Some(v) if v < 97.0 => t(
            HealthStatus::Low,
            "Slightly low; ensure warmth and re-check.",
        ),
        Some(v) if v <= 99.0 => t(HealthStatus::Normal, "Within normal range."),
        Some(v) if v < 100.4 => t(HealthStatus::Elevated, "Mild elevation; monitor."),
        Some(_) => t(
            HealthStatus::Fever,
            "Possible fever; consider medical advice.",
        ),
    }
}

// ── Visual acuity ──

/// Snellen denominators for chart lines 1 through 9.
const SNELLEN_LINES: [u32; 9] = [200, 100, 70, 50, 40, 30, 25, 20, 15];

const UNMAPPED_LINE: &str = "—";

/// Map a chart line (1 = top) to its Snellen denominator. Only whole lines
/// 1..=9 map; anything else is unmapped.
pub fn snellen_denominator(line: impl Into<Reading>) -> Option<u32> {
    let v = line.into().value()?;
    if v.fract() != 0.0 || !(1.0..=9.0).contains(&v) {
        return None;
    }
    SNELLEN_LINES.get(v as usize - 1).copied()
}

fn snellen_text(line: Reading) -> String {
    snellen_denominator(line)
        .map(|d| format!("20/{d}"))
        .unwrap_or_else(|| UNMAPPED_LINE.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualAcuityResult {
    pub metric: VitalType,
    pub title: &'static str,
    pub status: HealthStatus,
    pub label: &'static str,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub summary: String,
    pub advice: &'static str,
}

pub fn classify_visual_acuity(
    left_line: impl Into<Reading>,
    right_line: impl Into<Reading>,
) -> VisualAcuityResult {
    let (left, right) = (left_line.into(), right_line.into());
    if !left.is_present() && !right.is_present() {
        return VisualAcuityResult {
            metric: VitalType::VisualAcuity,
            title: VitalType::VisualAcuity.display_name(),
            status: HealthStatus::Unknown,
            label: HealthStatus::Unknown.label(),
            left: None,
            right: None,
            summary: UNMAPPED_LINE.to_string(),
            advice: "No eyesight input provided.",
        };
    }

    VisualAcuityResult {
        metric: VitalType::VisualAcuity,
        title: VitalType::VisualAcuity.display_name(),
        status: HealthStatus::Screened,
        label: HealthStatus::Screened.label(),
        left: snellen_denominator(left),
        right: snellen_denominator(right),
        summary: format!(
            "Left: {}, Right: {}",
            snellen_text(left),
            snellen_text(right)
        ),
        advice: "This is a basic screening. Smaller line numbers indicate better acuity.",
    }
}

// ═══════════════════════════════════════════
// Aggregate
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsAssessment {
    pub blood_pressure: Classification,
    pub spo2: Classification,
    pub pulse: Classification,
    pub temperature: Classification,
    pub visual_acuity: VisualAcuityResult,
}

impl VitalsAssessment {
    /// The four scalar cards, in report order.
    pub fn cards(&self) -> [&Classification; 4] {
        [
            &self.blood_pressure,
            &self.spo2,
            &self.pulse,
            &self.temperature,
        ]
    }

    /// Number of vitals that produced a real classification.
    pub fn measured_count(&self) -> usize {
        let scalar = self
            .cards()
            .iter()
            .filter(|c| c.status != HealthStatus::Unknown)
            .count();
        scalar + usize::from(self.visual_acuity.status != HealthStatus::Unknown)
    }
}

pub fn assess_vitals(vitals: &VitalsReading) -> VitalsAssessment {
    VitalsAssessment {
        blood_pressure: classify_blood_pressure(vitals.systolic, vitals.diastolic),
        spo2: classify_spo2(vitals.spo2),
        pulse: classify_pulse(vitals.pulse),
        temperature: classify_temperature(vitals.temperature_f),
        visual_acuity: classify_visual_acuity(vitals.left_eye_line, vitals.right_eye_line),
    }
}
