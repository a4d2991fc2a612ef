use serde::{Deserialize, Serialize};

use super::enums::ReadingPolicy;
use super::reading::{resolve_raw, RawReading, Reading};

/// Type of vital sign measured at the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalType {
    BloodPressure,
    OxygenSaturation,
    HeartRate,
    Temperature,
    VisualAcuity,
}

impl VitalType {
    /// Unit the kiosk captures this vital in.
    pub fn default_unit(self) -> &'static str {
        match self {
            VitalType::BloodPressure => "mmHg",
            VitalType::OxygenSaturation => "%",
            VitalType::HeartRate => "bpm",
            VitalType::Temperature => "°F",
            VitalType::VisualAcuity => "line",
        }
    }

    /// Card title used on the printed report.
    pub fn display_name(self) -> &'static str {
        match self {
            VitalType::BloodPressure => "Blood Pressure",
            VitalType::OxygenSaturation => "Oxygen Saturation (SpO₂)",
            VitalType::HeartRate => "Pulse Rate",
            VitalType::Temperature => "Body Temperature",
            VitalType::VisualAcuity => "Visual Acuity",
        }
    }
}

/// Vitals exactly as the intake wizard posts them. Every field is optional
/// and may be a number or the text typed into a form field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalsInput {
    pub systolic: Option<RawReading>,
    pub diastolic: Option<RawReading>,
    pub spo2: Option<RawReading>,
    pub pulse: Option<RawReading>,
    #[serde(alias = "tempF")]
    pub temperature_f: Option<RawReading>,
    #[serde(alias = "leftEye")]
    pub left_eye_line: Option<RawReading>,
    #[serde(alias = "rightEye")]
    pub right_eye_line: Option<RawReading>,
    #[serde(alias = "impedance")]
    pub impedance_ohms: Option<RawReading>,
    #[serde(alias = "weight")]
    pub weight_kg: Option<RawReading>,
    #[serde(alias = "height")]
    pub height_cm: Option<RawReading>,
}

impl VitalsInput {
    pub fn resolve(&self, policy: ReadingPolicy) -> VitalsReading {
        let r = |raw: &Option<RawReading>| resolve_raw(raw.as_ref(), policy);
        VitalsReading {
            systolic: r(&self.systolic),
            diastolic: r(&self.diastolic),
            spo2: r(&self.spo2),
            pulse: r(&self.pulse),
            temperature_f: r(&self.temperature_f),
            left_eye_line: r(&self.left_eye_line),
            right_eye_line: r(&self.right_eye_line),
            impedance_ohms: r(&self.impedance_ohms),
            weight_kg: r(&self.weight_kg),
            height_cm: r(&self.height_cm),
        }
    }
}

/// One kiosk session's vitals after resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalsReading {
    pub systolic: Reading,
    pub diastolic: Reading,
    pub spo2: Reading,
    pub pulse: Reading,
    pub temperature_f: Reading,
    pub left_eye_line: Reading,
    pub right_eye_line: Reading,
    pub impedance_ohms: Reading,
    pub weight_kg: Reading,
    pub height_cm: Reading,
}
