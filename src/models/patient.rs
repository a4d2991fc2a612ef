use serde::{Deserialize, Serialize};

use super::enums::{ReadingPolicy, Sex};
use super::reading::{resolve_raw, RawReading, Reading};

/// Patient details as posted by the customer-details step of the wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientInput {
    pub name: Option<String>,
    pub age: Option<RawReading>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(alias = "height")]
    pub height_cm: Option<RawReading>,
    #[serde(alias = "weight")]
    pub weight_kg: Option<RawReading>,
}

impl PatientInput {
    pub fn resolve(&self, policy: ReadingPolicy) -> PatientProfile {
        PatientProfile {
            name: self
                .name
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            age: resolve_raw(self.age.as_ref(), policy),
            sex: Sex::from_intake(self.gender.as_deref().unwrap_or_default()),
            height_cm: resolve_raw(self.height_cm.as_ref(), policy),
            weight_kg: resolve_raw(self.weight_kg.as_ref(), policy),
            email: non_blank(self.email.as_deref()),
            phone: non_blank(self.phone.as_deref()),
        }
    }
}

/// The person a report is generated for. Immutable once a report exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub age: Reading,
    pub sex: Sex,
    pub height_cm: Reading,
    pub weight_kg: Reading,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl PatientProfile {
    pub fn new(name: impl Into<String>, age: f64, sex: Sex, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            name: name.into(),
            age: Reading::legacy(age),
            sex,
            height_cm: Reading::legacy(height_cm),
            weight_kg: Reading::legacy(weight_kg),
            email: None,
            phone: None,
        }
    }

    /// Name for report headers; "N/A" when the wizard left it blank.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "N/A"
        } else {
            &self.name
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
