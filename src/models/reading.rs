//! Present/absent numeric readings.
//!
//! Kiosk intake historically used `0` as "not measured". A `Reading` makes the
//! distinction explicit; `ReadingPolicy::Legacy` keeps the old zero-as-missing
//! behaviour so archived reports reproduce exactly, `ReadingPolicy::Strict`
//! accepts a true zero.

use serde::{Deserialize, Serialize};

use super::enums::ReadingPolicy;

/// A scalar measurement that may or may not have been taken.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reading {
    Present(f64),
    #[default]
    Absent,
}

impl Reading {
    /// Resolve a number under the given policy. Non-finite values are always absent.
    pub fn resolve(value: f64, policy: ReadingPolicy) -> Self {
        if !value.is_finite() {
            return Reading::Absent;
        }
        match policy {
            ReadingPolicy::Legacy if value == 0.0 => Reading::Absent,
            _ => Reading::Present(value),
        }
    }

    /// Zero, NaN and infinities are treated as "not measured".
    pub fn legacy(value: f64) -> Self {
        Self::resolve(value, ReadingPolicy::Legacy)
    }

    /// Zero is a real reading; only NaN and infinities are absent.
    pub fn strict(value: f64) -> Self {
        Self::resolve(value, ReadingPolicy::Strict)
    }

    /// Parse free text from an intake form. Blank or non-numeric text is absent.
    pub fn parse(raw: &str, policy: ReadingPolicy) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Reading::Absent;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::resolve(value, policy),
            Err(_) => Reading::Absent,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Reading::Present(v) => Some(v),
            Reading::Absent => None,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Reading::Present(_))
    }

    /// The value, or 0 when absent (the engine's degraded-mode sentinel).
    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    /// First present reading of `self` and `fallback`.
    pub fn or(self, fallback: Reading) -> Reading {
        match self {
            Reading::Present(_) => self,
            Reading::Absent => fallback,
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::legacy(value)
    }
}

impl From<u32> for Reading {
    fn from(value: u32) -> Self {
        Reading::legacy(f64::from(value))
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Reading::Absent, Reading::legacy)
    }
}

/// A reading as it arrives over the wire: a JSON number, a string typed into a
/// form field, or anything else (which resolves to absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawReading {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawReading {
    pub fn resolve(&self, policy: ReadingPolicy) -> Reading {
        match self {
            RawReading::Number(v) => Reading::resolve(*v, policy),
            RawReading::Text(s) => Reading::parse(s, policy),
            RawReading::Other(_) => Reading::Absent,
        }
    }
}

/// Resolve an optional wire value; a missing field is absent.
pub fn resolve_raw(raw: Option<&RawReading>, policy: ReadingPolicy) -> Reading {
    raw.map_or(Reading::Absent, |r| r.resolve(policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_treats_zero_as_missing() {
        assert_eq!(Reading::legacy(0.0), Reading::Absent);
        assert_eq!(Reading::legacy(-0.0), Reading::Absent);
        assert_eq!(Reading::legacy(72.0), Reading::Present(72.0));
    }

    #[test]
    fn strict_keeps_zero() {
        assert_eq!(Reading::strict(0.0), Reading::Present(0.0));
    }

    #[test]
    fn non_finite_is_always_absent() {
        for policy in [ReadingPolicy::Legacy, ReadingPolicy::Strict] {
            assert_eq!(Reading::resolve(f64::NAN, policy), Reading::Absent);
            assert_eq!(Reading::resolve(f64::INFINITY, policy), Reading::Absent);
        }
    }

    #[test]
    fn parse_form_text() {
        let p = ReadingPolicy::Legacy;
        assert_eq!(Reading::parse(" 98.6 ", p), Reading::Present(98.6));
        assert_eq!(Reading::parse("", p), Reading::Absent);
        assert_eq!(Reading::parse("abc", p), Reading::Absent);
        assert_eq!(Reading::parse("0", p), Reading::Absent);
        assert_eq!(Reading::parse("0", ReadingPolicy::Strict), Reading::Present(0.0));
        assert_eq!(Reading::parse("NaN", ReadingPolicy::Strict), Reading::Absent);
    }

    #[test]
    fn conversions_use_legacy_policy() {
        assert_eq!(Reading::from(0.0), Reading::Absent);
        assert_eq!(Reading::from(None), Reading::Absent);
        assert_eq!(Reading::from(Some(120.0)), Reading::Present(120.0));
        assert_eq!(Reading::from(3u32), Reading::Present(3.0));
    }

    #[test]
    fn or_prefers_first_present() {
        assert_eq!(Reading::Absent.or(Reading::Present(1.0)), Reading::Present(1.0));
        assert_eq!(
            Reading::Present(2.0).or(Reading::Present(1.0)),
            Reading::Present(2.0)
        );
        assert_eq!(Reading::Absent.or_zero(), 0.0);
    }

    #[test]
    fn raw_reading_accepts_numbers_strings_and_junk() {
        let values: Vec<RawReading> =
            serde_json::from_str(r#"[120, "80", "", true, null]"#).unwrap();
        let resolved: Vec<Reading> = values
            .iter()
            .map(|r| r.resolve(ReadingPolicy::Legacy))
            .collect();
        assert_eq!(
            resolved,
            vec![
                Reading::Present(120.0),
                Reading::Present(80.0),
                Reading::Absent,
                Reading::Absent,
                Reading::Absent,
            ]
        );
    }

    #[test]
    fn resolve_raw_missing_field() {
        assert_eq!(resolve_raw(None, ReadingPolicy::Strict), Reading::Absent);
    }
}
