//! Smart-scale bridge.
//!
//! The scale broadcasts weight and impedance in its BLE manufacturer data.
//! This module decodes those payloads, filters advertisers by name, and waits
//! for the weight to settle before a reading is offered to the front end.
//! Radio scanning itself happens outside the crate; payloads arrive over HTTP.

pub mod advertisement;
pub mod stability;

pub use advertisement::{decode_advertisement, is_target_device, ScaleSample};
pub use stability::{Stability, WeightStabilizer};

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

/// Errors from decoding scale payloads.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DeviceError {
    #[error("Payload too short: {len} bytes, need at least {min}")]
    PayloadTooShort { len: usize, min: usize },
    #[error("Invalid weight ({0} kg); step on the scale again")]
    InvalidWeight(f64),
    #[error("Manufacturer data is not valid base64")]
    InvalidEncoding,
}
