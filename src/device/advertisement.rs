use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::DeviceError;

/// Weight and impedance occupy the first four bytes; anything after them is
/// ignored.
pub const MIN_PAYLOAD_LEN: usize = 4;

/// One decoded broadcast from the scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleSample {
    pub weight_kg: f64,
    /// Ohms; 0 when the scale did not measure impedance (shoes on, one foot).
    pub impedance_ohms: f64,
}

impl ScaleSample {
    pub fn has_impedance(&self) -> bool {
        self.impedance_ohms > 0.0
    }
}

/// Decode manufacturer data: big-endian u16 weight in 10 g units followed by
/// a big-endian u16 impedance in tenths of an ohm.
pub fn decode_advertisement(data: &[u8]) -> Result<ScaleSample, DeviceError> {
    if data.len() < MIN_PAYLOAD_LEN {
        return Err(DeviceError::PayloadTooShort {
            len: data.len(),
            min: MIN_PAYLOAD_LEN,
        });
    }

    let weight_raw = u16::from_be_bytes([data[0], data[1]]);
    let impedance_raw = u16::from_be_bytes([data[2], data[3]]);
    let weight_kg = f64::from(weight_raw) * 0.01;
    let impedance_ohms = f64::from(impedance_raw) / 10.0;

    if weight_kg <= 0.0 {
        return Err(DeviceError::InvalidWeight(weight_kg));
    }

    Ok(ScaleSample {
        weight_kg,
        impedance_ohms,
    })
}

/// Decode base64 manufacturer data as relayed by the scanner.
pub fn decode_base64_advertisement(encoded: &str) -> Result<ScaleSample, DeviceError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|_| DeviceError::InvalidEncoding)?;
    decode_advertisement(&bytes)
}

/// Case-insensitive substring match on the advertised name. An empty filter
/// accepts every named device; unnamed devices never match.
pub fn is_target_device(name: Option<&str>, filter: &str) -> bool {
    let Some(name) = name else {
        return false;
    };
    filter.is_empty() || name.to_lowercase().contains(&filter.to_lowercase())
}
