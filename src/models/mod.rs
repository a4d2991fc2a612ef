pub mod enums;
pub mod patient;
pub mod reading;
pub mod vital_sign;

pub use enums::{MeasurementMode, ReadingPolicy, RenderTarget, Sex};
pub use patient::{PatientInput, PatientProfile};
pub use reading::{RawReading, Reading};
pub use vital_sign::{VitalType, VitalsInput, VitalsReading};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
