//! Shared types for the kiosk API layer.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::error::ApiError;
use crate::config::KioskConfig;
use crate::device::{ScaleSample, WeightStabilizer};

// ═══════════════════════════════════════════════════════════
// API context: shared state for the kiosk router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<KioskConfig>,
    pub scale: Arc<Mutex<ScaleState>>,
}

impl ApiContext {
    pub fn new(config: KioskConfig) -> Self {
        Self {
            config: Arc::new(config),
            scale: Arc::new(Mutex::new(ScaleState::default())),
        }
    }

    /// Lock the scale state. Held only long enough to copy or update it.
    pub fn lock_scale(&self) -> Result<MutexGuard<'_, ScaleState>, ApiError> {
        self.scale
            .lock()
            .map_err(|_| ApiError::Internal("scale state lock poisoned".into()))
    }
}

// ═══════════════════════════════════════════════════════════
// Scale state: what the "Fetch from Device" button reads
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct ScaleState {
    pub latest: Option<ScaleSample>,
    pub last_error: Option<String>,
    pub stable: bool,
    pub stabilizer: WeightStabilizer,
    pub samples_received: u64,
}

impl ScaleState {
    pub fn record(&mut self, sample: ScaleSample) {
        self.latest = Some(sample);
        self.last_error = None;
        self.samples_received += 1;
    }

    pub fn record_error(&mut self, message: String) {
        self.last_error = Some(message);
        self.stable = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_clears_previous_error() {
        let mut state = ScaleState::default();
        state.record_error("short payload".into());
        assert!(state.last_error.is_some());
        state.record(ScaleSample {
            weight_kg: 70.0,
            impedance_ohms: 500.0,
        });
        assert!(state.last_error.is_none());
        assert_eq!(state.samples_received, 1);
    }

    #[test]
    fn context_clones_share_scale_state() {
        let ctx = ApiContext::new(KioskConfig::default());
        let other = ctx.clone();
        ctx.lock_scale().unwrap().samples_received = 5;
        assert_eq!(other.lock_scale().unwrap().samples_received, 5);
    }
}
