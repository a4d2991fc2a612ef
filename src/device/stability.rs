use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::Serialize;

/// Readings that must agree before a weight counts as settled.
pub const STABLE_READINGS_REQUIRED: usize = 3;
/// Maximum step between consecutive readings (kg).
pub const STABLE_WEIGHT_THRESHOLD: f64 = 0.05;
/// Minimum time the settled window must span.
pub const STABLE_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Stability {
    /// Not enough readings yet, or the window is too short.
    Settling,
    /// The person is still moving on the platform.
    Fluctuating,
    /// Settled. `fresh` is true only for the first stable reading after a
    /// fluctuation, so a report is produced once per weighing.
    Stable { weight_kg: f64, fresh: bool },
}

/// Sliding window over recent weights.
#[derive(Debug, Default)]
pub struct WeightStabilizer {
    window: VecDeque<(f64, Instant)>,
    reported: bool,
}

impl WeightStabilizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, weight_kg: f64, at: Instant) -> Stability {
        self.window.push_back((weight_kg, at));
        while self.window.len() > STABLE_READINGS_REQUIRED {
            self.window.pop_front();
        }
        if self.window.len() < STABLE_READINGS_REQUIRED {
            return Stability::Settling;
        }

        let steady = self
            .window
            .iter()
            .zip(self.window.iter().skip(1))
            .all(|((a, _), (b, _))| (b - a).abs() < STABLE_WEIGHT_THRESHOLD);

        if !steady {
            let first = self.window[0].0;
            if self
                .window
                .iter()
                .skip(1)
                .any(|(w, _)| (w - first).abs() >= STABLE_WEIGHT_THRESHOLD)
            {
                self.reported = false;
            }
            return Stability::Fluctuating;
        }

        let span = match (self.window.front(), self.window.back()) {
            (Some((_, first)), Some((_, last))) => last.saturating_duration_since(*first),
            _ => Duration::ZERO,
        };
        if span < STABLE_DURATION {
            return Stability::Settling;
        }

        let fresh = !self.reported;
        self.reported = true;
        Stability::Stable { weight_kg, fresh }
    }

    pub fn reset(&mut self) {
        self.window.clear();
        self.reported = false;
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}
