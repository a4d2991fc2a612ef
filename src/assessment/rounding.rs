//! Rounding and clamping primitives shared by every formula.
//!
//! Rounding is half-up (`floor(x + 0.5)`), the convention the kiosk front end
//! has always printed with. Clamping never panics: an inverted band resolves to
//! its lower bound and NaN resolves to the upper bound, so a corrupt input still
//! produces a bounded number.

const ROUND5_SCALE: f64 = 100_000.0;

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Canonical 5-decimal rounding applied before any comparison or clamp.
pub fn round5(x: f64) -> f64 {
    round_half_up(x * ROUND5_SCALE) / ROUND5_SCALE
}

/// One-decimal rounding (BMR).
pub fn round1(x: f64) -> f64 {
    round_half_up(x * 10.0) / 10.0
}

/// `max(lo, min(x, hi))`, evaluated in that order.
pub fn clamp_band(x: f64, lo: f64, hi: f64) -> f64 {
    lo.max(x.min(hi))
}

/// `round5` then clamp into `[lo, hi]`.
pub fn bounded(x: f64, lo: f64, hi: f64) -> f64 {
    clamp_band(round5(x), lo, hi)
}

/// Round half-up to an integer score and clamp it into `[lo, hi]`.
pub fn bounded_int(x: f64, lo: u32, hi: u32) -> u32 {
    clamp_band(round_half_up(x), f64::from(lo), f64::from(hi)) as u32
}

/// Multiply a share of body weight, returning 0 for a non-positive weight.
pub fn share_of(weight: f64, percent: f64) -> f64 {
    if weight > 0.0 {
        round5(weight * percent / 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round5_truncates_float_noise() {
        assert_eq!(round5(0.1 + 0.2), 0.3);
        assert_eq!(round5(32.571428571), 32.57143);
        assert_eq!(round5(-1.234564), -1.23456);
    }

    #[test]
    fn half_up_on_ties() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-0.95), -1.0);
        assert_eq!(round1(98.66), 98.7);
        assert_eq!(round1(1617.5), 1617.5);
    }

    #[test]
    fn clamp_band_edges() {
        assert_eq!(clamp_band(3.0, 5.0, 50.0), 5.0);
        assert_eq!(clamp_band(60.0, 5.0, 50.0), 50.0);
        assert_eq!(clamp_band(20.0, 5.0, 50.0), 20.0);
    }

    #[test]
    fn clamp_band_never_panics() {
        // Inverted band (tiny body weight): lower bound wins.
        assert_eq!(clamp_band(10.0, 0.5, 0.0), 0.5);
        // NaN collapses to the upper bound.
        assert_eq!(clamp_band(f64::NAN, 5.0, 50.0), 50.0);
    }

    #[test]
    fn bounded_int_clamps() {
        assert_eq!(bounded_int(-0.95, 1, 20), 1);
        assert_eq!(bounded_int(25.4, 1, 20), 20);
        assert_eq!(bounded_int(7.5, 1, 20), 8);
        assert_eq!(bounded_int(f64::NAN, 0, 100), 100);
    }

    #[test]
    fn share_of_zero_weight() {
        assert_eq!(share_of(0.0, 22.0), 0.0);
        assert_eq!(share_of(-4.0, 22.0), 0.0);
        assert_eq!(share_of(70.0, 12.0), 8.4);
    }
}
