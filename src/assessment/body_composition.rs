//! Bioelectrical-impedance body composition.
//!
//! Each step is an independent total function; `estimate` evaluates them once
//! each in dependency order and threads clamped intermediates into their
//! dependents. Without an impedance reading (or without a weight) the fat-free
//! mass falls back to a fixed 80% of body weight and the result is tagged
//! `MeasurementMode::Estimated`.

use serde::{Deserialize, Serialize};

use super::rounding::{bounded, bounded_int, clamp_band, round1, round5, share_of};
use crate::models::{MeasurementMode, Sex};

/// Fat-free share of body weight used when impedance is unavailable.
pub const DEGRADED_FFM_RATIO: f64 = 0.8;

// ── Sex-specific reference values ──

fn bone_factor(sex: Sex) -> f64 {
    if sex.is_male() {
        1.1
    } else {
        0.9
    }
}

/// Healthy muscle-percent band.
pub fn muscle_band(sex: Sex) -> (f64, f64) {
    if sex.is_male() {
        (33.0, 52.0)
    } else {
        (24.0, 42.0)
    }
}

/// Healthy body-water band.
pub fn water_band(sex: Sex) -> (f64, f64) {
    if sex.is_male() {
        (50.0, 65.0)
    } else {
        (45.0, 60.0)
    }
}

/// Target body-fat percent used by the score and the fat control.
pub fn target_fat_percent(sex: Sex) -> f64 {
    if sex.is_male() {
        12.0
    } else {
        22.0
    }
}

fn reference_bmr(sex: Sex) -> f64 {
    if sex.is_male() {
        1500.0
    } else {
        1200.0
    }
}

/// Share of body weight treated as the muscle target.
const TARGET_MUSCLE_PERCENT: f64 = 45.0;

fn height_m_squared(height_cm: f64) -> f64 {
    let m = height_cm / 100.0;
    m * m
}

// ═══════════════════════════════════════════
// Steps
// ═══════════════════════════════════════════

/// Whether `fat_free_mass` will use the degraded estimate.
pub fn is_degraded(weight_kg: f64, impedance_ohms: f64) -> bool {
    weight_kg == 0.0 || impedance_ohms.is_nan() || impedance_ohms <= 0.0
}

/// Fat-free mass (kg). The degraded estimate is returned as-is; the impedance
/// estimate is clamped into `[0.5 * weight, weight - 1]`.
pub fn fat_free_mass(weight_kg: f64, height_cm: f64, age_years: f64, impedance_ohms: f64) -> f64 {
    if is_degraded(weight_kg, impedance_ohms) {
        return weight_kg * DEGRADED_FFM_RATIO;
    }
    let raw = 0.7374 * (height_cm * height_cm / impedance_ohms) + 0.1763 * weight_kg
        - 0.1773 * age_years
        - 2.4658;
    bounded(raw, weight_kg * 0.5, weight_kg - 1.0)
}

/// Body fat percent in `[5, 50]`; exactly 0 for a non-positive weight.
pub fn fat_percent(weight_kg: f64, ffm: f64) -> f64 {
    if weight_kg.is_nan() || weight_kg <= 0.0 {
        return 0.0;
    }
    let fat_mass = (weight_kg - ffm).max(0.0);
    bounded(fat_mass / weight_kg * 100.0, 5.0, 50.0)
}

pub fn fat_mass(weight_kg: f64, fat_percent: f64) -> f64 {
    share_of(weight_kg, fat_percent)
}

/// Bone mass (kg) in `[1, 5]`.
pub fn bone_mass(weight_kg: f64, sex: Sex) -> f64 {
    bounded(0.042 * weight_kg * bone_factor(sex), 1.0, 5.0)
}

pub fn bone_percent(weight_kg: f64, bone_mass: f64) -> f64 {
    if weight_kg > 0.0 {
        round5(bone_mass / weight_kg * 100.0)
    } else {
        0.0
    }
}

/// Remainder after fat and bone, clamped into the sex-specific muscle band.
/// The three shares are not reconciled to sum to 100.
pub fn muscle_percent(fat_percent: f64, bone_percent: f64, sex: Sex) -> f64 {
    let (lo, hi) = muscle_band(sex);
    bounded(100.0 - fat_percent - bone_percent, lo, hi)
}

pub fn muscle_mass(weight_kg: f64, muscle_percent: f64) -> f64 {
    share_of(weight_kg, muscle_percent)
}

pub fn skeletal_muscle_percent(muscle_percent: f64) -> f64 {
    round5(0.7 * muscle_percent)
}

pub fn water_percent(weight_kg: f64, ffm: f64, sex: Sex) -> f64 {
    let raw = if weight_kg > 0.0 {
        0.73 * (ffm / weight_kg) * 100.0
    } else {
        0.0
    };
    let (lo, hi) = water_band(sex);
    bounded(raw, lo, hi)
}

pub fn water_mass(weight_kg: f64, water_percent: f64) -> f64 {
    share_of(weight_kg, water_percent)
}

pub fn protein_percent(muscle_percent: f64) -> f64 {
    if muscle_percent > 0.0 {
        bounded(0.412 * muscle_percent, 12.0, 18.0)
    } else {
        0.0
    }
}

pub fn protein_mass(weight_kg: f64, protein_percent: f64) -> f64 {
    share_of(weight_kg, protein_percent)
}

/// BMI in `[1, 90]`; 0 without a height.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm > 0.0 {
        bounded(weight_kg / height_m_squared(height_cm), 1.0, 90.0)
    } else {
        0.0
    }
}

/// Visceral fat rating 1..=20.
pub fn visceral_fat_level(fat_percent: f64, bmi: f64) -> u32 {
    bounded_int(0.1 * fat_percent + 0.05 * bmi - 1.0, 1, 20)
}

/// Visceral fat area (cm²).
pub fn visceral_fat_area(level: u32) -> f64 {
    round5(5.9 * f64::from(level))
}

pub fn visceral_fat_mass(level: u32, weight_kg: f64) -> f64 {
    share_of(weight_kg, f64::from(level))
}

pub fn subcutaneous_fat_percent(fat_percent: f64) -> f64 {
    round5(0.99 * fat_percent)
}

pub fn subcutaneous_fat_mass(weight_kg: f64, subcutaneous_fat_percent: f64) -> f64 {
    share_of(weight_kg, subcutaneous_fat_percent)
}

/// Mifflin-St Jeor basal metabolic rate (kcal/day), one decimal, `[500, 5000]`.
pub fn bmr(weight_kg: f64, height_cm: f64, sex: Sex, age_years: f64) -> f64 {
    let offset = if sex.is_male() { 5.0 } else { -161.0 };
    let raw = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years + offset;
    clamp_band(round1(raw), 500.0, 5000.0)
}

/// Metabolic age in years, `[16, 100]`.
pub fn metabolic_age(bmr: f64, age_years: f64, sex: Sex) -> u32 {
    bounded_int(age_years + (bmr - reference_bmr(sex)) / 38.0 - 3.0, 16, 100)
}

/// Overall body score 0..=100.
pub fn body_score(bmi: f64, fat_percent: f64, sex: Sex) -> u32 {
    let penalty = (bmi - 22.0).abs() * 1.2 + (fat_percent - target_fat_percent(sex)).abs() * 1.5;
    bounded_int(100.0 - penalty, 0, 100)
}

/// Fat-free mass index (kg/m²); 0 without a height.
pub fn ffmi(weight_kg: f64, height_cm: f64, fat_mass: f64) -> f64 {
    if height_cm > 0.0 {
        round5((weight_kg - fat_mass) / height_m_squared(height_cm))
    } else {
        0.0
    }
}

pub fn fat_free_weight(weight_kg: f64, fat_mass: f64) -> f64 {
    round5(weight_kg - fat_mass)
}

/// Du Bois body surface area (m²).
pub fn body_surface_area(height_cm: f64, weight_kg: f64) -> f64 {
    if height_cm > 0.0 && weight_kg > 0.0 {
        round5(0.007184 * height_cm.powf(0.725) * weight_kg.powf(0.425))
    } else {
        0.0
    }
}

/// Devine ideal body weight (kg).
pub fn ideal_body_weight(height_cm: f64, sex: Sex) -> f64 {
    let base = if sex.is_male() { 50.0 } else { 45.5 };
    round5(base + 2.3 * (height_cm / 2.54 - 60.0))
}

/// Weight at BMI 22.
pub fn standard_weight(height_cm: f64) -> f64 {
    round5(22.0 * height_m_squared(height_cm))
}

/// Kilograms to gain (positive) or lose (negative) to reach the standard weight.
pub fn weight_control(standard_weight: f64, weight_kg: f64) -> f64 {
    round5(standard_weight - weight_kg)
}

pub fn fat_control(weight_kg: f64, fat_mass: f64, sex: Sex) -> f64 {
    round5(share_of(weight_kg, target_fat_percent(sex)) - fat_mass)
}

pub fn muscle_control(weight_kg: f64, muscle_mass: f64) -> f64 {
    round5(share_of(weight_kg, TARGET_MUSCLE_PERCENT) - muscle_mass)
}

// ═══════════════════════════════════════════
// Aggregate
// ═══════════════════════════════════════════

/// Inputs to one body composition estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub age_years: f64,
    #[serde(default)]
    pub impedance_ohms: f64,
}

// ── Input caps ──

pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;
pub const MAX_AGE_YEARS: f64 = 150.0;
pub const MAX_IMPEDANCE_OHMS: f64 = 10_000.0;

/// Non-finite or negative becomes 0; anything above `cap` becomes `cap`.
fn sanitize(value: f64, cap: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.min(cap)
    } else {
        0.0
    }
}

impl BodyMeasurements {
    pub fn new(weight_kg: f64, height_cm: f64, sex: Sex, age_years: f64, impedance_ohms: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
            sex,
            age_years,
            impedance_ohms,
        }
    }

    /// Non-finite or negative inputs become 0 and oversized ones are capped,
    /// so no intermediate can overflow.
    pub fn sanitized(self) -> Self {
        Self {
            weight_kg: sanitize(self.weight_kg, MAX_WEIGHT_KG),
            height_cm: sanitize(self.height_cm, MAX_HEIGHT_CM),
            sex: self.sex,
            age_years: sanitize(self.age_years, MAX_AGE_YEARS),
            impedance_ohms: sanitize(self.impedance_ohms, MAX_IMPEDANCE_OHMS),
        }
    }

    /// The result echoes the sanitised inputs the formulas ran on.
    pub fn estimate(self) -> BodyCompositionResult {
        let inputs = self.sanitized();
        let BodyMeasurements {
            weight_kg: w,
            height_cm: h,
            sex,
            age_years: age,
            impedance_ohms: imp,
        } = inputs;

        let measurement_mode = if is_degraded(w, imp) {
            MeasurementMode::Estimated
        } else {
            MeasurementMode::Bioimpedance
        };

        let ffm = fat_free_mass(w, h, age, imp);
        let fat_pct = fat_percent(w, ffm);
        let fat_kg = fat_mass(w, fat_pct);
        let bone_kg = bone_mass(w, sex);
        let bone_pct = bone_percent(w, bone_kg);
        let muscle_pct = muscle_percent(fat_pct, bone_pct, sex);
        let muscle_kg = muscle_mass(w, muscle_pct);
        let water_pct = water_percent(w, ffm, sex);
        let protein_pct = protein_percent(muscle_pct);
        let bmi = bmi(w, h);
        let visceral = visceral_fat_level(fat_pct, bmi);
        let subcutaneous_pct = subcutaneous_fat_percent(fat_pct);
        let bmr = bmr(w, h, sex, age);
        let standard = standard_weight(h);

        BodyCompositionResult {
            measurements: inputs,
            measurement_mode,
            fat_free_mass: ffm,
            fat_percent: fat_pct,
            fat_mass: fat_kg,
            bone_mass: bone_kg,
            bone_percent: bone_pct,
            muscle_percent: muscle_pct,
            muscle_mass: muscle_kg,
            skeletal_muscle_percent: skeletal_muscle_percent(muscle_pct),
            water_percent: water_pct,
            water_mass: water_mass(w, water_pct),
            protein_percent: protein_pct,
            protein_mass: protein_mass(w, protein_pct),
            bmi,
            visceral_fat_level: visceral,
            visceral_fat_area: visceral_fat_area(visceral),
            visceral_fat_mass: visceral_fat_mass(visceral, w),
            subcutaneous_fat_percent: subcutaneous_pct,
            subcutaneous_fat_mass: subcutaneous_fat_mass(w, subcutaneous_pct),
            bmr,
            metabolic_age: metabolic_age(bmr, age, sex),
            body_score: body_score(bmi, fat_pct, sex),
            ffmi: ffmi(w, h, fat_kg),
            fat_free_weight: fat_free_weight(w, fat_kg),
            body_surface_area: body_surface_area(h, w),
            ideal_body_weight: ideal_body_weight(h, sex),
            standard_weight: standard,
            weight_control: weight_control(standard, w),
            fat_control: fat_control(w, fat_kg, sex),
            muscle_control: muscle_control(w, muscle_kg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyCompositionResult {
    /// Inputs after sanitisation, as the formulas saw them.
    pub measurements: BodyMeasurements,
    pub measurement_mode: MeasurementMode,
    pub fat_free_mass: f64,
    pub fat_percent: f64,
    pub fat_mass: f64,
    pub bone_mass: f64,
    pub bone_percent: f64,
    pub muscle_percent: f64,
    pub muscle_mass: f64,
    pub skeletal_muscle_percent: f64,
    pub water_percent: f64,
    pub water_mass: f64,
    pub protein_percent: f64,
    pub protein_mass: f64,
    pub bmi: f64,
    pub visceral_fat_level: u32,
    pub visceral_fat_area: f64,
    pub visceral_fat_mass: f64,
    pub subcutaneous_fat_percent: f64,
    pub subcutaneous_fat_mass: f64,
    pub bmr: f64,
    pub metabolic_age: u32,
    pub body_score: u32,
    pub ffmi: f64,
    pub fat_free_weight: f64,
    pub body_surface_area: f64,
    pub ideal_body_weight: f64,
    pub standard_weight: f64,
    pub weight_control: f64,
    pub fat_control: f64,
    pub muscle_control: f64,
}

impl BodyCompositionResult {
    /// Every float field, for range checks.
    pub fn float_fields(&self) -> [f64; 26] {
        [
            self.fat_free_mass,
            self.fat_percent,
            self.fat_mass,
            self.bone_mass,
            self.bone_percent,
            self.muscle_percent,
            self.muscle_mass,
            self.skeletal_muscle_percent,
            self.water_percent,
            self.water_mass,
            self.protein_percent,
            self.protein_mass,
            self.bmi,
            self.visceral_fat_area,
            self.visceral_fat_mass,
            self.subcutaneous_fat_percent,
            self.subcutaneous_fat_mass,
            self.bmr,
            self.ffmi,
            self.fat_free_weight,
            self.body_surface_area,
            self.ideal_body_weight,
            self.standard_weight,
            self.weight_control,
            self.fat_control,
            self.muscle_control,
        ]
    }
}

pub fn compute_body_composition(
    weight_kg: f64,
    height_cm: f64,
    sex: Sex,
    age_years: f64,
    impedance_ohms: f64,
) -> BodyCompositionResult {
    BodyMeasurements::new(weight_kg, height_cm, sex, age_years, impedance_ohms).estimate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmr_regression_values() {
        // Mifflin-St Jeor: 700 + 1062.5 - 150 + 5 / - 161.
        assert_eq!(bmr(70.0, 170.0, Sex::Male, 30.0), 1617.5);
        assert_eq!(bmr(70.0, 170.0, Sex::Female, 30.0), 1451.5);
    }

    #[test]
    fn bmr_is_clamped() {
        assert_eq!(bmr(1.0, 50.0, Sex::Female, 120.0), 500.0);
        assert_eq!(bmr(500.0, 250.0, Sex::Male, 0.0), 5000.0);
    }

    #[test]
    fn reference_adult_male() {
        let r = compute_body_composition(70.0, 170.0, Sex::Male, 30.0, 500.0);
        assert_eq!(r.measurement_mode, MeasurementMode::Bioimpedance);
        assert!((35.0..=69.0).contains(&r.fat_free_mass));
        assert!((5.0..=50.0).contains(&r.fat_percent));
        assert_eq!(r.muscle_percent, 52.0);
        assert_eq!(r.water_percent, 50.0);
        assert_eq!(r.bone_mass, 3.234);
        assert_eq!(r.bmi, 24.22145);
        assert_eq!(r.bmr, 1617.5);
        assert_eq!(r.visceral_fat_level, 3);
        assert_eq!(r.metabolic_age, 30);
        assert_eq!(r.body_score, 66);
        assert!(r.float_fields().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn zero_impedance_uses_degraded_ffm() {
        let r = compute_body_composition(70.0, 170.0, Sex::Male, 30.0, 0.0);
        assert_eq!(r.measurement_mode, MeasurementMode::Estimated);
        assert_eq!(r.fat_free_mass, 70.0 * 0.8);
        assert_eq!(r.fat_percent, 20.0);
        for v in r.float_fields() {
            assert!(v.is_finite());
        }
        for v in [
            r.fat_mass,
            r.bone_mass,
            r.muscle_mass,
            r.water_mass,
            r.protein_mass,
            r.bmi,
            r.bmr,
            r.ffmi,
            r.body_surface_area,
        ] {
            assert!(v >= 0.0);
        }
    }

    #[test]
    fn zero_weight_has_no_mass() {
        let r = compute_body_composition(0.0, 170.0, Sex::Female, 30.0, 500.0);
        assert_eq!(r.measurement_mode, MeasurementMode::Estimated);
        assert_eq!(r.fat_free_mass, 0.0);
        assert_eq!(r.fat_percent, 0.0);
        assert_eq!(r.fat_mass, 0.0);
        assert_eq!(r.muscle_mass, 0.0);
        assert_eq!(r.water_mass, 0.0);
        assert_eq!(r.protein_mass, 0.0);
        assert_eq!(r.body_surface_area, 0.0);
        assert!(r.float_fields().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn junk_inputs_are_sanitized() {
        let r = compute_body_composition(f64::NAN, -170.0, Sex::Male, f64::INFINITY, -3.0);
        assert!(r.float_fields().iter().all(|v| v.is_finite()));
        assert_eq!(r.bmi, 0.0);
        assert_eq!(r.ffmi, 0.0);
        assert_eq!(r.measurement_mode, MeasurementMode::Estimated);
        assert_eq!(r.measurements.weight_kg, 0.0);
        assert_eq!(r.measurements.age_years, 0.0);
    }

    #[test]
    fn huge_finite_inputs_stay_finite() {
        for sex in [Sex::Male, Sex::Female] {
            for (w, h, age, imp) in [
                (1e306, 170.0, 30.0, 500.0),
                (70.0, 1e200, 30.0, 500.0),
                (70.0, 170.0, 1e300, 500.0),
                (70.0, 170.0, 30.0, 1e250),
                (f64::MAX, f64::MAX, f64::MAX, f64::MAX),
            ] {
                let r = compute_body_composition(w, h, sex, age, imp);
                let ctx = format!("{sex:?} w={w:e} h={h:e} age={age:e} imp={imp:e}");
                assert!(r.float_fields().iter().all(|v| v.is_finite()), "{ctx}");
                let json = serde_json::to_value(&r).unwrap();
                assert!(json["fat_control"].is_number(), "{ctx}");
                assert!(json["weight_control"].is_number(), "{ctx}");
            }
        }

        let r = compute_body_composition(1e306, 170.0, Sex::Male, 30.0, 500.0);
        assert_eq!(r.measurements.weight_kg, MAX_WEIGHT_KG);
        let r = compute_body_composition(70.0, 1e200, Sex::Male, 30.0, 500.0);
        assert_eq!(r.measurements.height_cm, MAX_HEIGHT_CM);
    }

    #[test]
    fn identical_inputs_identical_output() {
        let a = compute_body_composition(82.3, 181.0, Sex::Male, 44.0, 512.0);
        let b = compute_body_composition(82.3, 181.0, Sex::Male, 44.0, 512.0);
        assert_eq!(a, b);
        for (x, y) in a.float_fields().iter().zip(b.float_fields().iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn shares_need_not_sum_to_hundred() {
        let r = compute_body_composition(70.0, 170.0, Sex::Male, 30.0, 500.0);
        let total = r.fat_percent + r.muscle_percent + r.bone_percent;
        // Muscle is clamped to its band independently of fat and bone.
        assert!((total - 100.0).abs() > 5.0);
        assert!((80.0..=105.0).contains(&total));
    }

    #[test]
    fn bounded_over_input_grid() {
        let weights = [0.5, 1.0, 5.0, 20.0, 45.0, 70.0, 120.0, 250.0, 500.0];
        let heights = [50.5, 100.0, 150.0, 170.0, 200.0, 250.0];
        let ages = [0.5, 18.0, 30.0, 65.0, 120.0];
        let impedances = [0.0, 1.0, 150.0, 500.0, 900.0, 2000.0];

        for sex in [Sex::Male, Sex::Female] {
            let (m_lo, m_hi) = muscle_band(sex);
            let (w_lo, w_hi) = water_band(sex);
            for &w in &weights {
                for &h in &heights {
                    for &age in &ages {
                        for &imp in &impedances {
                            let r = compute_body_composition(w, h, sex, age, imp);
                            let ctx = format!("{sex:?} w={w} h={h} age={age} imp={imp}");
                            assert!((5.0..=50.0).contains(&r.fat_percent), "{ctx}");
                            assert!((1.0..=5.0).contains(&r.bone_mass), "{ctx}");
                            assert!((500.0..=5000.0).contains(&r.bmr), "{ctx}");
                            assert!((m_lo..=m_hi).contains(&r.muscle_percent), "{ctx}");
                            assert!((w_lo..=w_hi).contains(&r.water_percent), "{ctx}");
                            assert!((1.0..=90.0).contains(&r.bmi), "{ctx}");
                            assert!((16..=100).contains(&r.metabolic_age), "{ctx}");
                            assert!((1..=20).contains(&r.visceral_fat_level), "{ctx}");
                            assert!(r.body_score <= 100, "{ctx}");
                            assert!(r.float_fields().iter().all(|v| v.is_finite()), "{ctx}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn ffm_clamp_band() {
        // Very low impedance pushes the raw estimate above weight - 1.
        assert_eq!(fat_free_mass(70.0, 170.0, 30.0, 1.0), 69.0);
        // Very high impedance pulls it below half of body weight.
        assert_eq!(fat_free_mass(70.0, 170.0, 30.0, 100_000.0), 35.0);
    }

    #[test]
    fn fat_percent_guards() {
        assert_eq!(fat_percent(0.0, 0.0), 0.0);
        assert_eq!(fat_percent(70.0, 70.0), 5.0);
        assert_eq!(fat_percent(70.0, 10.0), 50.0);
    }

    #[test]
    fn protein_percent_floor() {
        assert_eq!(protein_percent(0.0), 0.0);
        assert_eq!(protein_percent(24.0), 12.0);
        assert_eq!(protein_percent(52.0), 18.0);
    }

    #[test]
    fn reference_weights() {
        assert_eq!(standard_weight(170.0), 63.58);
        assert_eq!(weight_control(63.58, 70.0), -6.42);
        assert_eq!(ideal_body_weight(152.4, Sex::Male), 50.0);
        assert_eq!(ideal_body_weight(152.4, Sex::Female), 45.5);
    }

    #[test]
    fn visceral_derivatives() {
        assert_eq!(visceral_fat_area(10), 59.0);
        assert_eq!(visceral_fat_mass(10, 80.0), 8.0);
    }
}
