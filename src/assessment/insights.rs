//! Plain-language grading of a body composition result.
//!
//! Bands are inclusive as written and evaluated in order, so values that fall
//! between two bands (male fat 13.5%, say) drop to the last branch.

use serde::Serialize;

use super::body_composition::{water_band, BodyCompositionResult, BodyMeasurements};
use crate::models::Sex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Athletic,
    Excellent,
    Standard,
    NeedsBoost,
}

impl Grade {
    pub fn label(self) -> &'static str {
        match self {
            Grade::Athletic => "Athletic",
            Grade::Excellent => "Excellent",
            Grade::Standard => "Standard",
            Grade::NeedsBoost => "Needs Boost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeComparison {
    Younger,
    Standard,
    Older,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    SlimLean,
    AthleticBalanced,
    RoundedStrong,
}

impl BodyType {
    pub fn label(self) -> &'static str {
        match self {
            BodyType::SlimLean => "Slim/Lean (Ectomorph-like)",
            BodyType::AthleticBalanced => "Athletic/Balanced (Mesomorph-like)",
            BodyType::RoundedStrong => "Rounded/Strong (Endomorph-like)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlDirection {
    Gain,
    Reduce,
    Standard,
}

/// A graded metric with its advice line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub grade: Grade,
    pub label: &'static str,
    pub message: String,
}

impl Insight {
    fn new(grade: Grade, message: impl Into<String>) -> Self {
        Self {
            grade,
            label: grade.label(),
            message: message.into(),
        }
    }
}

fn is_senior(age: f64) -> bool {
    age > 50.0
}

// ═══════════════════════════════════════════
// Graders
// ═══════════════════════════════════════════

pub fn classify_weight(weight_kg: f64, sex: Sex, height_cm: f64) -> Insight {
    let (lo, hi) = if sex.is_male() { (50.0, 90.0) } else { (40.0, 80.0) };
    let taller = if height_cm > 175.0 { "taller" } else { "height" };
    if weight_kg < lo {
        Insight::new(
            Grade::Athletic,
            format!("Your weight is light for your {taller}, ideal for an active lifestyle! Boost strength with nutrient-rich snacks like nuts or protein shakes."),
        )
    } else if weight_kg > hi {
        let shorter = if height_cm < 160.0 { "shorter" } else { "height" };
        Insight::new(
            Grade::NeedsBoost,
            format!("Your weight is higher for your {shorter}, which is okay! Small steps like daily walks or balanced meals can enhance energy."),
        )
    } else {
        Insight::new(
            Grade::Standard,
            format!("Your weight is nicely balanced for your {taller}. Keep up your healthy habits to stay vibrant!"),
        )
    }
}

pub fn classify_bmi(bmi: f64) -> Insight {
    if bmi < 18.5 {
        Insight::new(
            Grade::NeedsBoost,
            "Your BMI is a bit low, which might affect energy. Try nutrient-dense foods like avocados or yogurt and light exercise to feel stronger.",
        )
    } else if bmi <= 24.9 {
        Insight::new(
            Grade::Standard,
            "Your BMI is in a healthy range—fantastic! Keep up balanced meals and regular activity to stay energized.",
        )
    } else if (25.0..=29.9).contains(&bmi) {
        Insight::new(
            Grade::NeedsBoost,
            "Your BMI is slightly high. Activities like walking or adding more veggies can help you feel even better.",
        )
    } else {
        Insight::new(
            Grade::NeedsBoost,
            "Your BMI is above average. Small changes like walking or drinking more water can make a big difference over time.",
        )
    }
}

pub fn classify_fat_percent(fat_percent: f64, sex: Sex, age: f64) -> Insight {
    let senior = is_senior(age);
    if sex.is_male() {
        if fat_percent < 6.0 {
            Insight::new(
                Grade::Athletic,
                "Your body fat is very low, perfect for an active life! Ensure enough healthy fats (e.g., nuts, olive oil) to stay energized.",
            )
        } else if (6.0..=13.0).contains(&fat_percent) {
            Insight::new(
                Grade::Excellent,
                "Your body fat is in a fit, healthy range—great job! Keep up your active habits.",
            )
        } else if (14.0..=20.0).contains(&fat_percent) {
            Insight::new(
                Grade::Standard,
                "Your body fat is typical and healthy. Continue balanced nutrition and exercise to maintain it.",
            )
        } else {
            let activity = if senior {
                "light strength training"
            } else {
                "cardio like brisk walking"
            };
            Insight::new(
                Grade::NeedsBoost,
                format!("Your body fat is a bit high. Try {activity} and fiber-rich foods to shift toward lean muscle."),
            )
        }
    } else if fat_percent < 14.0 {
        Insight::new(
            Grade::Athletic,
            "Your body fat is low, ideal for an active lifestyle! Include healthy fats (e.g., avocados) for energy.",
        )
    } else if (14.0..=20.0).contains(&fat_percent) {
        Insight::new(
            Grade::Excellent,
            "Your body fat is in a healthy range—awesome! Maintain with balanced meals and movement.",
        )
    } else if (21.0..=30.0).contains(&fat_percent) {
        Insight::new(
            Grade::Standard,
            "Your body fat is normal. Keep active and eat nutrient-rich foods to stay strong.",
        )
    } else {
        let activity = if senior {
            "Add yoga or swimming"
        } else {
            "Try HIIT or walking"
        };
        Insight::new(
            Grade::NeedsBoost,
            format!("Your body fat is above average. {activity} and reduce sugary drinks to feel lighter."),
        )
    }
}

pub fn classify_muscle_percent(muscle_percent: f64, sex: Sex, age: f64) -> Insight {
    let senior = is_senior(age);
    if sex.is_male() {
        if muscle_percent < 33.0 {
            let activity = if senior {
                "gentle resistance like bands"
            } else {
                "squats or light weights"
            };
            Insight::new(
                Grade::NeedsBoost,
                format!("Your muscle level could grow. Try {activity} 3x/week to build strength."),
            )
        } else if muscle_percent <= 52.0 {
            Insight::new(
                Grade::Standard,
                "Your muscle level is great for daily activities—well done! Keep moving to maintain it.",
            )
        } else {
            Insight::new(
                Grade::Athletic,
                "Your muscles are strong and impressive, supporting mobility and energy!",
            )
        }
    } else if muscle_percent < 24.0 {
        let activity = if senior {
            "yoga or walking"
        } else {
            "body-weight exercises"
        };
        Insight::new(
            Grade::NeedsBoost,
            format!("Your muscle level could use a boost. Start with {activity} to build strength."),
        )
    } else if muscle_percent <= 42.0 {
        Insight::new(
            Grade::Standard,
            "Your muscles are in a healthy range—great job! Stay active to keep them strong.",
        )
    } else {
        Insight::new(
            Grade::Athletic,
            "Your muscle level is outstanding, enhancing your strength and vitality!",
        )
    }
}

pub fn grade_bmr(bmr: f64, sex: Sex) -> Grade {
    let (lo, hi) = if sex.is_male() {
        (1600.0, 2200.0)
    } else {
        (1200.0, 1800.0)
    };
    band_grade(bmr, lo, hi)
}

pub fn grade_ffmi(ffmi: f64, sex: Sex) -> Grade {
    let (lo, hi) = if sex.is_male() { (17.0, 25.0) } else { (14.0, 20.0) };
    band_grade(ffmi, lo, hi)
}

fn band_grade(value: f64, lo: f64, hi: f64) -> Grade {
    if value < lo {
        Grade::NeedsBoost
    } else if value <= hi {
        Grade::Standard
    } else {
        Grade::Athletic
    }
}

pub fn compare_metabolic_age(metabolic_age: u32, age: f64) -> AgeComparison {
    let metabolic = f64::from(metabolic_age);
    if metabolic < age - 5.0 {
        AgeComparison::Younger
    } else if (metabolic - age).abs() <= 5.0 {
        AgeComparison::Standard
    } else {
        AgeComparison::Older
    }
}

pub fn grade_visceral_fat(level: u32) -> Grade {
    match level {
        0..=9 => Grade::Athletic,
        10..=12 => Grade::Standard,
        _ => Grade::NeedsBoost,
    }
}

pub fn grade_water_percent(water_percent: f64, sex: Sex) -> Grade {
    let (lo, hi) = water_band(sex);
    if (lo..=hi).contains(&water_percent) {
        Grade::Standard
    } else {
        Grade::NeedsBoost
    }
}

pub fn classify_body_type(bmi: f64, fat_percent: f64, muscle_percent: f64, sex: Sex) -> BodyType {
    let male = sex.is_male();
    let (lean_fat, muscle_floor, fat_ceiling, muscle_ceiling) = if male {
        (13.0, 33.0, 20.0, 52.0)
    } else {
        (20.0, 24.0, 30.0, 42.0)
    };
    if bmi < 18.5 || (fat_percent < lean_fat && muscle_percent < muscle_floor) {
        BodyType::SlimLean
    } else if ((18.5..=24.9).contains(&bmi)
        && fat_percent <= fat_ceiling
        && muscle_percent >= muscle_floor)
        || muscle_percent > muscle_ceiling
    {
        BodyType::AthleticBalanced
    } else {
        BodyType::RoundedStrong
    }
}

pub fn control_direction(delta: f64) -> ControlDirection {
    if delta > 0.0 {
        ControlDirection::Gain
    } else if delta < 0.0 {
        ControlDirection::Reduce
    } else {
        ControlDirection::Standard
    }
}

/// Narrative paragraph printed under the body type.
pub fn body_type_insight(body_type: BodyType, m: &BodyMeasurements, age: f64) -> String {
    let (height, weight, male) = (m.height_cm, m.weight_kg, m.sex.is_male());
    let senior = is_senior(age);
    match body_type {
        BodyType::SlimLean => format!(
            "Your lean build suggests a fast metabolism, common for {} individuals. {} can build strength with calorie-dense foods (e.g., nuts, avocados) and {}. Aim for {} to support energy.",
            if height > 175.0 { "taller" } else { "slimmer" },
            if age < 40.0 { "Younger folks like you" } else { "At your age" },
            if senior { "gentle resistance like yoga" } else { "strength training" },
            if weight < 70.0 { "2,500+ kcal/day" } else { "balanced meals with 500 extra kcal" },
        ),
        BodyType::AthleticBalanced => format!(
            "Your balanced build is naturally strong, ideal for {}. {} can maintain this with a mix of cardio and {}. {} benefit from {}. Aim for 2,000-2,500 kcal with balanced nutrients.",
            if height > 175.0 { "taller frames" } else { "your height" },
            if age < 40.0 { "Younger adults" } else { "At your age" },
            if senior { "light weights" } else { "weights" },
            if male { "Men" } else { "Women" },
            if male && age < 50.0 { "bulking with heavy lifts" } else { "Pilates or body-weight moves" },
        ),
        BodyType::RoundedStrong => format!(
            "Your rounded, strong build carries more weight, common for {} frames. {} can boost energy with low-impact activities like {}. {} fiber-rich meals (veggies, whole grains) and 1,800-2,200 kcal to feel vibrant.",
            if height < 160.0 { "shorter" } else { "average/taller" },
            if senior { "Older adults" } else { "You" },
            if senior { "swimming or yoga" } else { "walking or cycling" },
            if !male && senior { "Women post-menopause" } else { "Focus on" },
        ),
    }
}

pub const ON_TRACK_GOAL: &str =
    "Your metrics are in fantastic shape—keep shining with your healthy habits!";

/// One goal per Needs Boost among BMI, muscle and fat; a single
/// encouragement line when none need work. Goals keep the report's
/// markdown emphasis.
pub fn goals(
    result: &BodyCompositionResult,
    bmi: &Insight,
    muscle: &Insight,
    fat: &Insight,
    age: f64,
) -> Vec<String> {
    let m = result.measurements.sanitized();
    let (height, weight, female) = (m.height_cm, m.weight_kg, !m.sex.is_male());
    let senior = is_senior(age);
    let taller = height > 175.0;
    let mut goals = Vec::new();

    if bmi.grade == Grade::NeedsBoost {
        if result.bmi < 18.5 {
            goals.push(format!(
                "- **BMI ({:.1}) Needs Boost**: Your weight is a bit low, which might affect energy. **Goal**: Gain 0.5-1 kg/month with nutrient-dense foods (nuts, yogurt, avocados; add {}). Try {}. {}. Check with a doctor for possible medical causes (e.g., thyroid).",
                result.bmi,
                if weight < 70.0 { "2,500+ kcal/day" } else { "500 extra kcal" },
                if senior { "gentle resistance like yoga" } else { "strength training 3x/week" },
                if height < 160.0 { "Smaller, frequent meals help for your height" } else { "" },
            ));
        } else {
            goals.push(format!(
                "- **BMI ({:.1}) Needs Boost**: Your weight is a bit high, which might affect mobility. **Goal**: Lose 0.5-1 kg/month with balanced meals (reduce 500 kcal/day) and {}. {} may need more calories initially.",
                result.bmi,
                if senior { "low-impact cardio like walking" } else { "150 min/week activity" },
                if taller { "Taller folks" } else { "" },
            ));
        }
    }
    if muscle.grade == Grade::NeedsBoost {
        goals.push(format!(
            "- **Muscle ({:.1}%) Needs Boost**: Your muscle level could grow, supporting strength {}. **Goal**: Build 0.5-1 kg muscle/month with {} 3x/week. Eat 25-40g protein/meal (chicken, beans; 1.6g/kg body weight). {}. {} may need extra reps.",
            result.muscle_percent,
            if senior { "and mobility" } else { "" },
            if senior { "light weights or bands" } else { "squats, push-ups" },
            if female && senior { "Add vitamin D for bones" } else { "" },
            if taller { "Taller folks" } else { "" },
        ));
    }
    if fat.grade == Grade::NeedsBoost {
        goals.push(format!(
            "- **Body Fat ({:.1}%) Needs Boost**: Your fat level is high, which can impact health. **Goal**: Reduce 1-2% fat/month with {}. Eat high-protein/fiber (veggies, lean meats; cut 500 kcal/day for 0.5 kg/week loss). {}. {} may need more workout volume.",
            result.fat_percent,
            if senior { "low-impact cardio like walking" } else { "150 min/week cardio (HIIT, jogging)" },
            if female && senior { "Add soy/omega-3s for women post-menopause" } else { "" },
            if taller { "Taller frames" } else { "" },
        ));
    }

    if goals.is_empty() {
        goals.push(ON_TRACK_GOAL.to_string());
    }
    goals
}

// ═══════════════════════════════════════════
// Aggregate
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyInsights {
    pub weight: Insight,
    pub bmi: Insight,
    pub fat: Insight,
    pub muscle: Insight,
    pub bmr: Grade,
    pub metabolic_age: AgeComparison,
    pub visceral_fat: Grade,
    pub water: Grade,
    pub ffmi: Grade,
    pub body_type: BodyType,
    pub body_type_label: &'static str,
    pub body_type_insight: String,
    pub weight_direction: ControlDirection,
    pub fat_direction: ControlDirection,
    pub muscle_direction: ControlDirection,
    pub goals: Vec<String>,
}

impl BodyInsights {
    pub fn from_result(result: &BodyCompositionResult, age: f64) -> Self {
        let m = result.measurements.sanitized();
        let sex = m.sex;
        let weight = classify_weight(m.weight_kg, sex, m.height_cm);
        let bmi = classify_bmi(result.bmi);
        let fat = classify_fat_percent(result.fat_percent, sex, age);
        let muscle = classify_muscle_percent(result.muscle_percent, sex, age);
        let goals = goals(result, &bmi, &muscle, &fat, age);
        let body_type = classify_body_type(result.bmi, result.fat_percent, result.muscle_percent, sex);

        Self {
            weight,
            bmi,
            fat,
            muscle,
            bmr: grade_bmr(result.bmr, sex),
            metabolic_age: compare_metabolic_age(result.metabolic_age, age),
            visceral_fat: grade_visceral_fat(result.visceral_fat_level),
            water: grade_water_percent(result.water_percent, sex),
            ffmi: grade_ffmi(result.ffmi, sex),
            body_type,
            body_type_label: body_type.label(),
            body_type_insight: body_type_insight(body_type, &m, age),
            weight_direction: control_direction(result.weight_control),
            fat_direction: control_direction(result.fat_control),
            muscle_direction: control_direction(result.muscle_control),
            goals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::body_composition::compute_body_composition;

    #[test]
    fn weight_bands() {
        assert_eq!(classify_weight(45.0, Sex::Male, 170.0).grade, Grade::Athletic);
        assert_eq!(classify_weight(45.0, Sex::Female, 170.0).grade, Grade::Standard);
        assert_eq!(classify_weight(95.0, Sex::Male, 150.0).grade, Grade::NeedsBoost);
        assert!(classify_weight(95.0, Sex::Male, 150.0)
            .message
            .starts_with("Your weight is higher for your shorter, which is okay!"));
        assert!(classify_weight(70.0, Sex::Male, 180.0)
            .message
            .starts_with("Your weight is nicely balanced for your taller."));
    }

    #[test]
    fn bmi_bands() {
        assert_eq!(classify_bmi(18.4).grade, Grade::NeedsBoost);
        assert_eq!(classify_bmi(18.5).grade, Grade::Standard);
        assert_eq!(classify_bmi(24.9).grade, Grade::Standard);
        assert!(classify_bmi(27.0).message.contains("slightly high"));
        assert!(classify_bmi(31.0).message.contains("above average"));
        // 24.95 sits between the two bands.
        assert!(classify_bmi(24.95).message.contains("above average"));
    }

    #[test]
    fn fat_bands_with_gap() {
        assert_eq!(classify_fat_percent(5.0, Sex::Male, 30.0).grade, Grade::Athletic);
        assert_eq!(classify_fat_percent(10.0, Sex::Male, 30.0).grade, Grade::Excellent);
        assert_eq!(classify_fat_percent(13.5, Sex::Male, 30.0).grade, Grade::NeedsBoost);
        assert_eq!(classify_fat_percent(18.0, Sex::Male, 30.0).grade, Grade::Standard);
        assert_eq!(classify_fat_percent(25.0, Sex::Female, 30.0).grade, Grade::Standard);
        assert_eq!(classify_fat_percent(35.0, Sex::Female, 30.0).grade, Grade::NeedsBoost);
    }

    #[test]
    fn senior_wording() {
        let young = classify_fat_percent(30.0, Sex::Male, 30.0);
        let senior = classify_fat_percent(30.0, Sex::Male, 60.0);
        assert_eq!(
            young.message,
            "Your body fat is a bit high. Try cardio like brisk walking and fiber-rich foods to shift toward lean muscle."
        );
        assert!(senior.message.contains("light strength training"));
        assert!(classify_muscle_percent(20.0, Sex::Female, 60.0)
            .message
            .contains("yoga or walking"));
    }

    #[test]
    fn muscle_and_band_grades() {
        assert_eq!(classify_muscle_percent(30.0, Sex::Male, 30.0).grade, Grade::NeedsBoost);
        assert_eq!(classify_muscle_percent(52.0, Sex::Male, 30.0).grade, Grade::Standard);
        assert_eq!(classify_muscle_percent(43.0, Sex::Female, 30.0).grade, Grade::Athletic);
        assert_eq!(grade_bmr(1617.5, Sex::Male), Grade::Standard);
        assert_eq!(grade_bmr(1100.0, Sex::Female), Grade::NeedsBoost);
        assert_eq!(grade_ffmi(26.0, Sex::Male), Grade::Athletic);
        assert_eq!(grade_water_percent(50.0, Sex::Male), Grade::Standard);
        assert_eq!(grade_water_percent(66.0, Sex::Male), Grade::NeedsBoost);
    }

    #[test]
    fn visceral_and_metabolic() {
        assert_eq!(grade_visceral_fat(9), Grade::Athletic);
        assert_eq!(grade_visceral_fat(12), Grade::Standard);
        assert_eq!(grade_visceral_fat(13), Grade::NeedsBoost);
        assert_eq!(compare_metabolic_age(20, 30.0), AgeComparison::Younger);
        assert_eq!(compare_metabolic_age(35, 30.0), AgeComparison::Standard);
        assert_eq!(compare_metabolic_age(40, 30.0), AgeComparison::Older);
    }

    #[test]
    fn body_types() {
        assert_eq!(classify_body_type(17.0, 25.0, 40.0, Sex::Male), BodyType::SlimLean);
        assert_eq!(classify_body_type(22.0, 12.0, 30.0, Sex::Male), BodyType::SlimLean);
        assert_eq!(
            classify_body_type(22.0, 15.0, 45.0, Sex::Male),
            BodyType::AthleticBalanced
        );
        assert_eq!(
            classify_body_type(28.0, 30.0, 43.0, Sex::Female),
            BodyType::AthleticBalanced
        );
        assert_eq!(classify_body_type(28.0, 30.0, 40.0, Sex::Male), BodyType::RoundedStrong);
    }

    #[test]
    fn body_type_narrative_follows_profile() {
        let m = BodyMeasurements::new(60.0, 180.0, Sex::Male, 25.0, 500.0);
        let lean = body_type_insight(BodyType::SlimLean, &m, 25.0);
        assert_eq!(
            lean,
            "Your lean build suggests a fast metabolism, common for taller individuals. Younger folks like you can build strength with calorie-dense foods (e.g., nuts, avocados) and strength training. Aim for 2,500+ kcal/day to support energy."
        );

        let f = BodyMeasurements::new(80.0, 155.0, Sex::Female, 60.0, 500.0);
        let rounded = body_type_insight(BodyType::RoundedStrong, &f, 60.0);
        assert!(rounded.contains("common for shorter frames. Older adults"));
        assert!(rounded.contains("Women post-menopause fiber-rich meals"));
    }

    #[test]
    fn senior_female_goals_add_supplements() {
        let result = compute_body_composition(90.0, 158.0, Sex::Female, 60.0, 450.0);
        let insights = BodyInsights::from_result(&result, 60.0);
        let fat_goal = insights
            .goals
            .iter()
            .find(|g| g.starts_with("- **Body Fat"))
            .expect("fat needs work");
        assert!(fat_goal.contains("low-impact cardio like walking"));
        assert!(fat_goal.contains("Add soy/omega-3s for women post-menopause"));
    }

    #[test]
    fn directions() {
        assert_eq!(control_direction(1.5), ControlDirection::Gain);
        assert_eq!(control_direction(-0.2), ControlDirection::Reduce);
        assert_eq!(control_direction(0.0), ControlDirection::Standard);
    }

    #[test]
    fn insights_for_reference_male() {
        let result = compute_body_composition(70.0, 170.0, Sex::Male, 30.0, 500.0);
        let insights = BodyInsights::from_result(&result, 30.0);
        assert_eq!(insights.weight.grade, Grade::Standard);
        assert_eq!(insights.bmi.grade, Grade::Standard);
        assert_eq!(insights.fat.grade, Grade::NeedsBoost);
        assert_eq!(insights.muscle.grade, Grade::Standard);
        assert_eq!(insights.bmr, Grade::Standard);
        assert_eq!(insights.weight_direction, ControlDirection::Reduce);
        assert_eq!(insights.goals.len(), 1);
        assert!(insights.goals[0].starts_with("- **Body Fat (32.6%) Needs Boost**: "));
        assert!(insights.goals[0].contains("150 min/week cardio (HIIT, jogging)"));
        assert!(insights
            .body_type_insight
            .starts_with("Your rounded, strong build carries more weight"));
    }

    #[test]
    fn on_track_goal_when_nothing_needs_work() {
        let result = compute_body_composition(65.0, 175.0, Sex::Male, 30.0, 0.0);
        let insights = BodyInsights::from_result(&result, 30.0);
        assert_eq!(insights.fat.grade, Grade::Standard);
        assert_eq!(insights.goals, vec![ON_TRACK_GOAL.to_string()]);
    }
}
