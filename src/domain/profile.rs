//! Patient profile types for risk prediction.
//!
//! One immutable snapshot of the user-entered health attributes for a
//! single assessment session. Field bounds mirror the input widgets of the
//! assessment form.

use serde::{Deserialize, Serialize};

/// Self-reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Weekly exercise frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseFrequency {
    Never,
    /// 1-2 times per week
    OneToTwo,
    /// 3-4 times per week
    ThreeToFour,
    Daily,
}

/// Smoking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
}

/// Alcohol consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlcoholUse {
    Never,
    Occasional,
    Moderate,
    Heavy,
}

/// Conditions selectable under family history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamilyCondition {
    HeartDisease,
    Diabetes,
    Hypertension,
    Stroke,
}

/// Conditions selectable as currently diagnosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentCondition {
    HighBloodPressure,
    HighCholesterol,
    Diabetes,
    HeartDisease,
}

/// Immutable snapshot of one assessment session's inputs.
///
/// BMI is always derived from height and weight via [`PatientProfile::bmi`],
/// never entered directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,

    /// Age in years (18-100)
    pub age: u32,

    pub gender: Gender,

    /// Height in cm (140-220)
    pub height_cm: u32,

    /// Weight in kg (40-200)
    pub weight_kg: u32,

    /// Systolic blood pressure in mmHg (90-200)
    pub systolic_bp: u32,

    /// Diastolic blood pressure in mmHg (60-120)
    pub diastolic_bp: u32,

    /// Resting heart rate in bpm (50-120)
    pub heart_rate: u32,

    /// Blood glucose in mg/dL (70-300)
    pub glucose: u32,

    /// Total cholesterol in mg/dL (100-400)
    pub cholesterol: u32,

    /// Conditions present in the family history (set semantics)
    pub family_history: Vec<FamilyCondition>,

    /// Currently diagnosed conditions (set semantics)
    pub current_conditions: Vec<CurrentCondition>,

    /// Free-text medication list; not used by scoring
    pub medications: String,

    pub exercise_freq: ExerciseFrequency,
    pub smoking: SmokingStatus,
    pub alcohol: AlcoholUse,

    /// Hours of sleep per night (4-12)
    pub sleep_hours: u32,

    /// Self-rated stress level (1-10)
    pub stress_level: u32,
}

impl Default for PatientProfile {
    /// The assessment form's default widget values.
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 45,
            gender: Gender::Male,
            height_cm: 170,
            weight_kg: 70,
            systolic_bp: 120,
            diastolic_bp: 80,
            heart_rate: 72,
            glucose: 100,
            cholesterol: 200,
            family_history: Vec::new(),
            current_conditions: Vec::new(),
            medications: String::new(),
            exercise_freq: ExerciseFrequency::Never,
            smoking: SmokingStatus::Never,
            alcohol: AlcoholUse::Never,
            sleep_hours: 8,
            stress_level: 5,
        }
    }
}

impl PatientProfile {
    /// Body mass index derived from height and weight.
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = f64::from(self.height_cm) / 100.0;
        f64::from(self.weight_kg) / (height_m * height_m)
    }

    /// Whether the family history contains `condition`.
    #[must_use]
    pub fn has_family_history(&self, condition: FamilyCondition) -> bool {
        self.family_history.contains(&condition)
    }

    /// Whether `condition` is currently diagnosed.
    #[must_use]
    pub fn has_condition(&self, condition: CurrentCondition) -> bool {
        self.current_conditions.contains(&condition)
    }

    /// Validate that all bounded fields are within their documented ranges
    /// and that a name was entered.
    ///
    /// # Errors
    /// Returns every violation as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Name must not be empty".to_string());
        }
        if !(18..=100).contains(&self.age) {
            errors.push(format!("Age {} out of range [18, 100]", self.age));
        }
        if !(140..=220).contains(&self.height_cm) {
            errors.push(format!("Height {} out of range [140, 220]", self.height_cm));
        }
        if !(40..=200).contains(&self.weight_kg) {
            errors.push(format!("Weight {} out of range [40, 200]", self.weight_kg));
        }
        if !(90..=200).contains(&self.systolic_bp) {
            errors.push(format!(
                "Systolic BP {} out of range [90, 200]",
                self.systolic_bp
            ));
        }
        if !(60..=120).contains(&self.diastolic_bp) {
            errors.push(format!(
                "Diastolic BP {} out of range [60, 120]",
                self.diastolic_bp
            ));
        }
        if !(50..=120).contains(&self.heart_rate) {
            errors.push(format!(
                "Heart rate {} out of range [50, 120]",
                self.heart_rate
            ));
        }
        if !(70..=300).contains(&self.glucose) {
            errors.push(format!("Glucose {} out of range [70, 300]", self.glucose));
        }
        if !(100..=400).contains(&self.cholesterol) {
            errors.push(format!(
                "Cholesterol {} out of range [100, 400]",
                self.cholesterol
            ));
        }
        if !(4..=12).contains(&self.sleep_hours) {
            errors.push(format!(
                "Sleep hours {} out of range [4, 12]",
                self.sleep_hours
            ));
        }
        if !(1..=10).contains(&self.stress_level) {
            errors.push(format!(
                "Stress level {} out of range [1, 10]",
                self.stress_level
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
