//! Feature mapping: profile to fixed-order numeric vectors.
//!
//! Each condition's classifier was trained on a fixed schema. Several
//! entries are placeholder constants standing in for clinical data the
//! profile does not collect; they must match the values the training
//! pipeline used, so they are reproduced literally here.

use crate::domain::{
    AlcoholUse, Condition, CurrentCondition, ExerciseFrequency, FamilyCondition, Gender,
    PatientProfile, SmokingStatus,
};
use crate::{Result, VitalsenseError};

/// Map a profile to the feature vector for one condition.
///
/// Pure and deterministic: the same profile always yields a bit-identical
/// vector, and the result length always equals
/// `condition.feature_arity()`.
///
/// # Errors
/// Returns `VitalsenseError::FeatureMapping` if the profile produces a
/// non-finite feature value.
pub fn map_features(profile: &PatientProfile, condition: Condition) -> Result<Vec<f64>> {
    let features = match condition {
        Condition::HeartDisease => heart_disease_features(profile),
        Condition::Diabetes => diabetes_features(profile),
        Condition::Hypertension => hypertension_features(profile),
    };
    debug_assert_eq!(features.len(), condition.feature_arity());

    if let Some(bad) = features.iter().find(|v| !v.is_finite()) {
        return Err(VitalsenseError::FeatureMapping {
            condition,
            reason: format!("non-finite feature value {bad}"),
        });
    }
    Ok(features)
}

/// UCI heart-disease schema, 14 features.
fn heart_disease_features(p: &PatientProfile) -> Vec<f64> {
    vec![
        f64::from(p.age),
        flag(p.gender == Gender::Male),
        1.0, // chest pain type (not collected)
        f64::from(p.systolic_bp),
        f64::from(p.cholesterol),
        flag(p.glucose > 120),
        0.0, // resting ECG
        f64::from(p.heart_rate),
        0.0, // exercise induced angina
        0.0, // oldpeak
        1.0, // ST slope
        0.0, // major vessels (ca)
        2.0, // thalassemia
        age_bucket(p.age),
    ]
}

/// Pima-style diabetes schema, 10 features.
fn diabetes_features(p: &PatientProfile) -> Vec<f64> {
    vec![
        pregnancies_proxy(p),
        f64::from(p.glucose),
        f64::from(p.diastolic_bp),
        20.0, // skin thickness (not collected)
        85.0, // insulin (not collected)
        p.bmi(),
        0.5, // diabetes pedigree function
        f64::from(p.age),
        bmi_bucket(p.bmi()),
        glucose_bucket(p.glucose),
    ]
}

/// Lifestyle-based hypertension schema, 13 features.
fn hypertension_features(p: &PatientProfile) -> Vec<f64> {
    vec![
        f64::from(p.age),
        flag(p.gender == Gender::Male),
        flag(p.smoking == SmokingStatus::Current),
        flag(matches!(p.alcohol, AlcoholUse::Moderate | AlcoholUse::Heavy)),
        exercise_score(p.exercise_freq),
        flag(p.has_family_history(FamilyCondition::Hypertension)),
        flag(p.has_condition(CurrentCondition::Diabetes)),
        flag(p.bmi() > 30.0),
        stress_bucket(p.stress_level),
        2.0, // salt intake (not collected, assume high)
        f64::from(p.sleep_hours),
        8.0, // work hours (not collected)
        age_risk_bucket(p.age),
    ]
}

fn flag(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// Age proxy for pregnancy count: one step per five years past 20,
/// capped at 5. Males score 0.
fn pregnancies_proxy(p: &PatientProfile) -> f64 {
    if p.gender == Gender::Male {
        0.0
    } else {
        let steps = (i64::from(p.age) - 20) / 5;
        steps.clamp(0, 5) as f64
    }
}

fn age_bucket(age: u32) -> f64 {
    if age < 40 {
        0.0
    } else if age < 55 {
        1.0
    } else if age < 70 {
        2.0
    } else {
        3.0
    }
}

fn bmi_bucket(bmi: f64) -> f64 {
    if bmi < 18.5 {
        0.0
    } else if bmi < 25.0 {
        1.0
    } else if bmi < 30.0 {
        2.0
    } else {
        3.0
    }
}

fn glucose_bucket(glucose: u32) -> f64 {
    if glucose < 100 {
        0.0
    } else if glucose < 126 {
        1.0
    } else {
        2.0
    }
}

fn exercise_score(freq: ExerciseFrequency) -> f64 {
    match freq {
        ExerciseFrequency::Daily => 2.0,
        ExerciseFrequency::ThreeToFour => 1.0,
        ExerciseFrequency::Never | ExerciseFrequency::OneToTwo => 0.0,
    }
}

fn stress_bucket(level: u32) -> f64 {
    if level > 7 {
        2.0
    } else if level > 4 {
        1.0
    } else {
        0.0
    }
}

fn age_risk_bucket(age: u32) -> f64 {
    if age < 35 {
        0.0
    } else if age < 50 {
        1.0
    } else if age < 65 {
        2.0
    } else {
        3.0
    }
}
