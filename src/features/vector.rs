//! Feature Vector - Model input assembly
//!
//! `PatientInput` is what the form (or the JSON API) submits.
//! `FeatureVector` is the fixed-order numeric tuple the classifier sees.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, layout_hash};
use super::schema::FIELD_SPECS;

// ============================================================================
// PATIENT INPUT
// ============================================================================

/// One submission of the medical data form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PatientInput {
    #[validate(range(min = 1, max = 100))]
    pub age: i32,
    #[validate(range(min = 0, max = 1))]
    pub sex: i32,
    #[validate(range(min = 0, max = 3))]
    pub cp: i32,
    #[validate(range(min = 80, max = 200))]
    pub trestbps: i32,
    #[validate(range(min = 100, max = 600))]
    pub chol: i32,
    #[validate(range(min = 0, max = 1))]
    pub fbs: i32,
    #[validate(range(min = 0, max = 2))]
    pub restecg: i32,
    #[validate(range(min = 60, max = 220))]
    pub thalach: i32,
    #[validate(range(min = 0, max = 1))]
    pub exang: i32,
    #[validate(range(min = 0.0, max = 10.0))]
    pub oldpeak: f32,
    #[validate(range(min = 0, max = 2))]
    pub slope: i32,
    #[validate(range(min = 0, max = 4))]
    pub ca: i32,
    #[validate(range(min = 0, max = 3))]
    pub thal: i32,
}

impl Default for PatientInput {
    /// Widget defaults
    fn default() -> Self {
        Self {
            age: 45,
            sex: 1,
            cp: 1,
            trestbps: 120,
            chol: 200,
            fbs: 0,
            restecg: 0,
            thalach: 150,
            exang: 0,
            oldpeak: 1.0,
            slope: 1,
            ca: 0,
            thal: 2,
        }
    }
}

impl PatientInput {
    /// Clamp every field into its widget range
    pub fn clamped(&self) -> Self {
        let [age, sex, cp, trestbps, chol, fbs, restecg, thalach, exang, oldpeak, slope, ca, thal] =
            &FIELD_SPECS;

        Self {
            age: age.clamp_int(self.age),
            sex: sex.clamp_int(self.sex),
            cp: cp.clamp_int(self.cp),
            trestbps: trestbps.clamp_int(self.trestbps),
            chol: chol.clamp_int(self.chol),
            fbs: fbs.clamp_int(self.fbs),
            restecg: restecg.clamp_int(self.restecg),
            thalach: thalach.clamp_int(self.thalach),
            exang: exang.clamp_int(self.exang),
            oldpeak: oldpeak.clamp(self.oldpeak),
            slope: slope.clamp_int(self.slope),
            ca: ca.clamp_int(self.ca),
            thal: thal.clamp_int(self.thal),
        }
    }

    /// Values in FEATURE_LAYOUT order
    pub fn to_feature_vector(&self) -> FeatureVector {
        FeatureVector::from_values([
            self.age as f32,
            self.sex as f32,
            self.cp as f32,
            self.trestbps as f32,
            self.chol as f32,
            self.fbs as f32,
            self.restecg as f32,
            self.thalach as f32,
            self.exang as f32,
            self.oldpeak,
            self.slope as f32,
            self.ca as f32,
            self.thal as f32,
        ])
    }

    /// Value of a field as the form shows it
    pub fn field_value(&self, name: &str) -> Option<f32> {
        self.to_feature_vector().get_by_name(name)
    }
}

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Versioned feature vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub version: u8,
    pub layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// (name, value) pairs for logging
    pub fn named_values(&self) -> Vec<(&'static str, f32)> {
        FEATURE_LAYOUT.iter().copied().zip(self.values).collect()
    }
}
