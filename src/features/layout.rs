//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the model input schema**
//!
//! The order below is the column order of `heart.csv` the classifier was
//! trained on. Reordering, adding or removing a feature requires a new
//! model export and a FEATURE_VERSION bump.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    "age",       // 0: Age in years
    "sex",       // 1: 1 = male, 0 = female
    "cp",        // 2: Chest pain type
    "trestbps",  // 3: Resting blood pressure
    "chol",      // 4: Serum cholesterol
    "fbs",       // 5: Fasting blood sugar > 120 mg/dl
    "restecg",   // 6: Resting ECG result
    "thalach",   // 7: Max heart rate achieved
    "exang",     // 8: Exercise induced angina
    "oldpeak",   // 9: ST depression
    "slope",     // 10: Slope of peak exercise ST segment
    "ca",        // 11: Number of major vessels
    "thal",      // 12: Thalassemia code
];

/// Total number of features
/// Must match FEATURE_LAYOUT.len()
pub const FEATURE_COUNT: usize = 13;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over version + ordered names
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout information for the schema endpoint and logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
    /// Tensor shape the model is fed with
    pub input_shape: [usize; 3],
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            input_shape: [1, FEATURE_COUNT, 1],
        }
    }
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}
