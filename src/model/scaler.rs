//! Standard scaler exported from training
//!
//! The page feeds raw form values by default. When a scaler file is
//! configured each value becomes `(x - mean) / scale`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::features::{FeatureVector, FEATURE_COUNT};

#[derive(Debug, thiserror::Error)]
pub enum ScalerError {
    #[error("cannot read scaler file {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid scaler file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("scaler expects {expected} features, file has mean={mean} scale={scale}")]
    Shape { expected: usize, mean: usize, scale: usize },

    #[error("scale for feature {0} is zero")]
    ZeroScale(usize),
}

/// `{"mean": [..13], "scale": [..13]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Result<Self, ScalerError> {
        if mean.len() != FEATURE_COUNT || scale.len() != FEATURE_COUNT {
            return Err(ScalerError::Shape {
                expected: FEATURE_COUNT,
                mean: mean.len(),
                scale: scale.len(),
            });
        }

        if let Some(i) = scale.iter().position(|s| *s == 0.0) {
            return Err(ScalerError::ZeroScale(i));
        }

        Ok(Self { mean, scale })
    }

    pub fn from_json(json: &str) -> Result<Self, ScalerError> {
        let raw: StandardScaler = serde_json::from_str(json)?;
        Self::new(raw.mean, raw.scale)
    }

    pub fn load(path: &Path) -> Result<Self, ScalerError> {
        let json = fs::read_to_string(path).map_err(|e| ScalerError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_json(&json)
    }

    pub fn transform(&self, vector: &FeatureVector) -> FeatureVector {
        let mut values = vector.values;

        for (i, v) in values.iter_mut().enumerate() {
            *v = (*v - self.mean[i]) / self.scale[i];
        }

        FeatureVector::from_values(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::PatientInput;

    #[test]
    fn test_transform() {
        let mut mean = vec![0.0; FEATURE_COUNT];
        let mut scale = vec![1.0; FEATURE_COUNT];
        mean[0] = 45.0;
        scale[0] = 5.0;
        mean[4] = 100.0;
        scale[4] = 50.0;

        let scaler = StandardScaler::new(mean, scale).unwrap();
        let input = PatientInput { age: 55, chol: 200, ..Default::default() };
        let out = scaler.transform(&input.to_feature_vector());

        assert_eq!(out.get_by_name("age"), Some(2.0));
        assert_eq!(out.get_by_name("chol"), Some(2.0));
        assert_eq!(out.get_by_name("thalach"), Some(150.0));
    }

    #[test]
    fn test_wrong_shape() {
        let err = StandardScaler::new(vec![0.0; 3], vec![1.0; 3]).unwrap_err();
        assert!(matches!(err, ScalerError::Shape { expected: 13, .. }));
    }

    #[test]
    fn test_zero_scale() {
        let mut scale = vec![1.0; FEATURE_COUNT];
        scale[9] = 0.0;
        let err = StandardScaler::new(vec![0.0; FEATURE_COUNT], scale).unwrap_err();
        assert!(matches!(err, ScalerError::ZeroScale(9)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        let scaler =
            StandardScaler::new(vec![1.0; FEATURE_COUNT], vec![2.0; FEATURE_COUNT]).unwrap();
        fs::write(&path, serde_json::to_string(&scaler).unwrap()).unwrap();

        assert_eq!(StandardScaler::load(&path).unwrap(), scaler);
    }

    #[test]
    fn test_load_invalid_json() {
        assert!(matches!(StandardScaler::from_json("{not json"), Err(ScalerError::Parse(_))));
    }
}
