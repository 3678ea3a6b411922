//! Model Module - classifier loading, scaling and risk decision

pub mod checksum;
pub mod inference;
pub mod scaler;
pub mod threshold;

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

pub use inference::{Classifier, InferenceError, ModelCache, OnnxClassifier, DEFAULT_MODEL_PATH};
pub use scaler::{ScalerError, StandardScaler};
pub use threshold::{RiskLevel, RiskThreshold, RISK_THRESHOLD};

use crate::features::PatientInput;

/// Output of one button press
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub probability: f32,
    pub level: RiskLevel,
    pub threshold: f32,
    pub scaled: bool,
    pub inference_time_us: u64,
}

/// Input vector → optional scaling → one inference → threshold
pub struct Predictor {
    model: Arc<ModelCache>,
    scaler: Option<StandardScaler>,
    threshold: RiskThreshold,
}

impl Predictor {
    pub fn new(
        model: Arc<ModelCache>,
        scaler: Option<StandardScaler>,
        threshold: RiskThreshold,
    ) -> Self {
        if scaler.is_none() {
            tracing::warn!("No feature scaler configured: raw form values are fed to the model");
        }

        Self { model, scaler, threshold }
    }

    pub fn model(&self) -> &ModelCache {
        &self.model
    }

    pub fn threshold(&self) -> RiskThreshold {
        self.threshold
    }

    pub fn predict(&self, input: &PatientInput) -> Result<PredictionResult, InferenceError> {
        let start_time = Instant::now();
        let classifier = self.model.get()?;

        let raw = input.to_feature_vector();
        let features = match &self.scaler {
            Some(scaler) => scaler.transform(&raw),
            None => raw,
        };

        let probability = classifier.predict_proba(&features)?;
        let level = self.threshold.classify(probability);
        let inference_time_us = start_time.elapsed().as_micros() as u64;

        tracing::info!(
            probability,
            ?level,
            inference_time_us,
            "Prediction complete"
        );
        tracing::debug!(features = ?features.named_values(), "Model input");

        Ok(PredictionResult {
            probability,
            level,
            threshold: self.threshold.cutoff,
            scaled: self.scaler.is_some(),
            inference_time_us,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{FeatureVector, FEATURE_COUNT};
    use parking_lot::Mutex;

    /// Records the vector it was called with
    struct Recording {
        probability: f32,
        seen: Mutex<Option<FeatureVector>>,
    }

    impl Classifier for Recording {
        fn predict_proba(&self, features: &FeatureVector) -> Result<f32, InferenceError> {
            *self.seen.lock() = Some(features.clone());
            Ok(self.probability)
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn predictor(probability: f32, scaler: Option<StandardScaler>) -> (Predictor, Arc<Recording>) {
        let classifier = Arc::new(Recording { probability, seen: Mutex::new(None) });
        let cache = Arc::new(ModelCache::preloaded(classifier.clone()));
        (Predictor::new(cache, scaler, RiskThreshold::default()), classifier)
    }

    #[test]
    fn test_predict_high_risk() {
        let (p, _) = predictor(0.873, None);
        let result = p.predict(&PatientInput::default()).unwrap();

        assert_eq!(result.level, RiskLevel::High);
        assert_eq!(result.probability, 0.873);
        assert!(!result.scaled);
    }

    #[test]
    fn test_predict_boundary_is_low() {
        let (p, _) = predictor(0.5, None);
        assert_eq!(p.predict(&PatientInput::default()).unwrap().level, RiskLevel::Low);
    }

    #[test]
    fn test_raw_values_reach_model_unscaled() {
        let (p, classifier) = predictor(0.1, None);
        p.predict(&PatientInput::default()).unwrap();

        let seen = classifier.seen.lock().clone().unwrap();
        assert_eq!(seen, PatientInput::default().to_feature_vector());
    }

    #[test]
    fn test_scaler_applied_when_configured() {
        let scaler =
            StandardScaler::new(vec![0.0; FEATURE_COUNT], vec![2.0; FEATURE_COUNT]).unwrap();
        let (p, classifier) = predictor(0.1, Some(scaler));
        let result = p.predict(&PatientInput::default()).unwrap();

        assert!(result.scaled);
        let seen = classifier.seen.lock().clone().unwrap();
        assert_eq!(seen.get_by_name("age"), Some(22.5));
    }

    #[test]
    fn test_missing_model_fails_prediction() {
        let cache = Arc::new(ModelCache::new("/nonexistent/model.onnx", None));
        let p = Predictor::new(cache, None, RiskThreshold::default());

        let err = p.predict(&PatientInput::default()).unwrap_err();
        assert!(matches!(err, InferenceError::Load(_)));
        assert!(matches!(err.root(), InferenceError::NotFound(_)));
    }
}
