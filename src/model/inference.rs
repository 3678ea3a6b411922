//! Inference Engine - ONNX Runtime Integration
//!
//! Loads the exported heart disease classifier once and runs a single
//! forward pass per request. Input shape is `(1, 13, 1)` (samples,
//! features, channels) as the 1D-CNN was trained; output is one sigmoid
//! probability.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ndarray::Array3;
use once_cell::sync::OnceCell;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Value;
use parking_lot::Mutex;

use crate::features::{FeatureVector, FEATURE_COUNT};
use super::checksum::verify_checksum;

/// Fixed artifact name, relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "model_jantung_terbaik.onnx";

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum InferenceError {
    #[error("model not found: {0}")]
    NotFound(String),

    #[error("model checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("io error: {0}")]
    Io(String),

    #[error("failed to build session: {0}")]
    Session(String),

    #[error("tensor error: {0}")]
    Tensor(String),

    #[error("inference failed: {0}")]
    Run(String),

    #[error("unexpected model output: {0}")]
    Output(String),

    /// Any failure while loading the artifact, as cached by `ModelCache`
    #[error("model load failed: {0}")]
    Load(Box<InferenceError>),
}

impl InferenceError {
    /// The underlying error of a load failure
    pub fn root(&self) -> &InferenceError {
        match self {
            InferenceError::Load(inner) => inner.root(),
            other => other,
        }
    }
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Binary classifier over one feature vector
pub trait Classifier: Send + Sync {
    /// Probability of the positive (heart disease) class
    fn predict_proba(&self, features: &FeatureVector) -> Result<f32, InferenceError>;

    /// Human readable source, for logs and health output
    fn name(&self) -> &str;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

pub struct OnnxClassifier {
    session: Mutex<Session>,
    output_name: String,
    model_path: String,
}

impl std::fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxClassifier")
            .field("model_path", &self.model_path)
            .field("output_name", &self.output_name)
            .finish()
    }
}

impl OnnxClassifier {
    /// Load ONNX model from file
    pub fn load(model_path: &Path) -> Result<Self, InferenceError> {
        tracing::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(InferenceError::NotFound(model_path.display().to_string()));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError::Session(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::Session(format!("optimization level: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::Session(format!("load model: {}", e)))?;

        let output_name = session.outputs.first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::Session("model declares no output".to_string()))?;

        tracing::info!("ONNX model loaded (output: {})", output_name);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            model_path: model_path.display().to_string(),
        })
    }
}

/// Reshape a feature vector to `(1, FEATURE_COUNT, 1)`
pub fn to_input_array(features: &FeatureVector) -> Result<Array3<f32>, InferenceError> {
    Array3::<f32>::from_shape_vec((1, FEATURE_COUNT, 1), features.as_array().to_vec())
        .map_err(|e| InferenceError::Tensor(e.to_string()))
}

impl Classifier for OnnxClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f32, InferenceError> {
        let input_tensor = Value::from_array(to_input_array(features)?)
            .map_err(|e| InferenceError::Tensor(e.to_string()))?;

        let mut session = self.session.lock();

        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Run(e.to_string()))?;

        let output = outputs.get(&self.output_name)
            .ok_or_else(|| {
                InferenceError::Output(format!("missing output {}", self.output_name))
            })?;

        let (_, data) = output.try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Output(e.to_string()))?;

        let probability = data.first()
            .copied()
            .ok_or_else(|| InferenceError::Output("empty output tensor".to_string()))?;

        Ok(probability)
    }

    fn name(&self) -> &str {
        &self.model_path
    }
}

// ============================================================================
// MODEL CACHE
// ============================================================================

/// Loads the classifier once for the process lifetime.
///
/// A failed load is remembered as well: there is no retry and no
/// invalidation.
pub struct ModelCache {
    path: PathBuf,
    checksum: Option<String>,
    slot: OnceCell<Result<Arc<dyn Classifier>, InferenceError>>,
}

impl ModelCache {
    pub fn new(path: impl Into<PathBuf>, checksum: Option<String>) -> Self {
        Self {
            path: path.into(),
            checksum,
            slot: OnceCell::new(),
        }
    }

    /// Cache that already holds a classifier
    pub fn preloaded(classifier: Arc<dyn Classifier>) -> Self {
        let slot = OnceCell::new();
        let name = PathBuf::from(classifier.name());
        let _ = slot.set(Ok(classifier));

        Self { path: name, checksum: None, slot }
    }

    /// Cache that remembers a failed load
    #[cfg(test)]
    pub(crate) fn failed(path: impl Into<PathBuf>, err: InferenceError) -> Self {
        let slot = OnceCell::new();
        let _ = slot.set(Err(InferenceError::Load(Box::new(err))));

        Self { path: path.into(), checksum: None, slot }
    }

    /// Get the classifier, loading it on first call.
    ///
    /// Every load failure comes back as `InferenceError::Load`.
    pub fn get(&self) -> Result<Arc<dyn Classifier>, InferenceError> {
        self.slot.get_or_init(|| self.load()).clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.get().is_ok()
    }

    fn load(&self) -> Result<Arc<dyn Classifier>, InferenceError> {
        let result = self.verify().and_then(|_| OnnxClassifier::load(&self.path));

        match result {
            Ok(classifier) => Ok(Arc::new(classifier) as Arc<dyn Classifier>),
            Err(e) => {
                tracing::error!("Model load failed: {}", e);
                Err(InferenceError::Load(Box::new(e)))
            }
        }
    }

    fn verify(&self) -> Result<(), InferenceError> {
        let Some(expected) = self.checksum.as_deref() else {
            return Ok(());
        };

        if !self.path.exists() {
            return Err(InferenceError::NotFound(self.path.display().to_string()));
        }

        verify_checksum(&self.path, expected)?;
        tracing::info!("Model checksum verified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::PatientInput;

    struct Fixed(f32);

    impl Classifier for Fixed {
        fn predict_proba(&self, _: &FeatureVector) -> Result<f32, InferenceError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_input_shape() {
        let features = PatientInput::default().to_feature_vector();
        let array = to_input_array(&features).unwrap();

        assert_eq!(array.shape(), &[1, 13, 1]);
        assert_eq!(array[[0, 0, 0]], 45.0);
        assert_eq!(array[[0, 9, 0]], 1.0);
        assert_eq!(array[[0, 12, 0]], 2.0);
    }

    #[test]
    fn test_missing_model_is_not_found() {
        let cache = ModelCache::new("/nonexistent/model_jantung_terbaik.onnx", None);

        let err = cache.get().err().unwrap();
        assert!(matches!(err, InferenceError::Load(_)));
        assert!(matches!(err.root(), InferenceError::NotFound(_)));
        assert!(!cache.is_loaded());
    }

    #[test]
    fn test_missing_model_with_checksum_is_not_found() {
        let cache = ModelCache::new("/nonexistent/model.onnx", Some("00".to_string()));
        let err = cache.get().err().unwrap();
        assert!(matches!(err.root(), InferenceError::NotFound(_)));
    }

    #[test]
    fn test_checksum_mismatch_blocks_load() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"not a model").unwrap();

        let cache = ModelCache::new(file.path(), Some("deadbeef".to_string()));
        let err = cache.get().err().unwrap();
        assert!(matches!(err.root(), InferenceError::ChecksumMismatch { .. }));
    }

    #[test]
    fn test_preloaded_cache() {
        let cache = ModelCache::preloaded(Arc::new(Fixed(0.25)));
        let classifier = cache.get().unwrap();

        assert!(cache.is_loaded());
        assert_eq!(classifier.name(), "fixed");
        let p = classifier.predict_proba(&PatientInput::default().to_feature_vector()).unwrap();
        assert_eq!(p, 0.25);
    }

    #[test]
    fn test_failed_cache_wraps_output_error_as_load() {
        let cache = ModelCache::failed(
            "model.onnx",
            InferenceError::Output("no output".to_string()),
        );

        let err = cache.get().err().unwrap();
        assert!(matches!(err, InferenceError::Load(_)));
        assert!(matches!(err.root(), InferenceError::Output(_)));
        assert!(!cache.is_loaded());
    }

    #[test]
    fn test_default_model_path() {
        assert_eq!(DEFAULT_MODEL_PATH, "model_jantung_terbaik.onnx");
    }
}
