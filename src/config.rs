//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::i18n::Locale;
use crate::model::{DEFAULT_MODEL_PATH, RISK_THRESHOLD};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// ONNX model artifact
    pub model_path: PathBuf,

    /// Expected SHA-256 of the model (hex)
    pub model_sha256: Option<String>,

    /// Standard scaler exported from training (JSON)
    pub scaler_path: Option<PathBuf>,

    /// Probability above which the result is high risk
    pub risk_threshold: f32,

    /// UI language
    pub locale: Locale,

    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            model_sha256: None,
            scaler_path: None,
            risk_threshold: RISK_THRESHOLD,
            locale: Locale::Id,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: non_empty("HOST").unwrap_or(defaults.host),

            port: non_empty("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),

            model_path: non_empty("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),

            model_sha256: non_empty("MODEL_SHA256"),

            scaler_path: non_empty("SCALER_PATH").map(PathBuf::from),

            risk_threshold: non_empty("RISK_THRESHOLD")
                .and_then(|t| t.trim().parse::<f32>().ok())
                .filter(|t| (0.0..=1.0).contains(t))
                .unwrap_or(defaults.risk_threshold),

            locale: non_empty("UI_LANG")
                .and_then(|l| l.parse().ok())
                .unwrap_or(defaults.locale),

            log_format: match non_empty("LOG_FORMAT").as_deref().map(str::trim) {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_map(&[]);

        assert_eq!(config.port, 8501);
        assert_eq!(config.model_path, PathBuf::from("model_jantung_terbaik.onnx"));
        assert_eq!(config.risk_threshold, 0.5);
        assert_eq!(config.locale, Locale::Id);
        assert!(config.model_sha256.is_none());
        assert!(config.scaler_path.is_none());
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.bind_addr(), "0.0.0.0:8501");
    }

    #[test]
    fn test_overrides() {
        let config = from_map(&[
            ("PORT", "9000"),
            ("MODEL_PATH", "models/heart.onnx"),
            ("SCALER_PATH", "models/scaler.json"),
            ("RISK_THRESHOLD", "0.6"),
            ("UI_LANG", "en"),
            ("LOG_FORMAT", "json"),
        ]);

        assert_eq!(config.port, 9000);
        assert_eq!(config.model_path, PathBuf::from("models/heart.onnx"));
        assert_eq!(config.scaler_path, Some(PathBuf::from("models/scaler.json")));
        assert_eq!(config.risk_threshold, 0.6);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = from_map(&[
            ("PORT", "http"),
            ("RISK_THRESHOLD", "1.5"),
            ("UI_LANG", "klingon"),
            ("MODEL_SHA256", "  "),
        ]);

        assert_eq!(config.port, 8501);
        assert_eq!(config.risk_threshold, 0.5);
        assert_eq!(config.locale, Locale::Id);
        assert!(config.model_sha256.is_none());
    }
}
