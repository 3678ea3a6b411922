//! Result banner text

use serde::Serialize;

use crate::i18n::Locale;
use crate::model::{PredictionResult, RiskLevel};

/// Probability as a percentage with two decimals: 0.873 → "87.30%"
pub fn format_percent(probability: f32) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// What the result section displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub probability: f32,
    pub risk_level: RiskLevel,
    pub percent: String,
    pub headline: String,
    pub advice: &'static str,
    pub disclaimer: &'static str,
}

impl RiskAssessment {
    pub fn new(result: &PredictionResult, locale: Locale) -> Self {
        let messages = locale.messages();
        let percent = format_percent(result.probability);

        let (icon, label, advice) = match result.level {
            RiskLevel::High => ("⚠️", messages.high_risk, messages.high_risk_advice),
            RiskLevel::Low => ("✅", messages.low_risk, messages.low_risk_advice),
        };

        Self {
            probability: result.probability,
            risk_level: result.level,
            headline: format!("{} {} ({}: {})", icon, label, messages.probability, percent),
            percent,
            advice,
            disclaimer: messages.disclaimer,
        }
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_level == RiskLevel::High
    }
}
