//! UI text in Indonesian (default) and English

use std::str::FromStr;

use serde::Serialize;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Id,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "id-id" | "indonesian" => Ok(Locale::Id),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

impl Locale {
    pub fn html_lang(&self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Id => &MESSAGES_ID,
            Locale::En => &MESSAGES_EN,
        }
    }
}

/// A text in both languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    pub id: &'static str,
    pub en: &'static str,
}

impl Label {
    pub const fn new(id: &'static str, en: &'static str) -> Self {
        Self { id, en }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Id => self.id,
            Locale::En => self.en,
        }
    }
}

/// Static page text for one locale
#[derive(Debug)]
pub struct Messages {
    pub page_title: &'static str,
    pub page_icon: &'static str,
    pub heading: &'static str,
    pub intro: &'static str,
    pub model_missing: &'static str,
    pub prediction_failed: &'static str,
    pub sidebar_header: &'static str,
    pub analyze_button: &'static str,
    pub result_header: &'static str,
    pub high_risk: &'static str,
    pub low_risk: &'static str,
    pub probability: &'static str,
    pub high_risk_advice: &'static str,
    pub low_risk_advice: &'static str,
    pub disclaimer: &'static str,
}

pub static MESSAGES_ID: Messages = Messages {
    page_title: "Heart Disease Detector",
    page_icon: "❤️",
    heading: "Sistem Deteksi Risiko Penyakit Jantung 🫀",
    intro: "Aplikasi ini untuk memprediksi risiko penyakit jantung berdasarkan data medis pasien.",
    model_missing: "Model '.onnx' tidak ditemukan. Pastikan sudah mengupload file model ke GitHub.",
    prediction_failed: "Prediksi gagal dijalankan. Periksa kembali file model.",
    sidebar_header: "Input Data Medis",
    analyze_button: "Analisis Risiko",
    result_header: "Hasil Analisis:",
    high_risk: "TERDETEKSI RISIKO TINGGI",
    low_risk: "RISIKO RENDAH",
    probability: "Probabilitas",
    high_risk_advice: "Segera konsultasikan hasil ini dengan tenaga medis profesional.",
    low_risk_advice: "Tetap jaga pola makan dan rutin berolahraga.",
    disclaimer: "Catatan: Aplikasi ini hanya untuk tujuan edukasi (Tugas UAS).",
};

pub static MESSAGES_EN: Messages = Messages {
    page_title: "Heart Disease Detector",
    page_icon: "❤️",
    heading: "Heart Disease Risk Detection System 🫀",
    intro: "This application predicts heart disease risk from a patient's medical data.",
    model_missing: "Model '.onnx' not found. Make sure the model file has been uploaded.",
    prediction_failed: "Prediction could not be run. Check the model file.",
    sidebar_header: "Medical Data Input",
    analyze_button: "Analyze Risk",
    result_header: "Analysis Result:",
    high_risk: "HIGH RISK DETECTED",
    low_risk: "LOW RISK",
    probability: "Probability",
    high_risk_advice: "Consult these results with a medical professional promptly.",
    low_risk_advice: "Keep a healthy diet and exercise regularly.",
    disclaimer: "Note: This application is for educational purposes only (final exam assignment).",
};
