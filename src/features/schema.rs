//! Input widget schema
//!
//! One `FieldSpec` per feature, in layout order. Ranges, defaults and step
//! sizes are the form's contract: the page renders them as HTML attributes
//! and the server clamps submitted values to them.

use serde::Serialize;

use crate::i18n::{Label, Locale};
use super::layout::FEATURE_COUNT;

// ============================================================================
// TYPES
// ============================================================================

/// Option of a select widget
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SelectOption {
    pub value: i32,
    /// Display text; `None` shows the raw value
    pub label: Option<Label>,
}

/// Widget kind
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Number,
    Slider,
    Select { options: &'static [SelectOption] },
}

/// Declared widget for one feature
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: Label,
    pub widget: Widget,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub step: f32,
}

impl FieldSpec {
    /// Clamp a value the way the widget would.
    ///
    /// Select widgets snap to the nearest option, fractional fields snap to
    /// their step. NaN falls back to the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }

        match self.widget {
            Widget::Select { options } => options
                .iter()
                .map(|o| o.value as f32)
                .min_by(|a, b| (a - value).abs().total_cmp(&(b - value).abs()))
                .unwrap_or(self.default),
            Widget::Number | Widget::Slider if self.is_fractional() => {
                let scale = (1.0 / self.step).round();
                ((value * scale).round() / scale).clamp(self.min, self.max)
            }
            Widget::Number | Widget::Slider => value.clamp(self.min, self.max),
        }
    }

    /// Clamp an integer field
    pub fn clamp_int(&self, value: i32) -> i32 {
        self.clamp(value as f32).round() as i32
    }

    /// Label text in the given locale
    pub fn label_text(&self, locale: Locale) -> &'static str {
        self.label.get(locale)
    }

    /// Whether the field carries fractional values
    pub fn is_fractional(&self) -> bool {
        self.step.fract() != 0.0
    }
}

// ============================================================================
// SELECT OPTIONS
// ============================================================================

const SEX_OPTIONS: &[SelectOption] = &[
    SelectOption { value: 1, label: Some(Label::new("Laki-laki", "Male")) },
    SelectOption { value: 0, label: Some(Label::new("Perempuan", "Female")) },
];

const BINARY_OPTIONS: &[SelectOption] = &[
    SelectOption { value: 0, label: None },
    SelectOption { value: 1, label: None },
];

// ============================================================================
// FIELD SPECS
// ============================================================================

const fn number(name: &'static str, label: Label, min: f32, max: f32, default: f32) -> FieldSpec {
    FieldSpec { name, label, widget: Widget::Number, min, max, default, step: 1.0 }
}

const fn slider(name: &'static str, label: Label, min: f32, max: f32, default: f32) -> FieldSpec {
    FieldSpec { name, label, widget: Widget::Slider, min, max, default, step: 1.0 }
}

/// Select widgets default to their first option
const fn select(
    name: &'static str,
    label: Label,
    options: &'static [SelectOption],
    default: f32,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        widget: Widget::Select { options },
        min: 0.0,
        max: 1.0,
        default,
        step: 1.0,
    }
}

/// Widget specs in FEATURE_LAYOUT order
pub static FIELD_SPECS: [FieldSpec; FEATURE_COUNT] = [
    number("age", Label::new("Usia (age)", "Age (age)"), 1.0, 100.0, 45.0),
    select("sex", Label::new("Jenis Kelamin (sex)", "Sex (sex)"), SEX_OPTIONS, 1.0),
    slider("cp", Label::new("Tipe Nyeri Dada (cp)", "Chest Pain Type (cp)"), 0.0, 3.0, 1.0),
    number(
        "trestbps",
        Label::new("Tekanan Darah (trestbps)", "Resting Blood Pressure (trestbps)"),
        80.0,
        200.0,
        120.0,
    ),
    number("chol", Label::new("Kolesterol (chol)", "Cholesterol (chol)"), 100.0, 600.0, 200.0),
    select(
        "fbs",
        Label::new("Gula Darah > 120 mg/dl (fbs)", "Fasting Blood Sugar > 120 mg/dl (fbs)"),
        BINARY_OPTIONS,
        0.0,
    ),
    slider(
        "restecg",
        Label::new("Hasil EKG Istirahat (restecg)", "Resting ECG (restecg)"),
        0.0,
        2.0,
        0.0,
    ),
    number(
        "thalach",
        Label::new("Detak Jantung Maks (thalach)", "Max Heart Rate (thalach)"),
        60.0,
        220.0,
        150.0,
    ),
    select(
        "exang",
        Label::new("Angina Akibat Olahraga (exang)", "Exercise Induced Angina (exang)"),
        BINARY_OPTIONS,
        0.0,
    ),
    FieldSpec {
        name: "oldpeak",
        label: Label::new("ST Depression (oldpeak)", "ST Depression (oldpeak)"),
        widget: Widget::Number,
        min: 0.0,
        max: 10.0,
        default: 1.0,
        step: 0.1,
    },
    slider(
        "slope",
        Label::new("Slope Segmen ST (slope)", "ST Segment Slope (slope)"),
        0.0,
        2.0,
        1.0,
    ),
    slider(
        "ca",
        Label::new("Jumlah Pembuluh Darah Utama (ca)", "Major Vessels (ca)"),
        0.0,
        4.0,
        0.0,
    ),
    slider("thal", Label::new("Thalassemia (thal)", "Thalassemia (thal)"), 0.0, 3.0, 2.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::layout::FEATURE_LAYOUT;

    fn field_spec(name: &str) -> Option<&'static FieldSpec> {
        FIELD_SPECS.iter().find(|f| f.name == name)
    }

    #[test]
    fn test_specs_follow_layout_order() {
        let names: Vec<_> = FIELD_SPECS.iter().map(|f| f.name).collect();
        assert_eq!(names, FEATURE_LAYOUT);
    }

    #[test]
    fn test_declared_ranges_and_defaults() {
        let expect = [
            ("age", 1.0, 100.0, 45.0),
            ("sex", 0.0, 1.0, 1.0),
            ("cp", 0.0, 3.0, 1.0),
            ("trestbps", 80.0, 200.0, 120.0),
            ("chol", 100.0, 600.0, 200.0),
            ("fbs", 0.0, 1.0, 0.0),
            ("restecg", 0.0, 2.0, 0.0),
            ("thalach", 60.0, 220.0, 150.0),
            ("exang", 0.0, 1.0, 0.0),
            ("oldpeak", 0.0, 10.0, 1.0),
            ("slope", 0.0, 2.0, 1.0),
            ("ca", 0.0, 4.0, 0.0),
            ("thal", 0.0, 3.0, 2.0),
        ];

        for (name, min, max, default) in expect {
            let spec = field_spec(name).unwrap();
            assert_eq!(spec.min, min, "{name} min");
            assert_eq!(spec.max, max, "{name} max");
            assert_eq!(spec.default, default, "{name} default");
        }
    }

    #[test]
    fn test_select_default_is_first_option() {
        for spec in FIELD_SPECS.iter() {
            if let Widget::Select { options } = spec.widget {
                assert_eq!(spec.default, options[0].value as f32, "{}", spec.name);
            }
        }
    }

    #[test]
    fn test_oldpeak_step() {
        let spec = field_spec("oldpeak").unwrap();
        assert_eq!(spec.step, 0.1);
        assert!(spec.is_fractional());
        assert!(!field_spec("age").unwrap().is_fractional());
    }

    #[test]
    fn test_clamp_number() {
        let age = field_spec("age").unwrap();
        assert_eq!(age.clamp(0.0), 1.0);
        assert_eq!(age.clamp(150.0), 100.0);
        assert_eq!(age.clamp(60.0), 60.0);
        assert_eq!(age.clamp(f32::NAN), 45.0);
    }

    #[test]
    fn test_clamp_fractional_snaps_to_step() {
        let oldpeak = field_spec("oldpeak").unwrap();
        assert_eq!(oldpeak.clamp(1.26), 1.3);
        assert_eq!(oldpeak.clamp(1.24), 1.2);
        assert_eq!(oldpeak.clamp(2.3), 2.3);
        assert_eq!(oldpeak.clamp(10.04), 10.0);
        assert_eq!(oldpeak.clamp(-0.5), 0.0);
    }

    #[test]
    fn test_clamp_select_snaps_to_option() {
        let sex = field_spec("sex").unwrap();
        assert_eq!(sex.clamp(7.0), 1.0);
        assert_eq!(sex.clamp(-3.0), 0.0);
        assert_eq!(sex.clamp_int(1), 1);
    }

    #[test]
    fn test_clamp_int() {
        let ca = field_spec("ca").unwrap();
        assert_eq!(ca.clamp_int(9), 4);
        assert_eq!(ca.clamp_int(-1), 0);
    }

    #[test]
    fn test_labels() {
        let sex = field_spec("sex").unwrap();
        assert_eq!(sex.label_text(Locale::Id), "Jenis Kelamin (sex)");
        assert_eq!(sex.label_text(Locale::En), "Sex (sex)");
    }
}
