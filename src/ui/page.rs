//! Single page renderer
//!
//! Layout: header and intro, optional model banner, sidebar form with the
//! thirteen inputs and the analyze button, result section, disclaimer.

use crate::features::{FieldSpec, PatientInput, Widget, FIELD_SPECS};
use crate::i18n::Locale;
use crate::report::RiskAssessment;
use super::html::{escape, format_number};

/// Banner shown above the result area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNotice {
    ModelMissing,
    PredictionFailed,
}

/// Everything one render needs
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub locale: Locale,
    pub input: &'a PatientInput,
    pub notice: Option<PageNotice>,
    pub assessment: Option<&'a RiskAssessment>,
}

const STYLE: &str = r#"
body { font-family: "Source Sans Pro", sans-serif; margin: 0; display: flex; color: #31333f; }
aside { width: 320px; min-height: 100vh; background: #f0f2f6; padding: 1.5rem; }
aside { box-sizing: border-box; }
main { flex: 1; padding: 2rem 3rem; max-width: 760px; }
label { display: block; margin-top: 0.9rem; font-size: 0.9rem; }
input, select { width: 100%; box-sizing: border-box; padding: 0.3rem; }
input[type=range] { width: 80%; }
output { margin-left: 0.5rem; }
button { margin-top: 1.2rem; padding: 0.5rem 1rem; border: 1px solid #ccc; }
button { border-radius: 0.5rem; background: #fff; cursor: pointer; }
.banner { padding: 1rem; border-radius: 0.5rem; margin: 1rem 0; }
.error { background: #ffe9e9; color: #7d353b; }
.success { background: #e8f9ee; color: #177233; }
.info { background: #e9f1fb; color: #004280; }
"#;

pub fn render_page(ctx: &PageContext<'_>) -> String {
    let messages = ctx.locale.messages();
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n<head>\n", ctx.locale.html_lang()));
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{} {}</title>\n",
        escape(messages.page_icon),
        escape(messages.page_title)
    ));
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));

    html.push_str(&render_sidebar(ctx));

    html.push_str("<main>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(messages.heading)));
    html.push_str(&format!("<p>{}</p>\n<hr>\n", escape(messages.intro)));

    match ctx.notice {
        Some(PageNotice::ModelMissing) => {
            html.push_str(&banner("error", messages.model_missing));
        }
        Some(PageNotice::PredictionFailed) => {
            html.push_str(&banner("error", messages.prediction_failed));
        }
        None => {}
    }

    if let Some(assessment) = ctx.assessment {
        html.push_str(&render_result(ctx.locale, assessment));
    }

    html.push_str(&banner("info", messages.disclaimer));
    html.push_str("</main>\n</body>\n</html>\n");

    html
}

fn banner(kind: &str, text: &str) -> String {
    format!("<div class=\"banner {}\" role=\"alert\">{}</div>\n", kind, escape(text))
}

fn render_result(locale: Locale, assessment: &RiskAssessment) -> String {
    let messages = locale.messages();
    let kind = if assessment.is_high_risk() { "error" } else { "success" };

    let mut html = String::new();
    html.push_str("<section id=\"result\">\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape(messages.result_header)));
    html.push_str(&format!(
        "<div class=\"banner {}\" data-risk=\"{}\"><strong>{}</strong></div>\n",
        kind,
        if assessment.is_high_risk() { "high" } else { "low" },
        escape(&assessment.headline)
    ));
    html.push_str(&format!("<p>{}</p>\n", escape(assessment.advice)));
    html.push_str("</section>\n");
    html
}

fn render_sidebar(ctx: &PageContext<'_>) -> String {
    let messages = ctx.locale.messages();

    let mut html = String::new();
    html.push_str("<aside>\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape(messages.sidebar_header)));
    html.push_str("<form method=\"post\" action=\"/\">\n");

    for spec in FIELD_SPECS.iter() {
        let value = ctx.input.field_value(spec.name).unwrap_or(spec.default);
        html.push_str(&render_field(spec, value, ctx.locale));
    }

    html.push_str(&format!(
        "<button type=\"submit\">{}</button>\n",
        escape(messages.analyze_button)
    ));
    html.push_str("</form>\n</aside>\n");
    html
}

fn render_field(spec: &FieldSpec, value: f32, locale: Locale) -> String {
    let fractional = spec.is_fractional();
    let label = escape(spec.label_text(locale));

    match spec.widget {
        Widget::Select { options } => {
            let mut html = format!(
                concat!(
                    "<label for=\"{0}\">{1}</label>\n",
                    "<select id=\"{0}\" name=\"{0}\">\n",
                ),
                spec.name, label
            );

            for option in options {
                let text = option
                    .label
                    .map(|l| escape(l.get(locale)))
                    .unwrap_or_else(|| option.value.to_string());
                let selected = if option.value as f32 == value { " selected" } else { "" };

                html.push_str(&format!(
                    "<option value=\"{}\"{}>{}</option>\n",
                    option.value, selected, text
                ));
            }

            html.push_str("</select>\n");
            html
        }
        Widget::Number => format!(
            concat!(
                "<label for=\"{0}\">{1}</label>\n",
                "<input type=\"number\" id=\"{0}\" name=\"{0}\" ",
                "min=\"{2}\" max=\"{3}\" step=\"{4}\" value=\"{5}\" required>\n",
            ),
            spec.name,
            label,
            format_number(spec.min, fractional),
            format_number(spec.max, fractional),
            format_number(spec.step, fractional),
            format_number(value, fractional),
        ),
        Widget::Slider => format!(
            concat!(
                "<label for=\"{0}\">{1}</label>\n",
                "<input type=\"range\" id=\"{0}\" name=\"{0}\" ",
                "min=\"{2}\" max=\"{3}\" step=\"{4}\" value=\"{5}\" ",
                "oninput=\"this.nextElementSibling.value=this.value\">",
                "<output>{5}</output>\n",
            ),
            spec.name,
            label,
            format_number(spec.min, fractional),
            format_number(spec.max, fractional),
            format_number(spec.step, fractional),
            format_number(value, fractional),
        ),
    }
}
