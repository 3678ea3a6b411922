//! HTML helpers

/// Escape text for element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}

/// Number as the widget shows it: one decimal for fractional fields
pub fn format_number(value: f32, fractional: bool) -> String {
    if fractional {
        format!("{:.1}", value)
    } else {
        format!("{}", value.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Gula Darah > 120 mg/dl"), "Gula Darah &gt; 120 mg/dl");
        assert_eq!(escape("Model '.onnx'"), "Model &#39;.onnx&#39;");
        assert_eq!(escape("<b>\"a\" & b</b>"), "&lt;b&gt;&quot;a&quot; &amp; b&lt;/b&gt;");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(45.0, false), "45");
        assert_eq!(format_number(1.0, true), "1.0");
        assert_eq!(format_number(2.3, true), "2.3");
    }
}
