//! Minimal SVG document assembly.

/// Collects SVG elements and wraps them in a root `<svg>` element.
pub struct SvgBuilder {
    width: f64,
    height: f64,
    content: Vec<String>,
}

impl SvgBuilder {
    pub fn new(
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            width,
            height,
            content: Vec::new(),
        }
    }

    pub fn push(
        &mut self,
        element: String,
    ) {
        self.content.push(element);
    }

    pub fn build(&self) -> String {
        let w = num(self.width);
        let h = num(self.height);
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">
{}
</svg>"#,
            self.content.join("\n")
        )
    }
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
pub fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_string()
    }
}

/// Escapes text for use inside element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
