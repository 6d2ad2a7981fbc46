use serde::{Deserialize, Serialize};

/// Fallback fill colors, cycled by series index.
pub const PALETTE: [&str; 6] = [
    "#2563eb", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2",
];

/// One labelled value in a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub color: Option<String>,
}

impl DataPoint {
    pub fn new(
        label: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(
        mut self,
        color: impl Into<String>,
    ) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The value with non-finite and negative inputs read as zero.
    pub fn magnitude(&self) -> f64 {
        if self.value.is_finite() && self.value > 0.0 {
            self.value
        } else {
            0.0
        }
    }

    /// The point's own color, or the palette entry for `index`.
    pub fn color_or_palette(
        &self,
        index: usize,
    ) -> String {
        self.color
            .clone()
            .unwrap_or_else(|| PALETTE[index % PALETTE.len()].to_string())
    }
}

/// Drawing area of a chart, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub width: f64,
    pub height: f64,
}

impl ChartBounds {
    pub fn new(
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

impl Default for ChartBounds {
    fn default() -> Self {
        Self::new(400.0, 300.0)
    }
}
