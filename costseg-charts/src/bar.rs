//! Vertical and horizontal bar charts.

use serde::Serialize;

use crate::point::{ChartBounds, DataPoint};
use crate::svg::{SvgBuilder, escape, num};

/// Share of each bar's slot left empty between neighbours.
const GAP_RATIO: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A single bar in chart coordinates (origin top-left).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub orientation: Orientation,
    pub bounds: ChartBounds,
    /// Largest value in the series; the top of the linear scale.
    pub max_value: f64,
    pub bars: Vec<Bar>,
}

/// Scales `value` from `[0, max]` onto `[0, extent]`.
///
/// A non-positive maximum collapses every bar onto the baseline.
fn scale(
    value: f64,
    max: f64,
    extent: f64,
) -> f64 {
    if max > 0.0 { value / max * extent } else { 0.0 }
}

fn max_magnitude(points: &[DataPoint]) -> f64 {
    points.iter().map(DataPoint::magnitude).fold(0.0, f64::max)
}

/// Lays out bars growing upward from the bottom edge.
pub fn bar_chart(
    points: &[DataPoint],
    bounds: ChartBounds,
) -> BarChart {
    let max_value = max_magnitude(points);
    let slot = if points.is_empty() {
        0.0
    } else {
        bounds.width / points.len() as f64
    };

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let height = scale(point.magnitude(), max_value, bounds.height);
            Bar {
                label: point.label.clone(),
                value: point.value,
                x: i as f64 * slot + slot * GAP_RATIO / 2.0,
                y: bounds.height - height,
                width: slot * (1.0 - GAP_RATIO),
                height,
                color: point.color_or_palette(i),
            }
        })
        .collect();

    BarChart {
        orientation: Orientation::Vertical,
        bounds,
        max_value,
        bars,
    }
}

/// Lays out bars growing rightward from the left edge.
pub fn horizontal_bar_chart(
    points: &[DataPoint],
    bounds: ChartBounds,
) -> BarChart {
    let max_value = max_magnitude(points);
    let slot = if points.is_empty() {
        0.0
    } else {
        bounds.height / points.len() as f64
    };

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, point)| Bar {
            label: point.label.clone(),
            value: point.value,
            x: 0.0,
            y: i as f64 * slot + slot * GAP_RATIO / 2.0,
            width: scale(point.magnitude(), max_value, bounds.width),
            height: slot * (1.0 - GAP_RATIO),
            color: point.color_or_palette(i),
        })
        .collect();

    BarChart {
        orientation: Orientation::Horizontal,
        bounds,
        max_value,
        bars,
    }
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn to_svg(&self) -> String {
        let mut svg = SvgBuilder::new(self.bounds.width, self.bounds.height);
        for bar in &self.bars {
            svg.push(format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"><title>{}</title></rect>"#,
                num(bar.x),
                num(bar.y),
                num(bar.width),
                num(bar.height),
                escape(&bar.color),
                escape(&bar.label),
            ));
        }
        svg.build()
    }
}
