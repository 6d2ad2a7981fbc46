//! Line charts with optional area fill and horizontal gridlines.

use serde::Serialize;

use crate::point::{ChartBounds, DataPoint, PALETTE};
use crate::svg::{SvgBuilder, escape, num};

/// Number of horizontal gridlines, spread evenly from min to max.
const GRIDLINE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartOptions {
    /// Inset from every edge of the bounds to the plotting rectangle.
    pub padding: f64,
    /// Whether to build the closed area path under the line.
    pub fill_area: bool,
    pub stroke: String,
}

impl Default for LineChartOptions {
    fn default() -> Self {
        Self {
            padding: 20.0,
            fill_area: true,
            stroke: PALETTE[0].to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gridline {
    pub y: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub bounds: ChartBounds,
    pub options: LineChartOptions,
    /// Padding actually applied, after clamping to half the width and height.
    pub inset: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub points: Vec<(f64, f64)>,
    pub line_path: String,
    pub area_path: Option<String>,
    pub gridlines: Vec<Gridline>,
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Min-max normalizes the series into the padded plotting rectangle.
///
/// An empty series yields an empty chart. When every value is equal the line
/// runs flat along the bottom of the plotting rectangle.
pub fn line_chart(
    points: &[DataPoint],
    bounds: ChartBounds,
    options: LineChartOptions,
) -> LineChart {
    if points.is_empty() {
        return LineChart {
            bounds,
            options,
            inset: 0.0,
            min_value: 0.0,
            max_value: 0.0,
            points: Vec::new(),
            line_path: String::new(),
            area_path: None,
            gridlines: Vec::new(),
        };
    }

    let values: Vec<f64> = points.iter().map(|p| finite_or_zero(p.value)).collect();
    let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max_value - min_value;

    let padding = options.padding.min(bounds.width / 2.0).min(bounds.height / 2.0);
    let plot_width = bounds.width - 2.0 * padding;
    let plot_height = bounds.height - 2.0 * padding;
    let bottom = padding + plot_height;

    let coords: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() == 1 {
                padding + plot_width / 2.0
            } else {
                padding + i as f64 / (values.len() - 1) as f64 * plot_width
            };
            let y = if range > 0.0 {
                padding + (1.0 - (value - min_value) / range) * plot_height
            } else {
                bottom
            };
            (x, y)
        })
        .collect();

    let line_path = coords
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{command} {} {}", num(*x), num(*y))
        })
        .collect::<Vec<_>>()
        .join(" ");

    let area_path = match (options.fill_area, coords.first(), coords.last()) {
        (true, Some((first_x, _)), Some((last_x, _))) => Some(format!(
            "{line_path} L {} {} L {} {} Z",
            num(*last_x),
            num(bottom),
            num(*first_x),
            num(bottom),
        )),
        _ => None,
    };

    let steps = (GRIDLINE_COUNT - 1) as f64;
    let gridlines = (0..GRIDLINE_COUNT)
        .map(|i| {
            let fraction = i as f64 / steps;
            Gridline {
                y: bottom - fraction * plot_height,
                value: min_value + fraction * range,
            }
        })
        .collect();

    LineChart {
        bounds,
        options,
        inset: padding,
        min_value,
        max_value,
        points: coords,
        line_path,
        area_path,
        gridlines,
    }
}

impl LineChart {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn to_svg(&self) -> String {
        let mut svg = SvgBuilder::new(self.bounds.width, self.bounds.height);
        if self.is_empty() {
            return svg.build();
        }

        let stroke = escape(&self.options.stroke);
        let left = num(self.inset);
        let right = num(self.bounds.width - self.inset);
        for gridline in &self.gridlines {
            let y = num(gridline.y);
            svg.push(format!(
                r##"<line x1="{left}" y1="{y}" x2="{right}" y2="{y}" stroke="#e5e7eb" stroke-width="1"/>"##
            ));
        }

        if let Some(area) = &self.area_path {
            svg.push(format!(
                r#"<defs><linearGradient id="area-fill" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{stroke}" stop-opacity="0.3"/><stop offset="100%" stop-color="{stroke}" stop-opacity="0"/></linearGradient></defs>"#
            ));
            svg.push(format!(r#"<path d="{area}" fill="url(#area-fill)"/>"#));
        }

        svg.push(format!(
            r#"<path d="{}" fill="none" stroke="{stroke}" stroke-width="2"/>"#,
            self.line_path
        ));
        svg.build()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn series(values: &[f64]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(format!("y{i}"), *v))
            .collect()
    }

    fn options() -> LineChartOptions {
        LineChartOptions {
            padding: 10.0,
            ..Default::default()
        }
    }

    #[test]
    fn line_chart_normalizes_into_padded_rectangle() {
        let chart = line_chart(&series(&[0.0, 50.0, 100.0]), ChartBounds::new(220.0, 120.0), options());

        assert_eq!(chart.points, vec![(10.0, 110.0), (110.0, 60.0), (210.0, 10.0)]);
        assert_eq!(chart.line_path, "M 10 110 L 110 60 L 210 10");
    }

    #[test]
    fn line_chart_area_path_closes_along_bottom() {
        let chart = line_chart(&series(&[0.0, 100.0]), ChartBounds::new(120.0, 120.0), options());

        assert_eq!(
            chart.area_path.as_deref(),
            Some("M 10 110 L 110 10 L 110 110 L 10 110 Z")
        );
    }

    #[test]
    fn line_chart_without_fill_has_no_area() {
        let chart = line_chart(
            &series(&[1.0, 2.0]),
            ChartBounds::new(120.0, 120.0),
            LineChartOptions {
                fill_area: false,
                ..options()
            },
        );

        assert_eq!(chart.area_path, None);
        assert!(!chart.to_svg().contains("area-fill"));
    }

    #[test]
    fn line_chart_draws_five_gridlines_between_min_and_max() {
        let chart = line_chart(&series(&[100.0, 300.0]), ChartBounds::new(120.0, 120.0), options());

        let values: Vec<f64> = chart.gridlines.iter().map(|g| g.value).collect();
        let ys: Vec<f64> = chart.gridlines.iter().map(|g| g.y).collect();
        assert_eq!(values, vec![100.0, 150.0, 200.0, 250.0, 300.0]);
        assert_eq!(ys, vec![110.0, 85.0, 60.0, 35.0, 10.0]);
    }

    #[test]
    fn line_chart_flat_series_runs_along_bottom() {
        let chart = line_chart(&series(&[7.0, 7.0, 7.0]), ChartBounds::new(120.0, 120.0), options());

        assert!(chart.points.iter().all(|(x, y)| x.is_finite() && *y == 110.0));
        assert!(!chart.to_svg().contains("NaN"));
    }

    #[test]
    fn line_chart_single_point_is_centered() {
        let chart = line_chart(&series(&[42.0]), ChartBounds::new(120.0, 120.0), options());

        assert_eq!(chart.points, vec![(60.0, 110.0)]);
    }

    #[test]
    fn line_chart_gridlines_span_plot_on_short_bounds() {
        let chart = line_chart(
            &series(&[0.0, 100.0]),
            ChartBounds::new(400.0, 20.0),
            LineChartOptions::default(),
        );

        assert_eq!(chart.inset, 10.0);
        assert_eq!(chart.points, vec![(10.0, 10.0), (390.0, 10.0)]);
        assert!(chart.to_svg().contains(r#"<line x1="10" y1="10" x2="390" y2="10""#));
        assert!(!chart.to_svg().contains(r#"x1="20""#));
    }

    #[test]
    fn line_chart_empty_series_renders_nothing() {
        let chart = line_chart(&[], ChartBounds::new(120.0, 120.0), options());

        assert!(chart.is_empty());
        assert!(chart.gridlines.is_empty());
        assert!(!chart.to_svg().contains("<path"));
    }
}
