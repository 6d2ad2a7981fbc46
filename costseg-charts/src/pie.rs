//! Pie charts built from SVG arc paths.

use serde::Serialize;

use crate::point::{ChartBounds, DataPoint};
use crate::svg::{SvgBuilder, escape, num};

/// Angle of the first slice's leading edge: 12 o'clock.
const START_ANGLE: f64 = -90.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
    /// Leading edge, degrees clockwise from 3 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
    /// Angular share of the slice, `value / total * 360`.
    pub sweep: f64,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub bounds: ChartBounds,
    pub center: (f64, f64),
    pub radius: f64,
    pub total: f64,
    pub slices: Vec<PieSlice>,
}

fn point_on_circle(
    center: (f64, f64),
    radius: f64,
    degrees: f64,
) -> (f64, f64) {
    let radians = degrees.to_radians();
    (
        center.0 + radius * radians.cos(),
        center.1 + radius * radians.sin(),
    )
}

/// Wedge from the center out to the arc between two angles.
fn wedge_path(
    center: (f64, f64),
    radius: f64,
    start: f64,
    end: f64,
) -> String {
    let (cx, cy) = center;
    let r = num(radius);

    if end - start >= 360.0 - f64::EPSILON {
        // A single arc cannot close on its own start point.
        return format!(
            "M {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {} Z",
            num(cx),
            num(cy - radius),
            num(cx),
            num(cy + radius),
            num(cx),
            num(cy - radius),
        );
    }

    let (x1, y1) = point_on_circle(center, radius, start);
    let (x2, y2) = point_on_circle(center, radius, end);
    let large_arc = if end - start > 180.0 { 1 } else { 0 };

    format!(
        "M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z",
        num(cx),
        num(cy),
        num(x1),
        num(y1),
        num(x2),
        num(y2),
    )
}

/// Converts each value's share of the total into a wedge, starting at 12
/// o'clock and running clockwise.
///
/// A series whose total is zero produces no slices.
pub fn pie_chart(
    points: &[DataPoint],
    bounds: ChartBounds,
) -> PieChart {
    let center = (bounds.width / 2.0, bounds.height / 2.0);
    let radius = bounds.width.min(bounds.height) / 2.0;
    let total: f64 = points.iter().map(DataPoint::magnitude).sum();

    let mut slices = Vec::new();
    if total > 0.0 {
        let mut angle = START_ANGLE;
        for (i, point) in points.iter().enumerate() {
            let sweep = point.magnitude() / total * 360.0;
            let end = angle + sweep;
            slices.push(PieSlice {
                label: point.label.clone(),
                value: point.value,
                color: point.color_or_palette(i),
                start_angle: angle,
                end_angle: end,
                sweep,
                path: wedge_path(center, radius, angle, end),
            });
            angle = end;
        }
    }

    PieChart {
        bounds,
        center,
        radius,
        total,
        slices,
    }
}

impl PieChart {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn to_svg(&self) -> String {
        let mut svg = SvgBuilder::new(self.bounds.width, self.bounds.height);
        for slice in self.slices.iter().filter(|s| s.sweep > 0.0) {
            svg.push(format!(
                r#"<path d="{}" fill="{}"><title>{}</title></path>"#,
                slice.path,
                escape(&slice.color),
                escape(&slice.label),
            ));
        }
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
            .map(|(i, v)| DataPoint::new(format!("p{i}"), *v))
            .collect()
    }

    #[test]
    fn pie_chart_shares_sum_to_full_circle() {
        let chart = pie_chart(&series(&[1.0, 1.0, 2.0]), ChartBounds::new(200.0, 200.0));

        let sweeps: Vec<f64> = chart.slices.iter().map(|s| s.sweep).collect();
        assert_eq!(sweeps, vec![90.0, 90.0, 180.0]);
        assert_eq!(sweeps.iter().sum::<f64>(), 360.0);
        assert_eq!(chart.slices[0].start_angle, -90.0);
        assert_eq!(chart.slices[2].end_angle, 270.0);
    }

    #[test]
    fn pie_chart_first_slice_starts_at_twelve_o_clock() {
        let chart = pie_chart(&series(&[1.0, 1.0, 2.0]), ChartBounds::new(200.0, 200.0));

        assert_eq!(chart.slices[0].path, "M 100 100 L 100 0 A 100 100 0 0 1 200 100 Z");
    }

    #[test]
    fn pie_chart_sets_large_arc_flag_past_half() {
        let chart = pie_chart(&series(&[3.0, 1.0]), ChartBounds::new(200.0, 200.0));

        assert!(chart.slices[0].path.contains(" 0 1 1 "));
        assert!(chart.slices[1].path.contains(" 0 0 1 "));
    }

    #[test]
    fn pie_chart_single_value_is_full_circle() {
        let chart = pie_chart(&series(&[0.0, 5.0]), ChartBounds::new(100.0, 100.0));

        assert_eq!(chart.slices[1].sweep, 360.0);
        assert_eq!(chart.slices[1].path.matches(" A ").count(), 2);
        assert_eq!(chart.to_svg().matches("<path").count(), 1);
    }

    #[test]
    fn pie_chart_zero_total_has_no_slices() {
        let chart = pie_chart(&series(&[0.0, 0.0]), ChartBounds::new(100.0, 100.0));

        assert!(chart.is_empty());
        assert_eq!(chart.total, 0.0);
        assert!(!chart.to_svg().contains("NaN"));
    }

    #[test]
    fn pie_chart_ignores_negative_values() {
        let chart = pie_chart(&series(&[-4.0, 2.0, 2.0]), ChartBounds::new(100.0, 100.0));

        assert_eq!(chart.total, 4.0);
        assert_eq!(chart.slices[0].sweep, 0.0);
        assert_eq!(chart.slices[1].sweep, 180.0);
    }

    #[test]
    fn pie_chart_radius_fits_shorter_side() {
        let chart = pie_chart(&series(&[1.0]), ChartBounds::new(300.0, 120.0));

        assert_eq!(chart.radius, 60.0);
        assert_eq!(chart.center, (150.0, 60.0));
    }
}
