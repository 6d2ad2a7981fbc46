//! Stateless chart geometry rendered as SVG.
//!
//! Each chart function maps an ordered series of [`DataPoint`]s into shapes
//! sized to a bounding box. Degenerate series (empty, all zero, zero total)
//! produce empty or flat geometry rather than non-finite coordinates.

pub mod bar;
pub mod line;
pub mod pie;
pub mod point;
pub mod scenario;
pub mod svg;

pub use bar::{Bar, BarChart, Orientation, bar_chart, horizontal_bar_chart};
pub use line::{Gridline, LineChart, LineChartOptions, line_chart};
pub use pie::{PieChart, PieSlice, pie_chart};
pub use point::{ChartBounds, DataPoint, PALETTE};
pub use scenario::{allocation_series, depreciation_comparison_series, savings_series};
