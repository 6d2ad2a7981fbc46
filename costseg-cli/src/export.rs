//! Writes the scenario charts to SVG files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use costseg_charts::{
    ChartBounds, allocation_series, bar_chart, depreciation_comparison_series,
    horizontal_bar_chart, pie_chart, savings_series,
};
use costseg_core::DerivedValues;
use tracing::info;

/// Renders the allocation pie, depreciation comparison and savings charts
/// into `out_dir`, creating it if needed. Returns the written paths.
pub fn write_charts(
    results: &DerivedValues,
    out_dir: &Path,
    bounds: ChartBounds,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let charts = [
        (
            "allocation.svg",
            pie_chart(&allocation_series(results), bounds).to_svg(),
        ),
        (
            "depreciation.svg",
            bar_chart(&depreciation_comparison_series(results), bounds).to_svg(),
        ),
        (
            "savings.svg",
            horizontal_bar_chart(&savings_series(results), bounds).to_svg(),
        ),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (file_name, svg) in charts {
        let path = out_dir.join(file_name);
        std::fs::write(&path, svg)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        info!(path = %path.display(), "wrote chart");
        written.push(path);
    }
    Ok(written)
}
