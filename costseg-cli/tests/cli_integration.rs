//! Integration tests for configuration loading and chart export.

use std::path::{Path, PathBuf};

use costseg_cli::config::{Config, ConfigError};
use costseg_cli::export::write_charts;
use costseg_core::{CostSegregationWorksheet, DepreciationScenario};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_config_fixture() {
    let config = Config::load(&fixture_path("costseg.toml")).expect("fixture should load");

    assert_eq!(config.discount_rate, dec!(0.08));
    assert_eq!(config.horizon_years, 7);
    assert_eq!(config.chart_bounds().width, 640.0);
    assert_eq!(config.chart_bounds().height, 400.0);
}

#[test]
fn test_config_assumptions_change_npv_only() {
    let config = Config::load(&fixture_path("costseg.toml")).unwrap();
    let scenario = DepreciationScenario::default();

    let default = CostSegregationWorksheet::new().calculate(&scenario);
    let custom = CostSegregationWorksheet::with_assumptions(config.assumptions())
        .unwrap()
        .calculate(&scenario);

    assert_eq!(custom.total_tax_savings, default.total_tax_savings);
    assert!(custom.net_present_value < default.net_present_value);
    assert!(custom.net_present_value > custom.year_one_tax_savings);
}

#[test]
fn test_load_missing_config_returns_read_error() {
    let result = Config::load(Path::new("/this/path/does/not/exist.toml"));

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_write_charts_creates_three_svg_files() {
    let out_dir = std::env::temp_dir().join(format!("costseg-charts-{}", std::process::id()));
    let results = CostSegregationWorksheet::new().calculate(&DepreciationScenario::default());

    let written = write_charts(&results, &out_dir, Config::default().chart_bounds())
        .expect("charts should be written");

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["allocation.svg", "depreciation.svg", "savings.svg"]);
    for path in &written {
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("NaN"));
    }

    std::fs::remove_dir_all(&out_dir).unwrap();
}
