use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use costseg_cli::args::ScenarioArgs;
use costseg_cli::config::Config;
use costseg_cli::export::write_charts;
use costseg_cli::logging::init_tracing;
use costseg_cli::report::Report;
use costseg_core::{CostSegregationWorksheet, DepreciationScenario, ScenarioForm};
use costseg_data::ScenarioLoader;
use tracing::{debug, info};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Cost segregation estimator.
///
/// Compares standard straight-line depreciation with an accelerated schedule
/// and reports the resulting tax savings.
#[derive(Debug, Parser)]
#[command(name = "costseg", version, about)]
struct Cli {
    /// TOML file with discount and chart settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a single scenario.
    Compute {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Print JSON instead of a text report.
        #[arg(long)]
        json: bool,
    },

    /// Compute every scenario in a CSV file.
    Batch {
        /// CSV file with one scenario per row.
        #[arg(short, long)]
        file: PathBuf,

        /// Print JSON instead of text reports.
        #[arg(long)]
        json: bool,
    },

    /// Write allocation, depreciation and savings charts as SVG.
    Chart {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Directory for the SVG files.
        #[arg(short, long, default_value = "charts")]
        out_dir: PathBuf,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn build_form(
    args: &ScenarioArgs,
    worksheet: &CostSegregationWorksheet,
) -> ScenarioForm {
    let mut form = ScenarioForm::with_worksheet(DepreciationScenario::default(), worksheet.clone());
    args.apply_to(&mut form);
    form
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    debug!(?config, "loaded configuration");

    let worksheet = CostSegregationWorksheet::with_assumptions(config.assumptions())?;

    match cli.command {
        Command::Compute { scenario, json } => {
            let form = build_form(&scenario, &worksheet);
            let results = form.results();
            let report = Report::new(None, form.scenario(), &results);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
        }
        Command::Batch { file, json } => {
            let records = ScenarioLoader::load_from_file(&file)
                .with_context(|| format!("Failed to load scenarios: {}", file.display()))?;
            info!(count = records.len(), "loaded scenarios");

            let results: Vec<_> = records
                .iter()
                .map(|record| worksheet.calculate(&record.scenario))
                .collect();
            let reports: Vec<_> = records
                .iter()
                .zip(&results)
                .map(|(record, values)| Report::new(Some(record.name.as_str()), &record.scenario, values))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for (i, report) in reports.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    print!("{report}");
                }
            }
        }
        Command::Chart { scenario, out_dir } => {
            let form = build_form(&scenario, &worksheet);
            let written = write_charts(&form.results(), &out_dir, config.chart_bounds())?;
            for path in written {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
