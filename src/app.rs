//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - installs logging
//! - builds inputs (CSV or synthetic demo)
//! - runs the comparison
//! - prints the table and plot, writes optional SVG/exports

use clap::Parser;
use tracing::info;

use crate::cli::{Command, CompareArgs, DemoArgs, OutputArgs};
use crate::error::AppError;
use crate::forecast::RANDOM_WALK;
use crate::io::ingest::ForecastData;
use crate::plot::ForecastChart;

pub mod pipeline;

/// Entry point for the `fcmp` binary.
pub fn run() -> Result<(), AppError> {
    // Environment defaults (e.g. FCMP_BENCHMARK) may live in a local `.env`.
    dotenvy::dotenv().ok();

    let cli = crate::cli::Cli::parse();
    crate::logging::init(cli.verbose, cli.quiet);

    match cli.command {
        Command::Compare(args) => handle_compare(args),
        Command::Demo(args) => handle_demo(args),
    }
}

fn handle_compare(args: CompareArgs) -> Result<(), AppError> {
    let data = pipeline::load_inputs(&args)?;
    let benchmark = args.output.benchmark.clone();
    emit(&data, benchmark.as_deref(), &args.output)
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let data = pipeline::demo_inputs(&args)?;
    let benchmark = args
        .output
        .benchmark
        .clone()
        .unwrap_or_else(|| RANDOM_WALK.to_string());
    emit(&data, Some(&benchmark), &args.output)
}

/// Compare, then print and write every requested output.
fn emit(data: &ForecastData, benchmark: Option<&str>, output: &OutputArgs) -> Result<(), AppError> {
    let table = pipeline::run_comparison(data, benchmark, output.metrics)?;

    println!(
        "{}",
        crate::report::format_run_summary(&data.test, data.train.as_ref(), &data.predictions)
    );
    println!("{}", crate::report::format_metrics_table(&table));

    let chart = ForecastChart {
        title: output.title.clone(),
        x_label: output.x_label.clone(),
        y_label: output.y_label.clone(),
        ..ForecastChart::new(&data.test, &data.predictions).with_train(data.train.as_ref())
    };

    if output.plot && !output.no_plot {
        let plot = crate::plot::render_forecast_ascii(&chart, output.width, output.height)?;
        println!("{plot}");
    }

    if let Some(path) = &output.svg {
        crate::plot::render_forecast_svg(path, &chart)?;
        info!(path = %path.display(), "wrote chart");
    }
    if let Some(path) = &output.export_json {
        crate::io::export::write_metrics_json(path, &table)?;
        info!(path = %path.display(), "wrote metrics JSON");
    }
    if let Some(path) = &output.export_csv {
        crate::io::export::write_metrics_csv(path, &table)?;
        info!(path = %path.display(), "wrote metrics CSV");
    }

    Ok(())
}
