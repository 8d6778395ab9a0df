//! Command-line parsing for the forecast comparison tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the metrics/plotting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::MetricSet;
use crate::plot::{DEFAULT_TITLE, DEFAULT_X_LABEL, DEFAULT_Y_LABEL};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fcmp", version, about = "Compare and plot time-series forecasts")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score the forecasts in a CSV file against its actual values.
    Compare(CompareArgs),
    /// Generate a synthetic series, forecast it with naive models, and compare.
    Demo(DemoArgs),
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    /// Forecast CSV (`date,actual,<model>...`).
    #[arg(long, value_name = "CSV")]
    pub csv: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct DemoArgs {
    /// Random seed for the synthetic series.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of training months.
    #[arg(long, default_value_t = 120)]
    pub n_train: usize,

    /// Number of test months (forecast horizon).
    #[arg(long, default_value_t = 24)]
    pub n_test: usize,

    /// Hide the training history from the chart.
    #[arg(long)]
    pub no_train: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options shared by every command that produces a comparison.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Model whose errors are the denominator of the ratio columns.
    #[arg(short, long, env = "FCMP_BENCHMARK")]
    pub benchmark: Option<String>,

    /// Which metrics to compute.
    #[arg(long, value_enum, default_value_t = MetricSet::RmseMae)]
    pub metrics: MetricSet,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Write the chart as SVG.
    #[arg(long, value_name = "SVG")]
    pub svg: Option<PathBuf>,

    /// Chart title.
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// X-axis label.
    #[arg(long, default_value = DEFAULT_X_LABEL)]
    pub x_label: String,

    /// Y-axis label.
    #[arg(long, default_value = DEFAULT_Y_LABEL)]
    pub y_label: String,

    /// Export the metrics table to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Export the metrics table to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compare_with_defaults() {
        let cli = Cli::parse_from(["fcmp", "compare", "--csv", "f.csv"]);
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.output.metrics, MetricSet::RmseMae);
        assert!(args.output.plot);
        assert_eq!(args.output.title, DEFAULT_TITLE);
    }

    #[test]
    fn parses_demo_flags() {
        let cli = Cli::parse_from([
            "fcmp", "-vv", "demo", "--seed", "7", "--metrics", "rmse", "-b", "Drift", "--no-plot",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Demo(args) = cli.command else {
            panic!("expected demo");
        };
        assert_eq!(args.seed, 7);
        assert_eq!(args.output.metrics, MetricSet::Rmse);
        assert_eq!(args.output.benchmark.as_deref(), Some("Drift"));
        assert!(args.output.no_plot);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
