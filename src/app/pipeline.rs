//! Shared comparison pipeline used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! inputs (CSV or synthetic) -> compare -> metrics table
//!
//! The command handlers can then focus on presentation (printing, plots, exports).

use tracing::{info, warn};

use crate::cli::{CompareArgs, DemoArgs};
use crate::data::{SampleConfig, generate_sample};
use crate::domain::{MetricSet, MetricsTable};
use crate::error::AppError;
use crate::forecast::reference_forecasts;
use crate::io::ingest::{ForecastData, load_forecast_csv};
use crate::metrics::compare;

/// Load forecasts from the CSV named on the command line.
pub fn load_inputs(args: &CompareArgs) -> Result<ForecastData, AppError> {
    let data = load_forecast_csv(&args.csv)?;
    info!(
        path = %args.csv.display(),
        models = data.predictions.len(),
        test = data.test.len(),
        "loaded forecasts"
    );
    Ok(data)
}

/// Build a synthetic series and forecast its test window with the naive models.
pub fn demo_inputs(args: &DemoArgs) -> Result<ForecastData, AppError> {
    let config = SampleConfig {
        seed: args.seed,
        n_train: args.n_train,
        n_test: args.n_test,
        ..SampleConfig::default()
    };
    let sample = generate_sample(&config)?;
    let predictions = reference_forecasts(sample.train.values(), sample.test.len())?;
    info!(seed = args.seed, n_train = args.n_train, n_test = args.n_test, "generated demo sample");

    Ok(ForecastData {
        train: (!args.no_train).then_some(sample.train),
        test: sample.test,
        predictions,
    })
}

/// Score every forecast against the test values.
pub fn run_comparison(
    data: &ForecastData,
    benchmark: Option<&str>,
    metric_set: MetricSet,
) -> Result<MetricsTable, AppError> {
    let table = compare(data.test.values(), &data.predictions, benchmark, metric_set)?;

    if let Some(name) = benchmark {
        if !table.has_ratios() {
            warn!(benchmark = name, "benchmark model not found; ratio columns omitted");
        }
    }
    if let Some(best) = table.best() {
        info!(model = %best.model, rmse = best.rmse, "best model by RMSE");
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::RANDOM_WALK;

    fn demo_args() -> DemoArgs {
        use clap::Parser;
        let cli = crate::cli::Cli::parse_from(["fcmp", "demo", "--n-train", "36", "--n-test", "12"]);
        match cli.command {
            crate::cli::Command::Demo(args) => args,
            _ => panic!("expected demo"),
        }
    }

    #[test]
    fn demo_pipeline_produces_full_table() {
        let data = demo_inputs(&demo_args()).unwrap();
        assert_eq!(data.test.len(), 12);
        assert_eq!(data.train.as_ref().map(|t| t.len()), Some(36));

        let table = run_comparison(&data, Some(RANDOM_WALK), MetricSet::RmseMae).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(RANDOM_WALK).and_then(|r| r.rmse_ratio), Some(1.0));
        let rmses: Vec<f64> = table.rows().iter().map(|r| r.rmse).collect();
        assert!(rmses.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn unknown_benchmark_is_not_an_error() {
        let data = demo_inputs(&demo_args()).unwrap();
        let table = run_comparison(&data, Some("NotAModel"), MetricSet::Rmse).unwrap();
        assert!(!table.has_ratios());
    }
}
