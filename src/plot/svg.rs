//! Plotters-powered SVG forecast chart.
//!
//! Layout:
//! - training history (optional): muted grey, half opacity
//! - actual test values: thick black line
//! - each forecast: dashed line, colour and dash pattern from `plot::style`
//!
//! The x axis is plotted in day numbers and labelled back as ISO dates.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::error::PlotError;
use crate::plot::{ForecastChart, date_from_day_number, points, series_style};

/// Chart size in pixels (roughly a 14x7 inch figure at 100 dpi).
pub const SVG_SIZE: (u32, u32) = (1400, 700);

/// Render the chart to an SVG file at `path`.
pub fn render_forecast_svg(path: &Path, chart: &ForecastChart<'_>) -> Result<(), PlotError> {
    chart.validate()?;
    draw(path, chart).map_err(|e| PlotError::Backend(e.to_string()))
}

fn draw(path: &Path, chart: &ForecastChart<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, SVG_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x0, x1) = chart.x_range();
    let (y0, y1) = chart.y_range();

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_labels(8)
        .y_labels(8)
        .x_label_formatter(&|v| date_from_day_number(*v).map(|d| d.to_string()).unwrap_or_default())
        .y_label_formatter(&|v| format!("{v:.2}"))
        .light_line_style(&WHITE)
        .bold_line_style(&BLACK.mix(0.3))
        .draw()?;

    // 1) Training history.
    if let Some(train) = chart.train {
        let muted = RGBColor(128, 128, 128).mix(0.5).stroke_width(2);
        ctx.draw_series(LineSeries::new(points(train.dates(), train.values()), muted))?
            .label("Training Data")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], muted));
    }

    // 2) Actual test values.
    let actual = BLACK.stroke_width(3);
    ctx.draw_series(LineSeries::new(points(chart.test.dates(), chart.test.values()), actual))?
        .label("Actual Test")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], actual));

    // 3) Forecasts.
    for (i, (name, values)) in chart.predictions.iter().enumerate() {
        let style = series_style(i);
        let stroke = style.color().stroke_width(2);
        let (dash, gap) = style.line.dash_pattern();
        ctx.draw_series(DashedLineSeries::new(
            points(chart.test.dates(), values),
            dash,
            gap,
            stroke,
        ))?
        .label(format!("{name} (Forecast)"))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stroke));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::{PredictionSet, TimeSeries};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    #[test]
    fn writes_svg_with_legend_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");

        let train = TimeSeries::new(vec![d(1), d(2), d(3)], vec![10.0, 11.0, 12.0]).unwrap();
        let test = TimeSeries::new(vec![d(4), d(5)], vec![13.0, 14.0]).unwrap();
        let preds: PredictionSet = vec![("Naive", vec![12.0, 12.0]), ("Drift", vec![13.0, 14.0])]
            .into_iter()
            .collect();
        let chart = ForecastChart::new(&test, &preds).with_train(Some(&train));

        render_forecast_svg(&path, &chart).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Naive (Forecast)"));
        assert!(svg.contains("Drift (Forecast)"));
        assert!(svg.contains("Training Data"));
    }

    #[test]
    fn invalid_chart_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");

        let test = TimeSeries::new(vec![d(1)], vec![1.0]).unwrap();
        let preds: PredictionSet = vec![("A", vec![1.0, 2.0])].into_iter().collect();
        let chart = ForecastChart::new(&test, &preds);

        assert!(render_forecast_svg(&path, &chart).is_err());
        assert!(!path.exists());
    }
}
