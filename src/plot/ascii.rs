//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - actual test values: `#`
//! - training history: `.`
//! - forecasts: one glyph per palette slot (see `plot::style`)

use crate::error::PlotError;
use crate::plot::{ForecastChart, date_from_day_number, points, series_style};

/// Render the chart as a character grid with a header and legend.
///
/// Actual values are drawn first so they stay visible where forecasts cross
/// them; later series only fill empty cells.
pub fn render_forecast_ascii(chart: &ForecastChart<'_>, width: usize, height: usize) -> Result<String, PlotError> {
    chart.validate()?;

    let width = width.max(10);
    let height = height.max(5);
    let (x_min, x_max) = chart.x_range();
    let (y_min, y_max) = chart.y_range();

    let mut grid = vec![vec![' '; width]; height];
    let frame = Frame {
        x_min,
        x_max,
        y_min,
        y_max,
        width,
        height,
    };

    draw_polyline(&mut grid, &frame, &points(chart.test.dates(), chart.test.values()), '#');
    if let Some(train) = chart.train {
        draw_polyline(&mut grid, &frame, &points(train.dates(), train.values()), '.');
    }
    for (i, (_, values)) in chart.predictions.iter().enumerate() {
        let glyph = series_style(i).glyph;
        draw_polyline(&mut grid, &frame, &points(chart.test.dates(), values), glyph);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {}..{} | y=[{y_min:.2}, {y_max:.2}]\n",
        fmt_day(x_min),
        fmt_day(x_max),
    ));
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }

    if chart.train.is_some() {
        out.push_str("  . training\n");
    }
    out.push_str("  # actual\n");
    for (i, name) in chart.predictions.names().enumerate() {
        out.push_str(&format!("  {} {name} (forecast)\n", series_style(i).glyph));
    }

    Ok(out)
}

struct Frame {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    width: usize,
    height: usize,
}

impl Frame {
    fn map_x(&self, x: f64) -> usize {
        let u = ((x - self.x_min) / (self.x_max - self.x_min)).clamp(0.0, 1.0);
        (u * (self.width as f64 - 1.0)).round() as usize
    }

    fn map_y(&self, y: f64) -> usize {
        let u = ((y - self.y_min) / (self.y_max - self.y_min)).clamp(0.0, 1.0);
        // y=top is max -> row 0
        (self.height as f64 - 1.0 - (u * (self.height as f64 - 1.0))).round() as usize
    }
}

fn fmt_day(v: f64) -> String {
    date_from_day_number(v)
        .map(|d| d.to_string())
        .unwrap_or_else(|| format!("{v:.0}"))
}

fn draw_polyline(grid: &mut [Vec<char>], frame: &Frame, pts: &[(f64, f64)], ch: char) {
    let mut prev = None;
    for &(x, y) in pts {
        let cx = frame.map_x(x);
        let cy = frame.map_y(y);
        match prev {
            Some((x0, y0)) => draw_line(grid, x0, y0, cx, cy, ch),
            None => {
                if grid[cy][cx] == ' ' {
                    grid[cy][cx] = ch;
                }
            }
        }
        prev = Some((cx, cy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
