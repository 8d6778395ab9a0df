//! Deterministic series styling.
//!
//! Forecast `i` (insertion order) gets colour `PALETTE[i % 5]` and line style
//! `LINE_STYLES[i % 3]`, so the same prediction set always renders the same way
//! in both the SVG and the terminal chart.

use plotters::style::RGBColor;

/// Matplotlib's default first five colours.
pub const PALETTE: [(u8, u8, u8); 5] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
];

/// Terminal glyph paired with each palette slot.
pub const GLYPHS: [char; 5] = ['*', '+', 'x', 'o', '~'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Dashed,
    DashDot,
    Dotted,
}

pub const LINE_STYLES: [LineStyle; 3] = [LineStyle::Dashed, LineStyle::DashDot, LineStyle::Dotted];

impl LineStyle {
    /// `(dash, gap)` lengths in backend pixels.
    ///
    /// Plotters only draws uniform dashes, so dash-dot is rendered as a long
    /// dash with a tight gap to keep it visually distinct from plain dashes.
    pub fn dash_pattern(self) -> (u32, u32) {
        match self {
            LineStyle::Dashed => (10, 6),
            LineStyle::DashDot => (14, 3),
            LineStyle::Dotted => (2, 4),
        }
    }
}

/// Resolved style for one forecast series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    pub rgb: (u8, u8, u8),
    pub line: LineStyle,
    pub glyph: char,
}

impl SeriesStyle {
    pub fn color(&self) -> RGBColor {
        RGBColor(self.rgb.0, self.rgb.1, self.rgb.2)
    }
}

/// Style for the forecast at insertion index `index`.
pub fn series_style(index: usize) -> SeriesStyle {
    let slot = index % PALETTE.len();
    SeriesStyle {
        rgb: PALETTE[slot],
        line: LINE_STYLES[index % LINE_STYLES.len()],
        glyph: GLYPHS[slot],
    }
}
