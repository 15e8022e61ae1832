//! Terminal stacked-bar charts for pivoted cost series
//!
//! Renders one horizontal bar per time bucket, split into per-service
//! segments with a rotating color palette, followed by a legend. Colors
//! respect the NO_COLOR environment variable.

use crate::pivot::PivotedSeries;
use crate::types::Granularity;
use colored::{Color, Colorize};
use std::fmt::Write;

/// Bar segment character (ASCII)
const BAR_SEGMENT: &str = "#";

/// Legend swatch character
const SWATCH: &str = "##";

/// Rotating per-service color palette
const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
    Color::BrightCyan,
    Color::BrightGreen,
];

/// Default chart width in columns
const DEFAULT_WIDTH: usize = 80;

/// Stacked-bar chart renderer
pub struct ChartRenderer {
    width: usize,
    /// Whether to use colored output (respects NO_COLOR environment variable)
    colored_output: bool,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer {
    /// Create a renderer with the default width
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            colored_output: std::env::var("NO_COLOR").is_err(),
        }
    }

    /// Override the chart width
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(40);
        self
    }

    /// Enable or disable colored output
    pub fn with_color(mut self, colored_output: bool) -> Self {
        self.colored_output = colored_output;
        self
    }

    /// Render a stacked chart for one pivoted series
    ///
    /// An empty series renders a single diagnostic note line instead of a
    /// chart; it is never an error.
    pub fn render(&self, title: &str, series: &PivotedSeries, granularity: Granularity) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{title}");

        if series.is_empty() {
            let _ = writeln!(output, "  (no data to display)");
            return output;
        }

        let label_fmt = match granularity {
            Granularity::Daily => "%m-%d",
            Granularity::Monthly => "%Y-%m",
        };

        let max_total = (0..series.num_rows())
            .map(|row| series.row_total(row))
            .fold(0.0_f64, f64::max);

        // label + space + bar + space + amount
        let label_width = match granularity {
            Granularity::Daily => 5,
            Granularity::Monthly => 7,
        };
        let amount_width = 12;
        let bar_width = self.width.saturating_sub(label_width + amount_width + 2);

        for row in 0..series.num_rows() {
            let label = series.dates()[row].format(label_fmt);
            let total = series.row_total(row);
            let _ = write!(output, "{label:>label_width$} ");

            if max_total > 0.0 {
                for col in 0..series.num_cols() {
                    let value = series.value(row, col);
                    let segment_len = ((value / max_total) * bar_width as f64).round() as usize;
                    if segment_len > 0 {
                        let _ = write!(output, "{}", self.segment(segment_len, col));
                    }
                }
            }

            let _ = writeln!(output, " ${total:.2}");
        }

        let _ = writeln!(output);
        for (col, service) in series.services().iter().enumerate() {
            let _ = writeln!(output, "  {} {service}", self.swatch(col));
        }

        output
    }

    fn segment(&self, len: usize, col: usize) -> String {
        let segment = BAR_SEGMENT.repeat(len);
        if self.colored_output {
            segment.color(PALETTE[col % PALETTE.len()]).to_string()
        } else {
            segment
        }
    }

    fn swatch(&self, col: usize) -> String {
        if self.colored_output {
            SWATCH.color(PALETTE[col % PALETTE.len()]).to_string()
        } else {
            SWATCH.to_string()
        }
    }
}
