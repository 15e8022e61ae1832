//! Output formatting module for cedash
//!
//! This module provides formatters for displaying a pipeline run in
//! different formats:
//! - Table format for human-readable terminal output
//! - JSON format for machine-readable output and integration with other tools

use crate::chart::ChartRenderer;
use crate::error::Result;
use crate::pipeline::PipelineRun;
use crate::pivot::PivotedSeries;
use crate::types::{CostEstimate, Granularity};
use prettytable::{format, Cell, Row, Table};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format one pipeline run: both pivoted series plus the estimate
    fn format_run(&self, run: &PipelineRun) -> Result<String>;
}

/// Table formatter for human-readable output
///
/// Produces one ASCII table per series with a per-service column and a
/// per-bucket total, a bold TOTAL row, and the month-end estimate line.
pub struct TableFormatter;

impl TableFormatter {
    /// Format currency with dollar sign
    fn format_currency(amount: f64) -> String {
        format!("${amount:.2}")
    }

    fn format_series(heading: &str, series: &PivotedSeries) -> String {
        if series.is_empty() {
            return format!("{heading}\n  (no data to display)\n");
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        let mut titles = vec![Cell::new("Date").style_spec("b")];
        for service in series.services() {
            titles.push(Cell::new(service.as_str()).style_spec("b"));
        }
        titles.push(Cell::new("Total").style_spec("b"));
        table.set_titles(Row::new(titles));

        for row in 0..series.num_rows() {
            let mut cells = vec![Cell::new(&series.dates()[row].to_string())];
            for col in 0..series.num_cols() {
                cells.push(Cell::new(&Self::format_currency(series.value(row, col))));
            }
            cells.push(Cell::new(&Self::format_currency(series.row_total(row))));
            table.add_row(Row::new(cells));
        }

        let mut totals = vec![Cell::new("TOTAL").style_spec("b")];
        for col in 0..series.num_cols() {
            let column_total: f64 = (0..series.num_rows()).map(|row| series.value(row, col)).sum();
            totals.push(Cell::new(&Self::format_currency(column_total)).style_spec("b"));
        }
        totals.push(Cell::new(&Self::format_currency(series.total())).style_spec("b"));
        table.add_row(Row::new(totals));

        format!("{heading}\n{table}")
    }

    fn format_estimate(estimate: Option<&CostEstimate>) -> String {
        match estimate {
            Some(estimate) => format!(
                "Estimated Monthly Cost: {} (mean daily rate over {} days)",
                Self::format_currency(estimate.amount),
                estimate.days
            ),
            None => "Estimated Monthly Cost: n/a (no daily data in window)".to_string(),
        }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_run(&self, run: &PipelineRun) -> Result<String> {
        Ok(format!(
            "{}\n{}\n{}",
            Self::format_series("Daily cost by service", &run.daily),
            Self::format_series("Monthly cost by service", &run.monthly),
            Self::format_estimate(run.estimate.as_ref()),
        ))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_run(&self, run: &PipelineRun) -> Result<String> {
        Ok(serde_json::to_string_pretty(run)?)
    }
}

/// Get the appropriate formatter based on output type
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}

/// Render a full pipeline run for the terminal
///
/// JSON output is tables-and-estimate only; human output prepends the two
/// stacked charts unless charts are disabled.
pub fn render_run(run: &PipelineRun, json: bool, show_chart: bool) -> Result<String> {
    let mut output = String::new();

    if !json && show_chart {
        let renderer = ChartRenderer::new();
        output.push_str(&renderer.render("Daily cost by service", &run.daily, Granularity::Daily));
        output.push('\n');
        output.push_str(&renderer.render(
            "Monthly cost by service",
            &run.monthly,
            Granularity::Monthly,
        ));
        output.push('\n');
    }

    output.push_str(&get_formatter(json).format_run(run)?);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pivot::pivot;
    use crate::types::{DailyDate, Observation, ServiceName};

    fn obs(date: &str, service: &str, cost: f64) -> Observation {
        Observation {
            date: DailyDate::parse(date).unwrap(),
            service: ServiceName::new(service),
            cost,
        }
    }

    fn sample_run() -> PipelineRun {
        PipelineRun {
            daily: pivot(&[
                obs("2024-01-01", "AWS Lambda", 10.0),
                obs("2024-01-02", "AWS Lambda", 10.0),
            ]),
            monthly: pivot(&[obs("2024-01-01", "AWS Lambda", 300.0)]),
            estimate: Some(CostEstimate {
                amount: 310.0,
                days: 31,
            }),
        }
    }

    #[test]
    fn test_table_format_includes_sections_and_estimate() {
        let output = TableFormatter.format_run(&sample_run()).unwrap();
        assert!(output.contains("Daily cost by service"));
        assert!(output.contains("Monthly cost by service"));
        assert!(output.contains("AWS Lambda"));
        assert!(output.contains("$10.00"));
        assert!(output.contains("Estimated Monthly Cost: $310.00"));
    }

    #[test]
    fn test_table_format_totals_row() {
        let output = TableFormatter.format_run(&sample_run()).unwrap();
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$20.00"));
    }

    #[test]
    fn test_table_format_empty_series_note() {
        let run = PipelineRun {
            daily: pivot(&[]),
            monthly: pivot(&[]),
            estimate: None,
        };
        let output = TableFormatter.format_run(&run).unwrap();
        assert!(output.contains("(no data to display)"));
        assert!(output.contains("Estimated Monthly Cost: n/a"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let output = JsonFormatter.format_run(&sample_run()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["estimate"]["days"], 31);
        assert_eq!(value["daily"]["services"][0], "AWS Lambda");
    }
}
