//! CLI interface for cedash
//!
//! This module defines the command-line interface using clap. A bare
//! `cedash` renders the dashboard once and exits; `cedash --watch` keeps
//! refreshing on a fixed cadence.
//!
//! # Example
//!
//! ```bash
//! # One-shot dashboard against the default AWS profile
//! cedash
//!
//! # Named profile, wider daily window, machine-readable output
//! cedash --profile prod --daily-window-days 14 --json
//!
//! # Refresh every 4 hours
//! cedash --watch
//! ```

use crate::error::{CedashError, Result};
use chrono::NaiveDate;
use clap::Parser;

/// AWS cost dashboard: stacked service costs and month-end spend projection
#[derive(Parser, Debug, Clone)]
#[command(name = "cedash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// AWS profile name to use (defaults to the standard credential chain)
    #[arg(long, short = 'p', env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// AWS region override
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Report as of this date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Trailing window length in days for the daily chart
    #[arg(long, default_value = "7")]
    pub daily_window_days: i64,

    /// Trailing window length in days for the monthly chart
    #[arg(long, default_value = "180")]
    pub monthly_window_days: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the stacked charts, show tables only
    #[arg(long)]
    pub no_chart: bool,

    /// Keep running and refresh on an interval
    #[arg(long, short = 'w')]
    pub watch: bool,

    /// Refresh interval in hours for watch mode
    #[arg(long, default_value = "4")]
    pub interval_hours: u64,

    /// Only show warnings and errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Parse an --as-of date argument
pub fn parse_as_of(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CedashError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["cedash"]);
        assert_eq!(cli.daily_window_days, 7);
        assert_eq!(cli.monthly_window_days, 180);
        assert_eq!(cli.interval_hours, 4);
        assert!(!cli.watch);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_as_of() {
        assert_eq!(
            parse_as_of("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_as_of("June 1").is_err());
    }

    #[test]
    fn test_window_overrides() {
        let cli = Cli::parse_from([
            "cedash",
            "--daily-window-days",
            "14",
            "--monthly-window-days",
            "365",
        ]);
        assert_eq!(cli.daily_window_days, 14);
        assert_eq!(cli.monthly_window_days, 365);
    }
}
