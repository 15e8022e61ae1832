//! Month-end spend projection
//!
//! Projects a full-month cost from a partial daily series using a plain
//! mean-daily-rate extrapolation. This is deliberately naive: no
//! weekday/weekend seasonality and no trend fitting, just a rough,
//! responsive estimate for a dashboard.

use crate::error::{CedashError, Result};
use crate::pivot::PivotedSeries;
use crate::types::CostEstimate;
use chrono::{Datelike, NaiveDate};

/// Extrapolate a full-period cost from a daily series
///
/// Takes the arithmetic mean of the per-day totals across all rows and
/// multiplies it by `days_in_target_month`. The series must have been
/// pivoted at daily granularity; feeding a monthly table here is a caller
/// error and produces a meaningless number.
///
/// # Errors
///
/// Returns [`CedashError::InsufficientData`] when the series has no rows,
/// since the mean is undefined.
pub fn forecast_month(
    daily_series: &PivotedSeries,
    days_in_target_month: u32,
) -> Result<CostEstimate> {
    let rows = daily_series.num_rows();
    if rows == 0 {
        return Err(CedashError::InsufficientData);
    }

    let mean_daily = (0..rows)
        .map(|row| daily_series.row_total(row))
        .sum::<f64>()
        / rows as f64;

    Ok(CostEstimate {
        amount: mean_daily * f64::from(days_in_target_month),
        days: days_in_target_month,
    })
}

/// Number of days in the calendar month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    // Both dates are the first of a month, so the construction cannot fail
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap();
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();

    (next_first - first).num_days() as u32
}
