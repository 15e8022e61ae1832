//! Pipeline orchestration
//!
//! One invocation derives the two reporting windows from an as-of date,
//! fetches raw cost data for each, normalizes and pivots them, and runs the
//! month-end forecast on the daily series. Every invocation works on freshly
//! fetched data; nothing is persisted across runs.

use crate::error::{CedashError, Result};
use crate::forecast::{days_in_month, forecast_month};
use crate::normalizer::normalize;
use crate::pivot::{pivot, PivotedSeries};
use crate::retrieval::CostSource;
use crate::types::{CostEstimate, Granularity};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Reporting window lengths in trailing days
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Trailing-day window length for the daily-granularity series
    pub daily_window_days: i64,
    /// Trailing-day window length for the monthly-granularity series
    pub monthly_window_days: i64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            daily_window_days: 7,
            monthly_window_days: 180,
        }
    }
}

/// Output of one pipeline invocation
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    /// Trailing week of costs at daily granularity
    pub daily: PivotedSeries,
    /// Trailing six months of costs at monthly granularity
    pub monthly: PivotedSeries,
    /// Month-end projection, absent when there is no daily data
    pub estimate: Option<CostEstimate>,
}

/// Drives retrieval, normalization, pivoting and forecasting for one run
pub struct Pipeline {
    source: Arc<dyn CostSource>,
    windows: WindowConfig,
}

impl Pipeline {
    /// Create a new Pipeline over a retrieval backend
    pub fn new(source: Arc<dyn CostSource>, windows: WindowConfig) -> Self {
        Self { source, windows }
    }

    /// Run one aggregation-and-forecast pass as of the given date
    ///
    /// A retrieval failure or a malformed response aborts the invocation
    /// and surfaces to the caller; the pipeline never retries. A forecast
    /// that cannot be computed is downgraded to `estimate: None`.
    pub async fn run(&self, as_of: NaiveDate) -> Result<PipelineRun> {
        let daily_start = as_of - chrono::Duration::days(self.windows.daily_window_days);
        let monthly_start = as_of - chrono::Duration::days(self.windows.monthly_window_days);

        info!("Fetching daily costs: {daily_start} to {as_of}");
        let daily_raw = self
            .source
            .get_cost_and_usage(daily_start, as_of, Granularity::Daily)
            .await?;
        let daily = pivot(&normalize(&daily_raw)?);

        info!("Fetching monthly costs: {monthly_start} to {as_of}");
        let monthly_raw = self
            .source
            .get_cost_and_usage(monthly_start, as_of, Granularity::Monthly)
            .await?;
        let monthly = pivot(&normalize(&monthly_raw)?);

        let estimate = match forecast_month(&daily, days_in_month(as_of)) {
            Ok(estimate) => Some(estimate),
            Err(CedashError::InsufficientData) => {
                warn!("No daily data in window, skipping month-end estimate");
                None
            }
            Err(e) => return Err(e),
        };

        info!(
            "Pipeline run complete: {} daily rows, {} monthly rows",
            daily.num_rows(),
            monthly.num_rows()
        );

        Ok(PipelineRun {
            daily,
            monthly,
            estimate,
        })
    }
}
