//! Core domain types for cedash
//!
//! This module contains the fundamental types used throughout the cedash
//! library. These types provide strong typing for common concepts like
//! service names, reporting dates and the raw Cost Explorer response shape.

use crate::error::{CedashError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The billing metric requested from Cost Explorer
pub const UNBLENDED_COST: &str = "UnblendedCost";

/// Strongly-typed AWS service name wrapper
///
/// This ensures service names are consistently handled throughout the
/// application and provides type safety when working with the per-service
/// dimension of the cost data.
///
/// # Examples
/// ```
/// use cedash::types::ServiceName;
///
/// let service = ServiceName::new("Amazon Elastic Compute Cloud - Compute");
/// assert!(service.as_str().starts_with("Amazon"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServiceName(String);

impl ServiceName {
    /// Create a new ServiceName from any string-like type
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Daily date used as the row key of pivoted cost tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DailyDate(NaiveDate);

impl DailyDate {
    /// Create a new DailyDate
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the inner NaiveDate
    pub fn inner(&self) -> &NaiveDate {
        &self.0
    }

    /// Parse from a YYYY-MM-DD string as returned by Cost Explorer
    pub fn parse(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CedashError::InvalidDate(s.to_string()))
    }

    /// Format with a strftime pattern
    pub fn format(&self, fmt: &str) -> String {
        self.0.format(fmt).to_string()
    }
}

impl fmt::Display for DailyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Size of the time bucket requested from Cost Explorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    /// One calendar day per bucket
    Daily,
    /// One calendar month per bucket
    Monthly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "DAILY"),
            Self::Monthly => write!(f, "MONTHLY"),
        }
    }
}

/// A single (date, service, cost) cost observation
///
/// Produced by the normalizer, one per (time bucket, service) pair present
/// in the raw response with cost > 0. Transient within one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Start date of the time bucket
    pub date: DailyDate,
    /// AWS service the cost is attributed to
    pub service: ServiceName,
    /// Cost in USD, strictly positive
    pub cost: f64,
}

/// Raw `GetCostAndUsage` response as returned by the Cost Explorer API
///
/// Mirrors the wire shape: a sequence of time-period entries, each carrying
/// per-service groups with cost amounts expressed as numeric strings. The
/// core only reads this structure; it is produced at the retrieval boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCostResponse {
    /// One entry per time bucket in the requested window
    #[serde(rename = "ResultsByTime", default)]
    pub results_by_time: Vec<ResultByTime>,
}

/// Costs for a single time bucket, grouped by service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultByTime {
    /// Bucket bounds; `start` is the bucket's row key
    #[serde(rename = "TimePeriod")]
    pub time_period: TimePeriod,
    /// Per-service cost groups
    #[serde(rename = "Groups", default)]
    pub groups: Vec<CostGroup>,
}

/// Start/end of a time bucket in YYYY-MM-DD form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimePeriod {
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "End")]
    pub end: String,
}

/// One service's costs within a time bucket
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostGroup {
    /// Group-by keys; for SERVICE grouping this holds the service name
    #[serde(rename = "Keys", default)]
    pub keys: Vec<String>,
    /// Metric name → value, keyed by [`UNBLENDED_COST`]
    #[serde(rename = "Metrics", default)]
    pub metrics: HashMap<String, MetricValue>,
}

/// A metric amount with its currency unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricValue {
    /// Numeric string, e.g. "12.3456789"
    #[serde(rename = "Amount")]
    pub amount: String,
    /// Currency unit, e.g. "USD"
    #[serde(rename = "Unit")]
    pub unit: String,
}

/// Projected full-month cost derived from a partial daily series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Estimated total cost in USD
    pub amount: f64,
    /// Number of days the mean daily rate was extrapolated over
    pub days: u32,
}
