//! Normalization of raw Cost Explorer responses
//!
//! Flattens the nested time-period/group structure into a uniform list of
//! [`Observation`]s, parsing the numeric-string amounts and discarding
//! entries with non-positive cost so that downstream tables never carry
//! zero rows for services that billed nothing.

use crate::error::{CedashError, Result};
use crate::types::{DailyDate, Observation, RawCostResponse, ServiceName, UNBLENDED_COST};

/// Flatten a raw response into positive-cost observations
///
/// One observation is emitted per (time bucket, service) pair whose parsed
/// cost is strictly greater than zero. An empty response yields an empty
/// vector, not an error.
///
/// # Errors
///
/// Returns [`CedashError::MalformedResponse`] when a group is missing its
/// service key or the unblended-cost metric, or when a cost amount is not
/// parseable as a decimal, and [`CedashError::InvalidDate`] when a bucket
/// start date is not YYYY-MM-DD.
pub fn normalize(raw: &RawCostResponse) -> Result<Vec<Observation>> {
    let mut observations = Vec::new();

    for result in &raw.results_by_time {
        let date = DailyDate::parse(&result.time_period.start)?;

        for group in &result.groups {
            let service = group.keys.first().ok_or_else(|| {
                CedashError::MalformedResponse(format!(
                    "group without a service key in bucket {date}"
                ))
            })?;

            let metric = group.metrics.get(UNBLENDED_COST).ok_or_else(|| {
                CedashError::MalformedResponse(format!(
                    "no {UNBLENDED_COST} metric for {service} in bucket {date}"
                ))
            })?;

            let cost: f64 = metric.amount.parse().map_err(|_| {
                CedashError::MalformedResponse(format!(
                    "unparseable cost amount {:?} for {service} in bucket {date}",
                    metric.amount
                ))
            })?;

            if cost > 0.0 {
                observations.push(Observation {
                    date,
                    service: ServiceName::new(service.clone()),
                    cost,
                });
            }
        }
    }

    Ok(observations)
}
