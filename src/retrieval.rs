//! Cost source trait for retrieval backends
//!
//! This module defines the `CostSource` trait that retrieval backends
//! implement. The pipeline only depends on this seam, so tests can feed it
//! canned responses and the AWS-backed client stays at the boundary.

use crate::error::Result;
use crate::types::{Granularity, RawCostResponse};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for cost-and-usage retrieval backends.
///
/// Implementations fetch cost data for `[start, end)` at the requested
/// granularity, grouped by service with the unblended-cost metric. Calls
/// are synchronous from the pipeline's point of view; a transport or auth
/// failure surfaces as [`crate::error::CedashError::Retrieval`].
#[async_trait]
pub trait CostSource: Send + Sync {
    /// Fetch raw cost data for the given window and bucket size.
    async fn get_cost_and_usage(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    ) -> Result<RawCostResponse>;
}
