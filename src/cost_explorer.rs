//! AWS Cost Explorer retrieval backend
//!
//! Wraps the `aws-sdk-costexplorer` client behind the [`CostSource`] seam.
//! Queries are grouped by the SERVICE dimension with the UnblendedCost
//! metric, matching what the rest of the pipeline expects, and the SDK
//! response is converted into the crate's [`RawCostResponse`] mirror at
//! this boundary.

use crate::error::{CedashError, Result};
use crate::retrieval::CostSource;
use crate::types::{
    CostGroup, Granularity, MetricValue, RawCostResponse, ResultByTime, TimePeriod,
};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_costexplorer::error::DisplayErrorContext;
use aws_sdk_costexplorer::types::{DateInterval, GroupDefinition, GroupDefinitionType};
use aws_sdk_costexplorer::Client;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, info};

/// Dimension used to group costs per service
const SERVICE_DIMENSION: &str = "SERVICE";

/// Cost Explorer backed [`CostSource`]
pub struct CostExplorerSource {
    client: Client,
}

impl CostExplorerSource {
    /// Create a source from the default AWS credential chain, optionally
    /// pinned to a named profile and/or region
    pub async fn new(profile: Option<&str>, region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = profile {
            info!("Using AWS profile: {profile}");
            loader = loader.profile_name(profile);
        }
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let config = loader.load().await;

        Self {
            client: Client::new(&config),
        }
    }

    /// Create a source from an already-configured SDK client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CostSource for CostExplorerSource {
    async fn get_cost_and_usage(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    ) -> Result<RawCostResponse> {
        debug!("Querying Cost Explorer: {start} to {end} at {granularity}");

        let time_period = DateInterval::builder()
            .start(start.format("%Y-%m-%d").to_string())
            .end(end.format("%Y-%m-%d").to_string())
            .build()
            .map_err(|e| CedashError::Retrieval(e.to_string()))?;

        let response = self
            .client
            .get_cost_and_usage()
            .time_period(time_period)
            .granularity(match granularity {
                Granularity::Daily => aws_sdk_costexplorer::types::Granularity::Daily,
                Granularity::Monthly => aws_sdk_costexplorer::types::Granularity::Monthly,
            })
            .group_by(
                GroupDefinition::builder()
                    .r#type(GroupDefinitionType::Dimension)
                    .key(SERVICE_DIMENSION)
                    .build(),
            )
            .metrics(crate::types::UNBLENDED_COST)
            .send()
            .await
            .map_err(|e| CedashError::Retrieval(format!("{}", DisplayErrorContext(&e))))?;

        let mut results_by_time = Vec::new();

        for result in response.results_by_time() {
            let time_period = result.time_period().ok_or_else(|| {
                CedashError::MalformedResponse("result without a time period".to_string())
            })?;

            let groups = result
                .groups()
                .iter()
                .map(|group| {
                    let mut metrics = HashMap::new();
                    for (name, value) in group.metrics().into_iter().flatten() {
                        metrics.insert(
                            name.clone(),
                            MetricValue {
                                amount: value.amount().unwrap_or_default().to_string(),
                                unit: value.unit().unwrap_or("USD").to_string(),
                            },
                        );
                    }
                    CostGroup {
                        keys: group.keys().to_vec(),
                        metrics,
                    }
                })
                .collect();

            results_by_time.push(ResultByTime {
                time_period: TimePeriod {
                    start: time_period.start().to_string(),
                    end: time_period.end().to_string(),
                },
                groups,
            });
        }

        debug!(
            "Cost Explorer returned {} time buckets",
            results_by_time.len()
        );

        Ok(RawCostResponse { results_by_time })
    }
}
