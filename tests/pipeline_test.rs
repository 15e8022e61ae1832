//! Integration tests for the cedash pipeline
//!
//! Runs the full orchestration against an in-memory `CostSource` fake, so
//! the fetch → normalize → pivot → forecast path is exercised end to end
//! without touching AWS.

use async_trait::async_trait;
use cedash::{
    error::{CedashError, Result},
    pipeline::{Pipeline, WindowConfig},
    retrieval::CostSource,
    types::{Granularity, RawCostResponse},
};
use chrono::NaiveDate;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// In-memory cost source serving canned responses per granularity
struct FakeSource {
    daily: RawCostResponse,
    monthly: RawCostResponse,
    fail_retrieval: bool,
    calls: Mutex<Vec<(NaiveDate, NaiveDate, Granularity)>>,
}

impl FakeSource {
    fn new(daily: RawCostResponse, monthly: RawCostResponse) -> Self {
        Self {
            daily,
            monthly,
            fail_retrieval: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            daily: RawCostResponse::default(),
            monthly: RawCostResponse::default(),
            fail_retrieval: true,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CostSource for FakeSource {
    async fn get_cost_and_usage(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    ) -> Result<RawCostResponse> {
        self.calls.lock().unwrap().push((start, end, granularity));

        if self.fail_retrieval {
            return Err(CedashError::Retrieval("connection refused".to_string()));
        }

        Ok(match granularity {
            Granularity::Daily => self.daily.clone(),
            Granularity::Monthly => self.monthly.clone(),
        })
    }
}

fn response(entries: &[(&str, &[(&str, &str)])]) -> RawCostResponse {
    let results: Vec<_> = entries
        .iter()
        .map(|(start, groups)| {
            json!({
                "TimePeriod": { "Start": start, "End": start },
                "Groups": groups
                    .iter()
                    .map(|(service, amount)| {
                        json!({
                            "Keys": [service],
                            "Metrics": {
                                "UnblendedCost": { "Amount": amount, "Unit": "USD" }
                            }
                        })
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    serde_json::from_value(json!({ "ResultsByTime": results })).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn test_run_produces_tables_and_estimate() {
    // Two days of a single $10 service (spec scenario: 2x1 table, 30-day
    // month projects to $300)
    let daily = response(&[
        ("2024-06-10", &[("AWS Lambda", "10.00")]),
        ("2024-06-11", &[("AWS Lambda", "10.00")]),
    ]);
    let monthly = response(&[
        ("2024-05-01", &[("AWS Lambda", "250.00")]),
        ("2024-06-01", &[("AWS Lambda", "120.00")]),
    ]);

    let pipeline = Pipeline::new(
        Arc::new(FakeSource::new(daily, monthly)),
        WindowConfig::default(),
    );
    let run = pipeline.run(date("2024-06-15")).await.unwrap();

    assert_eq!(run.daily.num_rows(), 2);
    assert_eq!(run.daily.num_cols(), 1);
    assert_eq!(run.daily.value(0, 0), 10.00);
    assert_eq!(run.daily.value(1, 0), 10.00);

    assert_eq!(run.monthly.num_rows(), 2);

    // June has 30 days
    let estimate = run.estimate.unwrap();
    assert_eq!(estimate.days, 30);
    assert!((estimate.amount - 300.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_run_derives_both_windows() {
    let source = Arc::new(FakeSource::new(
        RawCostResponse::default(),
        RawCostResponse::default(),
    ));
    let pipeline = Pipeline::new(source.clone(), WindowConfig::default());
    pipeline.run(date("2024-06-15")).await.unwrap();

    let calls = source.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        (date("2024-06-08"), date("2024-06-15"), Granularity::Daily)
    );
    assert_eq!(
        calls[1],
        (date("2023-12-18"), date("2024-06-15"), Granularity::Monthly)
    );
}

#[tokio::test]
async fn test_run_honors_configured_windows() {
    let source = Arc::new(FakeSource::new(
        RawCostResponse::default(),
        RawCostResponse::default(),
    ));
    let windows = WindowConfig {
        daily_window_days: 14,
        monthly_window_days: 30,
    };
    let pipeline = Pipeline::new(source.clone(), windows);
    pipeline.run(date("2024-06-15")).await.unwrap();

    let calls = source.calls.lock().unwrap();
    assert_eq!(calls[0].0, date("2024-06-01"));
    assert_eq!(calls[1].0, date("2024-05-16"));
}

#[tokio::test]
async fn test_empty_responses_downgrade_estimate() {
    let pipeline = Pipeline::new(
        Arc::new(FakeSource::new(
            RawCostResponse::default(),
            RawCostResponse::default(),
        )),
        WindowConfig::default(),
    );

    let run = pipeline.run(date("2024-06-15")).await.unwrap();
    assert!(run.daily.is_empty());
    assert!(run.monthly.is_empty());
    assert!(run.estimate.is_none());
}

#[tokio::test]
async fn test_all_zero_service_column_is_absent() {
    // A service billing exactly "0.00" every day never reaches the table
    let daily = response(&[
        ("2024-06-10", &[("Amazon S3", "0.00"), ("AWS Lambda", "1.50")]),
        ("2024-06-11", &[("Amazon S3", "0.00"), ("AWS Lambda", "2.50")]),
    ]);

    let pipeline = Pipeline::new(
        Arc::new(FakeSource::new(daily, RawCostResponse::default())),
        WindowConfig::default(),
    );
    let run = pipeline.run(date("2024-06-15")).await.unwrap();

    assert_eq!(run.daily.num_cols(), 1);
    assert_eq!(run.daily.services()[0].as_str(), "AWS Lambda");
}

#[tokio::test]
async fn test_malformed_amount_aborts_run() {
    let daily = response(&[("2024-06-10", &[("AWS Lambda", "not-a-number")])]);

    let pipeline = Pipeline::new(
        Arc::new(FakeSource::new(daily, RawCostResponse::default())),
        WindowConfig::default(),
    );

    assert!(matches!(
        pipeline.run(date("2024-06-15")).await,
        Err(CedashError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_retrieval_failure_surfaces() {
    let pipeline = Pipeline::new(Arc::new(FakeSource::failing()), WindowConfig::default());

    assert!(matches!(
        pipeline.run(date("2024-06-15")).await,
        Err(CedashError::Retrieval(_))
    ));
}
