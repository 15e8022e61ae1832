//! cedash - AWS cost dashboard for the terminal
//!
//! This library provides functionality to:
//! - Fetch cost-and-usage data from the AWS Cost Explorer API
//! - Normalize and pivot it into dense per-service time series
//! - Render stacked cost charts and tables in the terminal
//! - Project the current month's total spend from recent daily spend
//!
//! # Examples
//!
//! ```no_run
//! use cedash::{
//!     cost_explorer::CostExplorerSource,
//!     pipeline::{Pipeline, WindowConfig},
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> cedash::Result<()> {
//!     let source = Arc::new(CostExplorerSource::new(None, None).await);
//!     let pipeline = Pipeline::new(source, WindowConfig::default());
//!
//!     let run = pipeline.run(chrono::Local::now().date_naive()).await?;
//!     if let Some(estimate) = run.estimate {
//!         println!("Estimated monthly cost: ${:.2}", estimate.amount);
//!     }
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod cli;
pub mod cost_explorer;
pub mod error;
pub mod forecast;
pub mod monitor;
pub mod normalizer;
pub mod output;
pub mod pipeline;
pub mod pivot;
pub mod retrieval;
pub mod types;

// Re-export commonly used types
pub use error::{CedashError, Result};
pub use types::{CostEstimate, DailyDate, Granularity, Observation, RawCostResponse, ServiceName};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
