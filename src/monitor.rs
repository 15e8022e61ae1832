//! Scheduled refresh loop
//!
//! Drives the pipeline on a fixed cadence (reference: every 4 hours),
//! re-rendering the dashboard after each run. The pipeline itself stays a
//! pure function of the as-of date; this module owns the process lifetime,
//! the tick timer and Ctrl-C shutdown. A failed run is logged and does not
//! affect the next tick.

use crate::error::Result;
use crate::output::render_run;
use crate::pipeline::Pipeline;
use chrono::Local;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

/// Periodic dashboard refresh driver
pub struct Monitor {
    pipeline: Pipeline,
    refresh_interval: Duration,
    json: bool,
    show_chart: bool,
}

impl Monitor {
    /// Create a new Monitor around a pipeline
    pub fn new(pipeline: Pipeline, refresh_interval: Duration, json: bool, show_chart: bool) -> Self {
        Self {
            pipeline,
            refresh_interval,
            json,
            show_chart,
        }
    }

    /// Run the refresh loop until Ctrl-C
    ///
    /// The first run happens immediately; subsequent runs fire once per
    /// interval. Ticks are serialized, so runs never overlap.
    pub async fn run(&self) -> Result<()> {
        let mut ticker = interval(self.refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "Refreshing every {}s | Press Ctrl+C to exit",
            self.refresh_interval.as_secs()
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // Recompute per tick so runs crossing midnight pick up the new date
                    let as_of = Local::now().date_naive();
                    match self.pipeline.run(as_of).await {
                        Ok(run) => println!("{}", render_run(&run, self.json, self.show_chart)?),
                        Err(e) => error!("Refresh failed, will retry on next tick: {e}"),
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutting down");
                    break;
                }
            }
        }

        Ok(())
    }
}
