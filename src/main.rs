//! cedash - AWS cost dashboard for the terminal

use cedash::{
    cli::{parse_as_of, Cli},
    cost_explorer::CostExplorerSource,
    error::Result,
    monitor::Monitor,
    output::render_run,
    pipeline::{Pipeline, WindowConfig},
};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The --quiet flag should override RUST_LOG.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("warn")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cedash=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let source = Arc::new(CostExplorerSource::new(cli.profile.as_deref(), cli.region.as_deref()).await);
    let windows = WindowConfig {
        daily_window_days: cli.daily_window_days,
        monthly_window_days: cli.monthly_window_days,
    };
    let pipeline = Pipeline::new(source, windows);

    let show_chart = !cli.no_chart && is_terminal::is_terminal(std::io::stdout());

    if cli.watch {
        info!("Starting watch mode");
        let monitor = Monitor::new(
            pipeline,
            Duration::from_secs(cli.interval_hours * 3600),
            cli.json,
            show_chart,
        );
        monitor.run().await?;
    } else {
        let as_of = match &cli.as_of {
            Some(s) => parse_as_of(s)?,
            None => chrono::Local::now().date_naive(),
        };
        info!("Running cost report as of {as_of}");

        let run = pipeline.run(as_of).await?;
        println!("{}", render_run(&run, cli.json, show_chart)?);
    }

    Ok(())
}
