use anyhow::Context;
use scrobble_checker::{Checker, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        user = %config.lastfm.user,
        threshold_hours = config.staleness_threshold.num_hours(),
        notifications = config.has_notifications(),
        "Starting scrobble freshness check"
    );

    let checker = Checker::from_config(&config).context("Failed to initialize checker")?;
    let report = checker.run().await;

    tracing::info!(status = %report.result.status, "Scrobble freshness check complete");

    Ok(())
}
