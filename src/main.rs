//! Hurricane Lens host
//!
//! Loads the storm feed once, applies the configured year and storm, and
//! prints the derived dashboard view as JSON on stdout.

use dotenvy::dotenv;
use hurricane_lens::config::Config;
use hurricane_lens::logging;
use hurricane_lens::services::{feed_from_config, load_storm_data};
use hurricane_lens::{DashboardView, StormStore};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env()?;
    info!(environment = %config.environment, "Starting Hurricane Lens");
    info!(feed = %config.feed, year = config.initial_year, "Configuration");

    let store = StormStore::from_config(&config);
    let feed = feed_from_config(&config)?;

    // A failed load leaves the store empty; the view still renders
    if let Err(e) = load_storm_data(feed.as_ref(), &store).await {
        error!(error = %e, "Continuing with an empty dataset");
    }

    let view = DashboardView::derive(&store.snapshot());
    info!(
        year = view.year,
        storms = view.stats.total_storms,
        strongest_wind_kt = view.stats.strongest_wind_kt,
        "Dashboard derived"
    );

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
