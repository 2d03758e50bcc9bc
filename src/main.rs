use clap::Parser;
use dotenv::dotenv;
use tracing::warn;

use random_eats_backend::config::Config;
use random_eats_backend::controller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    if config.places_api_key().is_none() {
        warn!("Google Places API key not found. Set GOOGLE_PLACES_API_KEY or GOOGLE_API_KEY environment variable.");
    }

    let http_client = reqwest::Client::new();

    controller::serve(http_client, &config).await
}
