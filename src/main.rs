use portfolio_sandbox::api::{run_server, AppState};
use portfolio_sandbox::config::AppConfig;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Setup Logging
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Portfolio Sandbox...");

    // Load Configuration
    let config = AppConfig::load()?;
    info!(
        "Loaded catalogs: {} coins, {} canned responses",
        config.market.coins.len(),
        config.chat.responses.len()
    );

    // Create App State and serve
    let app_state = Arc::new(AppState::new(config));

    info!("Initializing API Server...");
    run_server(app_state).await?;

    Ok(())
}
