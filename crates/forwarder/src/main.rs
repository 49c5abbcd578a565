use tracing::info;

use alert_forwarder::{config::Config, metrics, server::Server, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load()?;
    info!("Loaded configuration: {:?}", config);

    // Register prometheus metrics once for the process lifetime
    metrics::register_metrics();

    // Initialize server
    let server = Server::new(&config);

    // Start server
    info!("Starting server on {}", config.server.addr);
    server.start(&config.server.addr).await?;

    Ok(())
}
