/**
 * socialnet Server Entry Point
 *
 * Loads configuration, selects the credential store and serves the auth
 * API over HTTP.
 */

use socialnet::backend::server::{config::load_config, create_app};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with INFO level unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Server initialization started");

    let config = load_config().inspect_err(|e| tracing::error!("Invalid configuration: {}", e))?;
    let addr = config.bind_address();

    // Create the Axum app
    let app = create_app(config).await?;

    // Run the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
