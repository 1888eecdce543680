use http_server_time::cli::Cli;
use http_server_time::server;
use http_server_time::utils::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let config = Cli::parse_config();

    // Initialize logging based on environment
    logging::init_logging()?;

    tracing::info!("Starting time server on {}", config.bind_addr);

    if let Err(e) = server::run(config).await {
        tracing::error!("Failed to run time server: {}", e);
        return Err(e.into());
    }

    Ok(())
}
