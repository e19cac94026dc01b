//! # shop-server
//!
//! Entry point: tracing, configuration, then serve.

use tracing::info;

use scalecars_shop_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    scalecars_shop_server::init_tracing();

    info!("Starting Scale Cars shop server...");

    let config = ServerConfig::load()?;
    info!(
        addr = %config.socket_addr(),
        currency = %config.currency_symbol,
        "Configuration loaded"
    );

    scalecars_shop_server::serve(config).await?;
    Ok(())
}
