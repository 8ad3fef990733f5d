mod config;
mod inventory;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::PlaygroundConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PlaygroundConfig::from_env()?;
    info!("connecting to {}", config.client.host);

    let client = plesk::create_client(config.client);
    inventory::print_inventory(&client, config.domain.as_deref()).await
}
