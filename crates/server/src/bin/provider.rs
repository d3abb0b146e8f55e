//! CEP provider - in-memory address records over REST.

use server::{ServerConfig, ServiceRole};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load(ServiceRole::Provider)?;
    server::start_provider(config).await?;

    Ok(())
}
