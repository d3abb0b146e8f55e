//! CEP consumer - address suggestions backed by the provider.

use server::{ServerConfig, ServiceRole};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load(ServiceRole::Consumer)?;
    server::start_consumer(config).await?;

    Ok(())
}
