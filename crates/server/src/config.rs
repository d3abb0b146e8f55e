use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Environment variable the original deployment used to point the consumer at
/// the provider. Takes precedence over `provider_url` from any other source.
pub const PROVIDER_URL_ENV: &str = "API_HOST";

/// Which of the two services a configuration is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRole {
    Provider,
    Consumer,
}

impl ServiceRole {
    /// Base name of the optional config file (`provider.toml`, `consumer.yaml`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ServiceRole::Provider => "provider",
            ServiceRole::Consumer => "consumer",
        }
    }

    pub fn env_prefix(self) -> &'static str {
        match self {
            ServiceRole::Provider => "CEP_PROVIDER",
            ServiceRole::Consumer => "CEP_CONSUMER",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            ServiceRole::Provider => 8081,
            ServiceRole::Consumer => 8080,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Inbound request timeout in seconds. Outbound calls have none.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Base URL of the provider (consumer only)
    #[serde(default = "default_provider_url")]
    pub provider_url: String,

    /// Load the bundled dataset at startup (provider only)
    #[serde(default = "default_true")]
    pub seed_on_start: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            provider_url: default_provider_url(),
            seed_on_start: default_true(),
        }
    }
}

impl ServerConfig {
    /// Defaults for the given service.
    pub fn for_role(role: ServiceRole) -> Self {
        Self {
            port: role.default_port(),
            ..Self::default()
        }
    }

    /// Load configuration from config files and environment variables
    pub fn load(role: ServiceRole) -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .set_default("port", i64::from(role.default_port()))?
            // Load from file if exists
            .add_source(config::File::with_name(role.name()).required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix(role.env_prefix())
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;

        if let Ok(url) = std::env::var(PROVIDER_URL_ENV) {
            if !url.trim().is_empty() {
                config.provider_url = url;
            }
        }

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    ServiceRole::Provider.default_port()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_provider_url() -> String {
    "http://localhost:8081".to_string()
}
