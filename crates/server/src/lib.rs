//! CEP Server - HTTP services for address storage and suggestions
//!
//! This crate hosts the two services of the CEP matching demo:
//!
//! - **Provider**: keeps address records in memory and serves them over REST
//! - **Consumer**: looks an address up at the provider and returns scored
//!   suggestions of neighbouring addresses
//!
//! Both share configuration, error mapping, and middleware (request id
//! tracking, structured request logging, timeouts, CORS).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::{ServerConfig, ServiceRole};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load(ServiceRole::Provider)?;
//!     server::start_provider(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Provider
//!
//! - `GET /addresses` - All records
//! - `GET /addresses/available` - Records with a postal code
//! - `GET /addresses/{id}` - One record, 404 if absent
//! - `POST /addresses` - Store a record (requires `cep`)
//! - `GET /health` - Liveness probe
//!
//! ## Consumer
//!
//! - `GET /suggestions/{address_id}` - Scored suggestions for an address
//! - `GET /health` - Liveness probe

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{ServerConfig, ServiceRole};
pub use error::{ServerError, ServerResult};
pub use server::{build_consumer_router, build_provider_router, start_consumer, start_provider};
pub use state::{ConsumerState, ProviderState};
