//! API route handlers
//!
//! Routes are organized by service:
//!
//! - `addresses`: provider endpoints over the address repository
//! - `suggestions`: consumer endpoint computing scored suggestions
//! - `health`: liveness probes for both services

pub mod addresses;
pub mod health;
pub mod suggestions;

use crate::error::ServerError;

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
