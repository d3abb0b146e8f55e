use thiserror::Error;

/// Errors raised by the address layer.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("seed dataset is malformed: {0}")]
    Dataset(#[from] serde_json::Error),
}
