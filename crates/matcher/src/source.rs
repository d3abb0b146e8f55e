use address::AddressRecord;
use async_trait::async_trait;

use crate::types::{Lookup, MatchError};

/// Where the matcher gets its records from.
///
/// The production implementation is [`crate::ProviderClient`], which talks to
/// the provider over HTTP. Anything that can list available records and look
/// one up by id can stand in for it.
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Records with a non-empty postal code, in provider order.
    async fn available(&self) -> Result<Vec<AddressRecord>, MatchError>;

    /// Fetch one record by identifier.
    async fn lookup(&self, id: u64) -> Lookup;

    /// Submit a new record. The assigned identifier is not reported back.
    async fn create(&self, record: &AddressRecord) -> Result<(), MatchError>;
}
