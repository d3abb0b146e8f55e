use crate::error::AddressError;
use crate::record::AddressRecord;

/// Dataset loaded into the provider at startup.
pub const SEED_JSON: &str = include_str!("../data/addresses.json");

/// Parse the bundled dataset.
///
/// Identifiers in the file are ignored; the repository assigns them on insert.
pub fn seed_records() -> Result<Vec<AddressRecord>, AddressError> {
    Ok(serde_json::from_str(SEED_JSON)?)
}
