//! CEP address layer.
//!
//! Holds the postal-address records served by the provider and the in-memory
//! repository they live in.
//!
//! ## What we do
//!
//! - [`AddressRecord`] mirrors the provider's wire format (Portuguese JSON
//!   keys, every field optional and loosely typed on input)
//! - [`AddressRepository`] keeps records in insertion order and answers
//!   lookups with a linear scan
//! - [`seed_records`] parses the dataset bundled with the crate
//!
//! ## Invariants worth knowing
//!
//! - Identifiers are assigned by the repository (`id = count at insert`) and
//!   never change afterwards
//! - A record is "available" iff its `cep` is non-empty
//! - The repository has no lock of its own; mutation needs `&mut self`

mod dataset;
mod error;
mod lenient;
mod record;
mod repository;

pub use crate::dataset::{seed_records, SEED_JSON};
pub use crate::error::AddressError;
pub use crate::record::AddressRecord;
pub use crate::repository::AddressRepository;
