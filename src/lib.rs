//! Workspace umbrella crate for the CEP matching services.
//!
//! Re-exports the address layer and the matcher so callers can work with a
//! single dependency, and adds in-process matching over a local
//! [`AddressRepository`] for callers that hold the records themselves and do
//! not need the provider's HTTP API.
//!
//! ```
//! use cepmatch::{AddressRepository, suggest_for_id};
//!
//! let repo = AddressRepository::with_seed_data().unwrap();
//! let suggestions = suggest_for_id(&repo, 0).unwrap();
//! assert!(suggestions.suggestions.iter().all(|s| s.cep.id != 0));
//! ```

pub use address::{AddressError, AddressRecord, AddressRepository, seed_records};
pub use matcher::{
    AddressSource, BASE_SCORE, ELIGIBILITY, Lookup, MatchError, Matcher, Predicate,
    ProviderClient, Suggestion, Suggestions, is_eligible, score, suggest,
};

/// Errors from in-process matching.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SuggestError {
    #[error("no address with id {0}")]
    UnknownAddress(u64),
}

/// Score the repository's available records against `target`.
pub fn suggest_local(repo: &AddressRepository, target: &AddressRecord) -> Suggestions {
    let available = repo.available();
    let suggestions = suggest(target, &available);
    tracing::debug!(
        target_id = target.id,
        candidates = available.len(),
        eligible = suggestions.len(),
        "local suggestions"
    );
    suggestions.into()
}

/// Look `id` up in the repository and score its neighbours.
pub fn suggest_for_id(repo: &AddressRepository, id: u64) -> Result<Suggestions, SuggestError> {
    let target = repo.get_by_id(id).ok_or(SuggestError::UnknownAddress(id))?;
    Ok(suggest_local(repo, target))
}
