use std::sync::Arc;

use address::AddressRecord;
use tracing::{debug, info};

use crate::client::ProviderClient;
use crate::eligibility::is_eligible;
use crate::source::AddressSource;
use crate::types::{Lookup, MatchError, Suggestion, Suggestions};


/// Score of a candidate whose ordering value equals the target's.
pub const BASE_SCORE: i64 = 100;

/// `BASE_SCORE - |candidate.street_order - target.street_order|`, unclamped.
pub fn score(candidate: &AddressRecord, target: &AddressRecord) -> i64 {
    let distance = candidate.street_order.abs_diff(target.street_order);
    BASE_SCORE.saturating_sub_unsigned(distance)
}

/// Score every eligible candidate, preserving input order.
pub fn suggest(target: &AddressRecord, candidates: &[AddressRecord]) -> Vec<Suggestion> {
    candidates
        .iter()
        .filter(|candidate| is_eligible(candidate, target))
        .map(|candidate| Suggestion {
            score: score(candidate, target),
            cep: candidate.clone(),
        })
        .collect()
}

/// Matcher for suggesting neighbouring addresses.
#[derive(Clone)]
pub struct Matcher {
    source: Arc<dyn AddressSource>,
}

impl Matcher {
    pub fn new<S: AddressSource + 'static>(source: S) -> Self {
        Self::with_source_arc(Arc::new(source))
    }

    /// Construct a matcher from a shared source handle.
    pub fn with_source_arc(source: Arc<dyn AddressSource>) -> Self {
        Self { source }
    }

    /// Matcher backed by the provider at `base_url`.
    pub fn from_provider_url(base_url: impl Into<String>) -> Self {
        Self::new(ProviderClient::new(base_url))
    }

    /// Fetch the available records and score them against `target`.
    ///
    /// A failed fetch is returned as-is; there is no partial result.
    pub async fn suggestions(&self, target: &AddressRecord) -> Result<Suggestions, MatchError> {
        let available = self.source.available().await?;
        let suggestions = suggest(target, &available);

        info!(
            target_id = target.id,
            candidates = available.len(),
            eligible = suggestions.len(),
            "computed suggestions"
        );

        Ok(suggestions.into())
    }

    pub async fn lookup(&self, id: u64) -> Lookup {
        self.source.lookup(id).await
    }

    /// Fetch one record; any failure reads as absent.
    pub async fn get_cep_by_id(&self, id: u64) -> Option<AddressRecord> {
        match self.lookup(id).await {
            Lookup::Failed(err) => {
                debug!(id, error = %err, "lookup failed, treating as absent");
                None
            }
            other => other.into_option(),
        }
    }

    /// Submit a record to the provider. Ignoring the result is allowed.
    pub async fn create_record(&self, record: &AddressRecord) -> Result<(), MatchError> {
        self.source.create(record).await
    }
}
