//! Eligibility predicates.
//!
//! A candidate appears in the suggestions only if every predicate in
//! [`ELIGIBILITY`] holds for `(candidate, target)`.

use address::AddressRecord;

/// `(candidate, target) -> keep?`
pub type Predicate = fn(&AddressRecord, &AddressRecord) -> bool;

/// The target is never its own suggestion.
pub fn distinct_id(candidate: &AddressRecord, target: &AddressRecord) -> bool {
    candidate.id != target.id
}

/// Records sharing the target's postal code are excluded.
pub fn distinct_cep(candidate: &AddressRecord, target: &AddressRecord) -> bool {
    candidate.cep != target.cep
}

/// Candidates must lie on the target's street.
///
/// NOTE: equality, unlike the two predicates above. Kept as-is until the
/// intended rule is confirmed; flipping it is a change to this function only.
pub fn same_street(candidate: &AddressRecord, target: &AddressRecord) -> bool {
    candidate.street == target.street
}

pub const ELIGIBILITY: [Predicate; 3] = [distinct_id, distinct_cep, same_street];

pub fn is_eligible(candidate: &AddressRecord, target: &AddressRecord) -> bool {
    ELIGIBILITY
        .iter()
        .all(|predicate| predicate(candidate, target))
}
