//! # CEP Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` turns a target address into a list of scored suggestions. It
//! pulls the provider's available records through an [`AddressSource`],
//! keeps the candidates that pass every eligibility predicate, and scores
//! each one by how far its street ordering value sits from the target's.
//!
//! ## Core Types
//!
//! - [`Matcher`]: request-level entry point wrapping an [`AddressSource`].
//! - [`AddressSource`]: where candidates and single-record lookups come from.
//!   [`ProviderClient`] implements it over the provider's HTTP API.
//! - [`Suggestion`] / [`Suggestions`]: the scored output and its JSON envelope.
//! - [`Lookup`]: result of fetching one record, keeping "not found" apart
//!   from "could not ask".
//!
//! ## Scoring
//!
//! `score = 100 - |candidate.street_order - target.street_order|`. Scores are
//! plain integers and go negative once the distance passes 100.
//!
//! ## Example Usage
//!
//! ```no_run
//! use matcher::{Matcher, ProviderClient};
//!
//! # async fn run() -> Result<(), matcher::MatchError> {
//! let matcher = Matcher::new(ProviderClient::new("http://localhost:8081"));
//!
//! if let Some(target) = matcher.get_cep_by_id(0).await {
//!     let suggestions = matcher.suggestions(&target).await?;
//!     for s in suggestions.suggestions {
//!         println!("{} score={}", s.cep.cep, s.score);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod eligibility;
pub mod engine;
pub mod source;
pub mod types;

pub use crate::client::ProviderClient;
pub use crate::eligibility::{is_eligible, Predicate, ELIGIBILITY};
pub use crate::engine::{score, suggest, Matcher, BASE_SCORE};
pub use crate::source::AddressSource;
pub use crate::types::{Lookup, MatchError, Suggestion, Suggestions};
