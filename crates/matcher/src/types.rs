use address::AddressRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One eligible candidate together with its score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub score: i64,
    /// The candidate record. Named after the wire key the consumer exposes.
    pub cep: AddressRecord,
}

/// Response envelope of the suggestions endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestions {
    pub suggestions: Vec<Suggestion>,
}

impl From<Vec<Suggestion>> for Suggestions {
    fn from(suggestions: Vec<Suggestion>) -> Self {
        Self { suggestions }
    }
}

/// Outcome of fetching a single record from the provider.
///
/// The three cases stay distinct here; [`Lookup::into_option`] is the one
/// place they are collapsed.
#[derive(Debug)]
pub enum Lookup {
    Found(AddressRecord),
    NotFound,
    /// The provider could not be asked, or answered with something other
    /// than success or 404.
    Failed(MatchError),
}

impl Lookup {
    /// Drop the distinction between "not found" and "failed".
    pub fn into_option(self) -> Option<AddressRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound | Lookup::Failed(_) => None,
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The HTTP exchange with the provider failed (connect, read, decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("provider answered {status} for {url}")]
    Upstream { status: u16, url: String },
    /// A request body could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn suggestions_serialize_with_score_and_cep() {
        let suggestions = Suggestions::from(vec![Suggestion {
            score: 94,
            cep: AddressRecord {
                id: 1,
                cep: "14808-562".into(),
                ..Default::default()
            },
        }]);

        let value = serde_json::to_value(&suggestions).unwrap();
        assert_eq!(value["suggestions"][0]["score"], json!(94));
        assert_eq!(value["suggestions"][0]["cep"]["cep"], json!("14808-562"));
        assert_eq!(value["suggestions"][0]["cep"]["id"], json!(1));
    }

    #[test]
    fn lookup_collapses_to_option() {
        let record = AddressRecord {
            id: 4,
            ..Default::default()
        };
        assert_eq!(Lookup::Found(record.clone()).into_option(), Some(record));
        assert_eq!(Lookup::NotFound.into_option(), None);

        let failed = Lookup::Failed(MatchError::Upstream {
            status: 503,
            url: "http://provider/addresses/4".into(),
        });
        assert!(matches!(failed, Lookup::Failed(MatchError::Upstream { status: 503, .. })));
        assert_eq!(failed.into_option(), None);
    }

    #[test]
    fn upstream_error_message_names_status() {
        let err = MatchError::Upstream {
            status: 500,
            url: "http://localhost:8081/addresses/available".into(),
        };
        assert!(err.to_string().contains("500"));
    }
}
