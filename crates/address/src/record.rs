use crate::lenient;
use serde::{Deserialize, Serialize};

/// A single postal-address record.
///
/// Field names follow Rust conventions; the serialized form keeps the keys of
/// the CEP lookup service the provider imitates (`logradouro`, `bairro`, ...).
/// Missing keys deserialize to empty values and mistyped ones are coerced
/// (see `lenient`), so a body is only ever rejected for lacking a `cep`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    /// Repository-assigned identifier.
    #[serde(deserialize_with = "lenient::id")]
    pub id: u64,

    /// Postal code. Non-empty means the record is available for matching.
    #[serde(deserialize_with = "lenient::text")]
    pub cep: String,

    /// Street name.
    #[serde(rename = "logradouro", deserialize_with = "lenient::text")]
    pub street: String,

    #[serde(rename = "complemento", deserialize_with = "lenient::text")]
    pub complement: String,

    #[serde(rename = "bairro", deserialize_with = "lenient::text")]
    pub neighborhood: String,

    /// City.
    #[serde(rename = "localidade", deserialize_with = "lenient::text")]
    pub locality: String,

    /// Two-letter state code.
    #[serde(rename = "uf", deserialize_with = "lenient::text")]
    pub state: String,

    /// IBGE municipality code.
    #[serde(deserialize_with = "lenient::text")]
    pub ibge: String,

    /// GIA tax code.
    #[serde(deserialize_with = "lenient::text")]
    pub gia: String,

    /// Telephone area code.
    #[serde(deserialize_with = "lenient::text")]
    pub ddd: String,

    /// SIAFI municipality code.
    #[serde(deserialize_with = "lenient::text")]
    pub siafi: String,

    /// Position along the street; only used as a distance proxy when scoring.
    #[serde(rename = "ordem", deserialize_with = "lenient::order")]
    pub street_order: i64,
}

impl AddressRecord {
    /// Whether this record can be offered as a match candidate.
    pub fn is_available(&self) -> bool {
        !self.cep.is_empty()
    }
}
