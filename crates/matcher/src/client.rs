use address::AddressRecord;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::source::AddressSource;
use crate::types::{Lookup, MatchError};

/// Content type the provider speaks.
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// HTTP client for the provider's address endpoints.
///
/// No timeouts or retries are configured; each call is a single request.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    base_url: String,
}

impl ProviderClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch(&self, id: u64) -> Result<Option<AddressRecord>, MatchError> {
        let url = self.url(&format!("/addresses/{id}"));
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(MatchError::Upstream {
                status: status.as_u16(),
                url,
            }),
        }
    }
}

#[async_trait]
impl AddressSource for ProviderClient {
    async fn available(&self) -> Result<Vec<AddressRecord>, MatchError> {
        let url = self.url("/addresses/available");
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MatchError::Upstream {
                status: status.as_u16(),
                url,
            });
        }

        let records: Vec<AddressRecord> = response.json().await?;
        debug!(count = records.len(), "fetched available addresses");
        Ok(records)
    }

    async fn lookup(&self, id: u64) -> Lookup {
        match self.fetch(id).await {
            Ok(Some(record)) => Lookup::Found(record),
            Ok(None) => Lookup::NotFound,
            Err(err) => Lookup::Failed(err),
        }
    }

    async fn create(&self, record: &AddressRecord) -> Result<(), MatchError> {
        let url = self.url("/addresses");
        debug!("POST {url}");

        let body = serde_json::to_vec(record)?;
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MatchError::Upstream {
                status: status.as_u16(),
                url,
            });
        }
        Ok(())
    }
}
