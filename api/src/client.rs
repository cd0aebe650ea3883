use reqwest::Client;
use serde_json::Value;
use spaceapi_core::{models::DEMO_API_KEY, Result, SpaceApiError};
use tracing::debug;

use crate::query::QueryParams;

const API_BASE_URL: &str = "https://api.nasa.gov";

/// Client for the APOD, NeoWs and DONKI services.
///
/// Holds one `reqwest::Client`, so clones and sequential calls share the
/// same connection pool.
#[derive(Debug, Clone)]
pub struct NasaClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NasaClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Client using the shared `DEMO_KEY` (30 requests per hour)
    pub fn demo() -> Self {
        Self::new(DEMO_API_KEY)
    }

    /// Point the client at another host, e.g. a mock server
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Use a preconfigured transport (timeouts, proxies, ...)
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) async fn get_json(&self, path: &str, query: &QueryParams) -> Result<Value> {
        let url = format!("{}{}", self.base_url(), path);

        let mut query_params: Vec<(&str, &str)> = vec![("api_key", self.api_key())];
        query_params.extend(query.iter());

        debug!(%url, params = query.len(), "sending request");

        let response = self
            .client()
            .get(&url)
            .query(&query_params)
            .send()
            .await
            .map_err(|e| SpaceApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SpaceApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| SpaceApiError::Parse(e.to_string()))
    }
}

impl Default for NasaClient {
    fn default() -> Self {
        Self::demo()
    }
}
