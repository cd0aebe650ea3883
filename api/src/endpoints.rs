use serde::Deserialize;
use serde_json::Value;
use spaceapi_core::{
    models::{empty_response, DateRange},
    Result,
};
use tracing::warn;

use crate::{client::NasaClient, de, query::QueryParams, timing::timed};

/// A remote operation: where it lives and which query parameters it sends.
///
/// The `api_key` is added by the client and must not appear in [`Endpoint::query`].
pub trait Endpoint {
    /// Short name used in logs, e.g. `donki_cme`
    fn name(&self) -> &'static str;

    /// Path below the base URL, starting with `/`
    fn path(&self) -> String;

    fn query(&self) -> QueryParams {
        QueryParams::new()
    }
}

/// Optional start/end dates (`YYYY-MM-DD`), shared by the feed-style endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateRangeParams {
    #[serde(deserialize_with = "de::opt_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub end_date: Option<String>,
}

impl DateRangeParams {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
        }
    }

    pub fn starting(start_date: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date.into()),
            end_date: None,
        }
    }
}

impl From<DateRange> for DateRangeParams {
    fn from(range: DateRange) -> Self {
        Self::new(range.start, range.end)
    }
}

impl NasaClient {
    /// Issue one timed request for `endpoint` and return the decoded body.
    pub async fn fetch<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<Value> {
        let path = endpoint.path();
        let query = endpoint.query();
        timed(endpoint.name(), || self.get_json(&path, &query)).await
    }

    /// Like [`NasaClient::fetch`], but any failure is logged and replaced by `{}`.
    pub async fn fetch_or_empty<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Value {
        match self.fetch(endpoint).await {
            Ok(value) => value,
            Err(e) => {
                warn!(endpoint = endpoint.name(), "HTTP error occurred: {}", e);
                empty_response()
            }
        }
    }
}
