//! Astronomy Picture of the Day.

use serde::Deserialize;
use serde_json::Value;
use spaceapi_core::models::DateRange;

use crate::{client::NasaClient, de, endpoints::Endpoint, query::QueryParams};

/// Query for `/planetary/apod`.
///
/// `date` picks one day (today when omitted). `start_date`/`end_date` select
/// a range and cannot be combined with `date`. `count` asks for that many
/// random pictures and excludes both. `thumbs` adds a thumbnail URL for
/// video entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApodParams {
    #[serde(deserialize_with = "de::opt_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "de::opt_u32")]
    pub count: Option<u32>,
    #[serde(deserialize_with = "de::flag")]
    pub thumbs: bool,
}

impl ApodParams {
    pub fn on(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    pub fn between(range: DateRange) -> Self {
        Self {
            start_date: Some(range.start),
            end_date: Some(range.end),
            ..Self::default()
        }
    }

    pub fn random(count: u32) -> Self {
        Self {
            count: Some(count),
            ..Self::default()
        }
    }

    pub fn with_thumbs(mut self) -> Self {
        self.thumbs = true;
        self
    }
}

impl Endpoint for ApodParams {
    fn name(&self) -> &'static str {
        "apod"
    }

    fn path(&self) -> String {
        "/planetary/apod".to_string()
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .text("date", self.date.as_deref())
            .text("start_date", self.start_date.as_deref())
            .text("end_date", self.end_date.as_deref())
            .number("count", self.count.map(u64::from))
            .flag("thumbs", self.thumbs)
    }
}

impl NasaClient {
    /// Picture(s) of the day: an object for a single date, an array for
    /// ranges and random counts. `{}` on failure.
    pub async fn apod(&self, params: ApodParams) -> Value {
        self.fetch_or_empty(&params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_empty() {
        assert!(ApodParams::default().query().is_empty());
    }

    #[test]
    fn range_and_thumbs_keep_snake_case_keys() {
        let query = ApodParams::between(DateRange::new("2023-01-01", "2023-01-07"))
            .with_thumbs()
            .query();
        assert_eq!(query.keys(), vec!["start_date", "end_date", "thumbs"]);
        assert_eq!(query.get("thumbs"), Some("True"));
    }

    #[test]
    fn zero_count_is_not_sent() {
        assert!(ApodParams::random(0).query().is_empty());
        assert_eq!(ApodParams::random(3).query().get("count"), Some("3"));
    }
}
