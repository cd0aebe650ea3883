//! Near Earth Object Web Service.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    client::NasaClient,
    de,
    endpoints::{DateRangeParams, Endpoint},
    query::QueryParams,
};

/// Asteroids by closest-approach date. The service limits the window to
/// seven days and defaults `end_date` to a week after `start_date`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeoFeed(pub DateRangeParams);

impl Endpoint for NeoFeed {
    fn name(&self) -> &'static str {
        "neows_feed"
    }

    fn path(&self) -> String {
        "/neo/rest/v1/feed".to_string()
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .text("start_date", self.0.start_date.as_deref())
            .text("end_date", self.0.end_date.as_deref())
    }
}

/// One asteroid by its JPL small-body id (SPK-ID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NeoLookup {
    #[serde(deserialize_with = "de::u64_value")]
    pub asteroid_id: u64,
}

impl Endpoint for NeoLookup {
    fn name(&self) -> &'static str {
        "neows_lookup"
    }

    fn path(&self) -> String {
        format!("/neo/rest/v1/neo/{}", self.asteroid_id)
    }
}

/// The whole asteroid data-set, as served page by page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeoBrowse;

impl Endpoint for NeoBrowse {
    fn name(&self) -> &'static str {
        "neows_browse"
    }

    fn path(&self) -> String {
        "/neo/rest/v1/neo/browse".to_string()
    }
}

impl NasaClient {
    pub async fn neows_feed(&self, range: DateRangeParams) -> Value {
        self.fetch_or_empty(&NeoFeed(range)).await
    }

    pub async fn neows_lookup(&self, asteroid_id: u64) -> Value {
        self.fetch_or_empty(&NeoLookup { asteroid_id }).await
    }

    pub async fn neows_browse(&self) -> Value {
        self.fetch_or_empty(&NeoBrowse).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_puts_the_id_in_the_path() {
        let lookup = NeoLookup { asteroid_id: 3542519 };
        assert_eq!(lookup.path(), "/neo/rest/v1/neo/3542519");
        assert!(lookup.query().is_empty());
    }

    #[test]
    fn feed_uses_snake_case_dates() {
        let query = NeoFeed(DateRangeParams::new("2015-09-07", "2015-09-08")).query();
        assert_eq!(query.keys(), vec!["start_date", "end_date"]);
    }

    #[test]
    fn lookup_accepts_string_ids() {
        let lookup: NeoLookup =
            serde_json::from_value(serde_json::json!({ "asteroid_id": "3542519" })).unwrap();
        assert_eq!(lookup.asteroid_id, 3542519);
    }
}
