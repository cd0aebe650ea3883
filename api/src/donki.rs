//! Space Weather Database Of Notifications, Knowledge, Information.
//!
//! DONKI uses camelCase date keys (`startDate`, `endDate`). Omitted dates
//! default server-side to the last 30 days, or 7 for simulations and
//! notifications.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    client::NasaClient,
    de,
    endpoints::{DateRangeParams, Endpoint},
    query::QueryParams,
};

/// Event feeds that take nothing but a date window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonkiEvent {
    /// Coronal mass ejections
    Cme,
    /// Geomagnetic storms
    Gst,
    /// Solar flares
    Flr,
    /// Solar energetic particles
    Sep,
    /// Magnetopause crossings
    Mpc,
    /// Radiation belt enhancements
    Rbe,
    /// High speed streams
    Hss,
    /// WSA+Enlil simulations
    WsaEnlil,
}

impl DonkiEvent {
    pub const ALL: [DonkiEvent; 8] = [
        DonkiEvent::Cme,
        DonkiEvent::Gst,
        DonkiEvent::Flr,
        DonkiEvent::Sep,
        DonkiEvent::Mpc,
        DonkiEvent::Rbe,
        DonkiEvent::Hss,
        DonkiEvent::WsaEnlil,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DonkiEvent::Cme => "donki_cme",
            DonkiEvent::Gst => "donki_gst",
            DonkiEvent::Flr => "donki_flr",
            DonkiEvent::Sep => "donki_sep",
            DonkiEvent::Mpc => "donki_mpc",
            DonkiEvent::Rbe => "donki_rbe",
            DonkiEvent::Hss => "donki_hss",
            DonkiEvent::WsaEnlil => "donki_wsa_es",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            DonkiEvent::Cme => "/DONKI/CME",
            DonkiEvent::Gst => "/DONKI/GST",
            DonkiEvent::Flr => "/DONKI/FLR",
            DonkiEvent::Sep => "/DONKI/SEP",
            DonkiEvent::Mpc => "/DONKI/MPC",
            DonkiEvent::Rbe => "/DONKI/RBE",
            DonkiEvent::Hss => "/DONKI/HSS",
            DonkiEvent::WsaEnlil => "/DONKI/WSAEnlilSimulations",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|e| e.name() == name).copied()
    }
}

/// A date-window query against one [`DonkiEvent`] feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonkiEvents {
    pub event: DonkiEvent,
    pub range: DateRangeParams,
}

impl Endpoint for DonkiEvents {
    fn name(&self) -> &'static str {
        self.event.name()
    }

    fn path(&self) -> String {
        self.event.path().to_string()
    }

    fn query(&self) -> QueryParams {
        camel_dates(self.range.start_date.as_deref(), self.range.end_date.as_deref())
    }
}

fn camel_dates(start_date: Option<&str>, end_date: Option<&str>) -> QueryParams {
    QueryParams::new()
        .text("startDate", start_date)
        .text("endDate", end_date)
}

/// Query for `/DONKI/CMEAnalysis`.
///
/// `most_accurate_only` and `complete_entry_only` start out enabled and,
/// like `speed` and `half_angle` (lower limits, 0 = no filter), are only
/// sent when set. Disabling a flag leaves it to the server default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CmeAnalysisParams {
    #[serde(deserialize_with = "de::opt_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "de::flag")]
    pub most_accurate_only: bool,
    #[serde(deserialize_with = "de::flag")]
    pub complete_entry_only: bool,
    /// km/s
    #[serde(deserialize_with = "de::u32_value")]
    pub speed: u32,
    #[serde(deserialize_with = "de::u32_value")]
    pub half_angle: u32,
    /// See [`spaceapi_core::models::CmeCatalog`]
    #[serde(deserialize_with = "de::opt_string")]
    pub catalog: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub keyword: Option<String>,
}

impl Default for CmeAnalysisParams {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            most_accurate_only: true,
            complete_entry_only: true,
            speed: 0,
            half_angle: 0,
            catalog: None,
            keyword: None,
        }
    }
}

impl Endpoint for CmeAnalysisParams {
    fn name(&self) -> &'static str {
        "donki_cme_analysis"
    }

    fn path(&self) -> String {
        "/DONKI/CMEAnalysis".to_string()
    }

    fn query(&self) -> QueryParams {
        camel_dates(self.start_date.as_deref(), self.end_date.as_deref())
            .flag("most_accurate_only", self.most_accurate_only)
            .flag("complete_entry_only", self.complete_entry_only)
            .number("speed", Some(u64::from(self.speed)))
            .number("half_angle", Some(u64::from(self.half_angle)))
            .text("catalog", self.catalog.as_deref())
            .text("keyword", self.keyword.as_deref())
    }
}

/// Query for `/DONKI/IPS`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IpsParams {
    #[serde(deserialize_with = "de::opt_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub end_date: Option<String>,
    /// See [`spaceapi_core::models::IpsLocation`]
    #[serde(deserialize_with = "de::opt_string")]
    pub location: Option<String>,
    /// See [`spaceapi_core::models::IpsCatalog`]
    #[serde(deserialize_with = "de::opt_string")]
    pub catalog: Option<String>,
}

impl Endpoint for IpsParams {
    fn name(&self) -> &'static str {
        "donki_ips"
    }

    fn path(&self) -> String {
        "/DONKI/IPS".to_string()
    }

    fn query(&self) -> QueryParams {
        camel_dates(self.start_date.as_deref(), self.end_date.as_deref())
            .text("location", self.location.as_deref())
            .text("catalog", self.catalog.as_deref())
    }
}

/// Query for `/DONKI/notifications`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationsParams {
    #[serde(deserialize_with = "de::opt_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub end_date: Option<String>,
    /// See [`spaceapi_core::models::NotificationType`]; all types when omitted
    #[serde(alias = "type", deserialize_with = "de::opt_string")]
    pub notification_type: Option<String>,
}

impl Endpoint for NotificationsParams {
    fn name(&self) -> &'static str {
        "donki_notifications"
    }

    fn path(&self) -> String {
        "/DONKI/notifications".to_string()
    }

    fn query(&self) -> QueryParams {
        camel_dates(self.start_date.as_deref(), self.end_date.as_deref())
            .text("type", self.notification_type.as_deref())
    }
}

impl NasaClient {
    /// Any date-window DONKI feed; `{}` on failure
    pub async fn donki_events(&self, event: DonkiEvent, range: DateRangeParams) -> Value {
        self.fetch_or_empty(&DonkiEvents { event, range }).await
    }

    pub async fn donki_cme(&self, range: DateRangeParams) -> Value {
        self.donki_events(DonkiEvent::Cme, range).await
    }

    pub async fn donki_cme_analysis(&self, params: CmeAnalysisParams) -> Value {
        self.fetch_or_empty(&params).await
    }

    pub async fn donki_gst(&self, range: DateRangeParams) -> Value {
        self.donki_events(DonkiEvent::Gst, range).await
    }

    pub async fn donki_ips(&self, params: IpsParams) -> Value {
        self.fetch_or_empty(&params).await
    }

    pub async fn donki_flr(&self, range: DateRangeParams) -> Value {
        self.donki_events(DonkiEvent::Flr, range).await
    }

    pub async fn donki_sep(&self, range: DateRangeParams) -> Value {
        self.donki_events(DonkiEvent::Sep, range).await
    }

    pub async fn donki_mpc(&self, range: DateRangeParams) -> Value {
        self.donki_events(DonkiEvent::Mpc, range).await
    }

    pub async fn donki_rbe(&self, range: DateRangeParams) -> Value {
        self.donki_events(DonkiEvent::Rbe, range).await
    }

    pub async fn donki_hss(&self, range: DateRangeParams) -> Value {
        self.donki_events(DonkiEvent::Hss, range).await
    }

    pub async fn donki_wsa_es(&self, range: DateRangeParams) -> Value {
        self.donki_events(DonkiEvent::WsaEnlil, range).await
    }

    pub async fn donki_notifications(&self, params: NotificationsParams) -> Value {
        self.fetch_or_empty(&params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spaceapi_core::models::{CmeCatalog, IpsLocation, NotificationType};

    #[test]
    fn event_feeds_translate_dates_to_camel_case() {
        let query = DonkiEvents {
            event: DonkiEvent::Cme,
            range: DateRangeParams::starting("2020-01-01"),
        }
        .query();
        assert_eq!(query.keys(), vec!["startDate"]);
        assert_eq!(query.get("startDate"), Some("2020-01-01"));
    }

    #[test]
    fn event_names_round_trip() {
        for event in DonkiEvent::ALL {
            assert_eq!(DonkiEvent::from_name(event.name()), Some(event));
            assert!(event.path().starts_with("/DONKI/"));
        }
        assert_eq!(DonkiEvent::from_name("donki_cme_analysis"), None);
    }

    #[test]
    fn cme_analysis_sends_default_flags() {
        let query = CmeAnalysisParams::default().query();
        assert_eq!(query.keys(), vec!["most_accurate_only", "complete_entry_only"]);
    }

    #[test]
    fn cme_analysis_disabled_flags_are_omitted() {
        let params = CmeAnalysisParams {
            most_accurate_only: false,
            complete_entry_only: false,
            speed: 500,
            half_angle: 30,
            catalog: Some(CmeCatalog::Swrc.into()),
            keyword: Some("swpc_annex".to_string()),
            ..CmeAnalysisParams::default()
        };
        let query = params.query();
        assert!(!query.contains_key("most_accurate_only"));
        assert!(!query.contains_key("complete_entry_only"));
        assert_eq!(query.get("speed"), Some("500"));
        assert_eq!(query.get("half_angle"), Some("30"));
        assert_eq!(query.get("catalog"), Some("SWRC_CATALOG"));
        assert_eq!(query.get("keyword"), Some("swpc_annex"));
    }

    #[test]
    fn ips_location_is_forwarded_verbatim() {
        let params = IpsParams {
            location: Some(IpsLocation::StereoA.into()),
            ..IpsParams::default()
        };
        assert_eq!(params.query().get("location"), Some("STEREO A"));
    }

    #[test]
    fn notification_type_goes_out_as_type() {
        let params = NotificationsParams {
            notification_type: Some(NotificationType::Flr.into()),
            ..NotificationsParams::default()
        };
        assert_eq!(params.query().keys(), vec!["type"]);

        let parsed: NotificationsParams =
            serde_json::from_value(serde_json::json!({ "type": "report" })).unwrap();
        assert_eq!(parsed.notification_type.as_deref(), Some("report"));
    }

    #[test]
    fn cme_analysis_parses_textual_values() {
        let parsed: CmeAnalysisParams = serde_json::from_value(serde_json::json!({
            "speed": "450",
            "most_accurate_only": "false",
        }))
        .unwrap();
        assert_eq!(parsed.speed, 450);
        assert!(!parsed.most_accurate_only);
        assert!(parsed.complete_entry_only);
    }
}
