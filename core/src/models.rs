use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shared demonstration key accepted by api.nasa.gov.
/// Limited to 30 requests per hour; a personal key raises that to 1000.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Date format expected by every endpoint (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The fallback returned when a request fails: an empty JSON object
pub fn empty_response() -> Value {
    Value::Object(Map::new())
}

/// Whether a response is the empty fallback (or an empty object/array body)
pub fn is_empty_response(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Null => true,
        _ => false,
    }
}

/// An inclusive start/end date pair, already formatted for the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(format_date(start), format_date(end))
    }

    /// The `days` days leading up to today (UTC), today included as the end.
    /// `None` when the start would fall before the earliest representable date.
    pub fn trailing_days(days: u32) -> Option<Self> {
        Self::trailing_days_from(Utc::now().date_naive(), days)
    }

    pub fn trailing_days_from(today: NaiveDate, days: u32) -> Option<Self> {
        let start = today.checked_sub_days(Days::new(u64::from(days)))?;
        Some(Self::from_dates(start, today))
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// CME analysis catalogs known to DONKI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmeCatalog {
    Swrc,
    JangEtAl,
}

impl CmeCatalog {
    pub const ALL: [CmeCatalog; 2] = [CmeCatalog::Swrc, CmeCatalog::JangEtAl];

    pub fn code(&self) -> &'static str {
        match self {
            CmeCatalog::Swrc => "SWRC_CATALOG",
            CmeCatalog::JangEtAl => "JANG_ET_AL_CATALOG",
        }
    }
}

/// Observation points for interplanetary shock analyses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpsLocation {
    Earth,
    Messenger,
    StereoA,
    StereoB,
}

impl IpsLocation {
    pub const ALL: [IpsLocation; 4] = [
        IpsLocation::Earth,
        IpsLocation::Messenger,
        IpsLocation::StereoA,
        IpsLocation::StereoB,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            IpsLocation::Earth => "Earth",
            IpsLocation::Messenger => "MESSENGER",
            IpsLocation::StereoA => "STEREO A",
            IpsLocation::StereoB => "STEREO B",
        }
    }
}

/// Interplanetary shock catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpsCatalog {
    Swrc,
    WinslowMessengerIcme,
}

impl IpsCatalog {
    pub const ALL: [IpsCatalog; 2] = [IpsCatalog::Swrc, IpsCatalog::WinslowMessengerIcme];

    pub fn code(&self) -> &'static str {
        match self {
            IpsCatalog::Swrc => "SWRC_CATALOG",
            IpsCatalog::WinslowMessengerIcme => "WINSLOW_MESSENGER_ICME_CATALOG",
        }
    }
}

/// DONKI notification categories; omit the filter to receive all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Flr,
    Sep,
    Cme,
    Ips,
    Mpc,
    Gst,
    Rbe,
    Report,
}

impl NotificationType {
    pub const ALL: [NotificationType; 8] = [
        NotificationType::Flr,
        NotificationType::Sep,
        NotificationType::Cme,
        NotificationType::Ips,
        NotificationType::Mpc,
        NotificationType::Gst,
        NotificationType::Rbe,
        NotificationType::Report,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            NotificationType::Flr => "FLR",
            NotificationType::Sep => "SEP",
            NotificationType::Cme => "CME",
            NotificationType::Ips => "IPS",
            NotificationType::Mpc => "MPC",
            NotificationType::Gst => "GST",
            NotificationType::Rbe => "RBE",
            NotificationType::Report => "report",
        }
    }
}

macro_rules! code_into_string {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.code().to_string()
                }
            }
        )*
    };
}

code_into_string!(CmeCatalog, IpsLocation, IpsCatalog, NotificationType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_is_an_empty_object() {
        let empty = empty_response();
        assert!(empty.is_object());
        assert!(is_empty_response(&empty));
        assert!(!is_empty_response(&serde_json::json!({"title": "M31"})));
        assert!(is_empty_response(&serde_json::json!([])));
    }

    #[test]
    fn trailing_days_counts_back_from_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let range = DateRange::trailing_days_from(today, 30).unwrap();
        assert_eq!(range, DateRange::new("2024-02-04", "2024-03-05"));
    }

    #[test]
    fn zero_trailing_days_is_a_single_day() {
        let today = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let range = DateRange::trailing_days_from(today, 0).unwrap();
        assert_eq!(range.start, range.end);
        assert_eq!(range.start, "2021-01-01");
    }

    #[test]
    fn trailing_days_out_of_range_is_none() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(DateRange::trailing_days_from(today, u32::MAX), None);
        assert_eq!(DateRange::trailing_days(200_000_000), None);
    }

    #[test]
    fn enum_codes_match_remote_values() {
        assert_eq!(String::from(IpsLocation::StereoA), "STEREO A");
        assert_eq!(CmeCatalog::JangEtAl.code(), "JANG_ET_AL_CATALOG");
        assert_eq!(NotificationType::Report.code(), "report");
        assert_eq!(NotificationType::ALL.len(), 8);
        assert_eq!(IpsCatalog::ALL[1].code(), "WINSLOW_MESSENGER_ICME_CATALOG");
    }
}
