use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use spaceapi_api::{
    apod::ApodParams,
    donki::{CmeAnalysisParams, DonkiEvent, DonkiEvents, IpsParams, NotificationsParams},
    neows::{NeoBrowse, NeoFeed, NeoLookup},
    DateRangeParams, Endpoint,
};
use spaceapi_core::{Result, SpaceApiError};

pub const USAGE: &str = "\
Usage: spaceapi [--strict] <operation> [key=value ...]
       spaceapi --list
       spaceapi --save-key <API_KEY>

Examples:
  spaceapi apod date=2024-01-01
  spaceapi donki_cme start_date=2020-01-01 end_date=2020-01-31
  spaceapi neows_lookup asteroid_id=3542519

--strict exits with an error instead of printing {} when the request fails.
Set RUST_LOG to change log verbosity (default: info).";

/// Operation names with their accepted parameters
pub const OPERATIONS: [(&str, &str); 15] = [
    ("apod", "date start_date end_date count thumbs"),
    ("neows_feed", "start_date end_date"),
    ("neows_lookup", "asteroid_id"),
    ("neows_browse", ""),
    ("donki_cme", "start_date end_date"),
    (
        "donki_cme_analysis",
        "start_date end_date most_accurate_only complete_entry_only speed half_angle catalog keyword",
    ),
    ("donki_gst", "start_date end_date"),
    ("donki_ips", "start_date end_date location catalog"),
    ("donki_flr", "start_date end_date"),
    ("donki_sep", "start_date end_date"),
    ("donki_mpc", "start_date end_date"),
    ("donki_rbe", "start_date end_date"),
    ("donki_hss", "start_date end_date"),
    ("donki_wsa_es", "start_date end_date"),
    ("donki_notifications", "start_date end_date type"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    List,
    SaveKey(String),
    Call {
        operation: String,
        params: Map<String, Value>,
        strict: bool,
    },
}

pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut strict = false;
    let mut operation = None;
    let mut params = Map::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--list" => return Ok(Command::List),
            "--save-key" => {
                let key = args
                    .next()
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| usage_error("--save-key needs a value"))?;
                return Ok(Command::SaveKey(key));
            }
            "--strict" => strict = true,
            flag if flag.starts_with("--") => {
                return Err(usage_error(format!("unknown flag {}", flag)));
            }
            _ if operation.is_none() => operation = Some(arg),
            _ => {
                let (key, value) = arg
                    .split_once('=')
                    .ok_or_else(|| usage_error(format!("expected key=value, got '{}'", arg)))?;
                params.insert(key.to_string(), Value::String(value.to_string()));
            }
        }
    }

    let operation = operation.ok_or_else(|| usage_error("no operation given"))?;
    Ok(Command::Call {
        operation,
        params,
        strict,
    })
}

/// Map an operation name and its raw parameters onto the endpoint to request
pub fn endpoint_for(operation: &str, params: Map<String, Value>) -> Result<Box<dyn Endpoint>> {
    let endpoint: Box<dyn Endpoint> = match operation {
        "apod" => Box::new(decode::<ApodParams>(operation, params)?),
        "neows_feed" => Box::new(NeoFeed(decode::<DateRangeParams>(operation, params)?)),
        "neows_lookup" => Box::new(decode::<NeoLookup>(operation, params)?),
        "neows_browse" => {
            decode::<NoParams>(operation, params)?;
            Box::new(NeoBrowse)
        }
        "donki_cme_analysis" => Box::new(decode::<CmeAnalysisParams>(operation, params)?),
        "donki_ips" => Box::new(decode::<IpsParams>(operation, params)?),
        "donki_notifications" => Box::new(decode::<NotificationsParams>(operation, params)?),
        other => {
            let event = DonkiEvent::from_name(other)
                .ok_or_else(|| usage_error(format!("unknown operation '{}'", other)))?;
            Box::new(DonkiEvents {
                event,
                range: decode::<DateRangeParams>(operation, params)?,
            })
        }
    };
    Ok(endpoint)
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct NoParams {}

fn decode<T: DeserializeOwned>(operation: &str, params: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(params))
        .map_err(|e| usage_error(format!("invalid parameters for {}: {}", operation, e)))
}

fn usage_error(message: impl Into<String>) -> SpaceApiError {
    SpaceApiError::Config(message.into())
}
