//! Async client for the api.nasa.gov open APIs.
//!
//! Every operation issues a single GET, always carrying the client's
//! `api_key`, and yields the decoded JSON body. The named operations
//! ([`NasaClient::apod`], [`NasaClient::donki_cme`], ...) return an empty
//! object when the request fails; [`NasaClient::fetch`] exposes the
//! underlying [`SpaceApiError`] instead.
//!
//! ```no_run
//! use spaceapi_api::{apod::ApodParams, NasaClient};
//!
//! # async fn run() {
//! let client = NasaClient::demo();
//! let picture = client.apod(ApodParams::on("2024-01-01")).await;
//! println!("{}", picture["title"]);
//! # }
//! ```

pub mod apod;
pub mod client;
mod de;
pub mod donki;
pub mod endpoints;
pub mod neows;
pub mod query;
pub mod timing;

pub use client::NasaClient;
pub use endpoints::{DateRangeParams, Endpoint};
pub use query::QueryParams;
pub use spaceapi_core::{models, models::DEMO_API_KEY, Result, SpaceApiError};
