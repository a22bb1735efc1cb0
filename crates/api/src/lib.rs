//! Google Maps Geocoding API client utilities.
//!
//! This crate provides a lightweight client for the Google Maps Geocoding
//! API. It focuses on:
//!
//! - Constructing an HTTP client with sensible defaults
//! - Discovering credentials from `GOOGLE_MAPS_API_KEY`
//! - Validating `GEOCODE_API_BASE` endpoint overrides for safety
//! - Building forward/reverse geocoding requests and normalizing the
//!   service's JSON responses into [`GeocodeResult`] records
//!
//! The primary entry point is [`Geocoder`]. Create an instance via
//! [`Geocoder::new`] (or [`Geocoder::from_env`]), configure it with the
//! chainable setters, and call [`Geocoder::forward_geocode`] or
//! [`Geocoder::reverse_geocode`].
//!
//! # Example
//!
//! ```ignore
//! use geopin_api::Geocoder;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut geocoder = Geocoder::new("AIza...")?;
//!     geocoder.set_language("en").set_region("us");
//!
//!     let place = geocoder.forward_geocode("Springfield, IL").await?;
//!     println!("{}, {}", place.latitude, place.longitude);
//!
//!     let address = geocoder.reverse_geocode(51.5074, -0.1278).await?;
//!     println!("{}", address.formatted_address);
//!     Ok(())
//! }
//! ```
//!
//! "No match" is not an error: both operations return the
//! `result_not_found` sentinel record (see [`GeocodeResult::not_found`])
//! when the service yields zero results, and errors are reserved for
//! transport and service failures (see [`GeocodeError`]).

pub mod error;
pub mod geocoder;
pub mod http;
mod response;

pub use error::GeocodeError;
pub use geocoder::Geocoder;
pub use geopin_types::{AddressQuery, CoordinateQuery, GeocodeResult, RESULT_NOT_FOUND};
pub use http::{HttpClient, HttpResponse, ReqwestClient};

/// Default Google Maps Geocoding API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Environment variable overriding the geocoding endpoint (validated, see
/// [`http::validate_base_url`]).
pub const GEOCODE_API_BASE_ENV: &str = "GEOCODE_API_BASE";

/// Environment variable supplying the API key for [`Geocoder::from_env`].
pub const GOOGLE_MAPS_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";
