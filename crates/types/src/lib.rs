//! Shared data types for the Geopin geocoding client.
//!
//! The only entity exchanged with callers is [`GeocodeResult`], a flat
//! record distilled from the upstream service's first match. "No match"
//! is modeled as a well-formed sentinel record (see
//! [`GeocodeResult::not_found`]) rather than an error, so callers can
//! distinguish "legitimately empty" from "failed" without unwrapping
//! error chains.

use serde::{Deserialize, Serialize};

/// Marker stored in `accuracy` and `formatted_address` when the service
/// produced no match for a query.
pub const RESULT_NOT_FOUND: &str = "result_not_found";

/// A normalized geocoding match.
///
/// Every record carries all eight fields: categorical fields that the
/// upstream response did not populate are empty strings, never absent,
/// and coordinates default to `0.0`. The record is a pure value: it is
/// produced once per call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Latitude of the matched location.
    #[serde(default)]
    pub latitude: f64,
    /// Longitude of the matched location.
    #[serde(default)]
    pub longitude: f64,
    /// Upstream precision indicator (e.g. `ROOFTOP`, `APPROXIMATE`).
    #[serde(default)]
    pub accuracy: String,
    /// Full human-readable address as formatted by the service.
    #[serde(default)]
    pub formatted_address: String,
    /// City-level component, when one was tagged in the response.
    #[serde(default)]
    pub city: String,
    /// First-level administrative area (state, province, ...).
    #[serde(default)]
    pub region: String,
    /// Country long name.
    #[serde(default)]
    pub country: String,
    /// ISO short code of the country (e.g. `US`).
    #[serde(default)]
    pub iso_country_code: String,
}

impl GeocodeResult {
    /// The sentinel record returned when a query matched nothing.
    pub fn not_found() -> Self {
        Self {
            accuracy: RESULT_NOT_FOUND.to_string(),
            formatted_address: RESULT_NOT_FOUND.to_string(),
            ..Self::default()
        }
    }

    /// Whether this record is the "no match" sentinel.
    pub fn is_not_found(&self) -> bool {
        self.accuracy == RESULT_NOT_FOUND
    }
}

/// Input for forward geocoding: free-form address text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    /// The address text to resolve.
    pub address: String,
}

impl AddressQuery {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// An empty address is never sent to the service.
    pub fn is_empty(&self) -> bool {
        self.address.is_empty()
    }

    /// The wire query parameter for this input.
    pub fn query_pair(&self) -> (&'static str, String) {
        ("address", self.address.clone())
    }
}

/// Input for reverse geocoding: a coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateQuery {
    pub latitude: f64,
    pub longitude: f64,
}

impl CoordinateQuery {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The wire query parameter for this input.
    ///
    /// Coordinates are rendered with `.` as the decimal point and no
    /// grouping regardless of locale, with no added rounding. Inputs are
    /// not range-checked or guarded against NaN/infinity.
    pub fn query_pair(&self) -> (&'static str, String) {
        ("latlng", format!("{},{}", self.latitude, self.longitude))
    }
}
