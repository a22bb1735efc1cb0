//! The geocoding adapter: request construction, response normalization.

use std::env;

use geopin_types::{AddressQuery, CoordinateQuery, GeocodeResult};
use tracing::{debug, warn};

use crate::GOOGLE_MAPS_API_KEY_ENV;
use crate::error::GeocodeError;
use crate::http::{HttpClient, ReqwestClient, endpoint_from_env};
use crate::response::{GeocodeCandidate, GeocodeResponse};

/// Client adapter for the Google Maps Geocoding API.
///
/// Holds the injected [`HttpClient`] plus the call-time configuration
/// (API key, preferred language, preferred region). Configuration is
/// mutated through the chainable setters and read at call time;
/// last-set-wins. The adapter itself does no locking; callers that share
/// one instance across tasks must not mutate it concurrently with
/// in-flight calls.
///
/// Each operation performs exactly one GET through the injected client;
/// there are no retries, no caching and no adapter-level timeouts.
#[derive(Debug, Clone)]
pub struct Geocoder<C = ReqwestClient> {
    http: C,
    endpoint: String,
    api_key: String,
    language: Option<String>,
    region: Option<String>,
}

impl Geocoder<ReqwestClient> {
    /// Construct an adapter with the default reqwest-backed client and
    /// the given API key.
    pub fn new(api_key: impl Into<String>) -> anyhow::Result<Self> {
        let mut geocoder = Self::with_client(ReqwestClient::new()?);
        geocoder.set_api_key(api_key);
        Ok(geocoder)
    }

    /// Construct an adapter from the environment.
    ///
    /// The API key is read from `GOOGLE_MAPS_API_KEY` (missing keys are
    /// passed through as empty and surfaced by the service, not here) and
    /// the endpoint honors a validated `GEOCODE_API_BASE` override.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var(GOOGLE_MAPS_API_KEY_ENV).unwrap_or_default();
        let mut geocoder = Self::with_client(ReqwestClient::new()?);
        geocoder.endpoint = endpoint_from_env()?;
        geocoder.set_api_key(api_key);
        Ok(geocoder)
    }
}

impl<C: HttpClient> Geocoder<C> {
    /// Construct an adapter around a caller-provided HTTP capability,
    /// pointed at the fixed public endpoint.
    pub fn with_client(http: C) -> Self {
        Self {
            http,
            endpoint: crate::DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            language: None,
            region: None,
        }
    }

    /// Set the API key sent as the `key` query parameter.
    ///
    /// The key is not validated here; an empty or invalid key is passed
    /// through and rejected by the service itself.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> &mut Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the preferred response language (`language` query parameter).
    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = Some(language.into());
        self
    }

    /// Set the region bias (`region` query parameter).
    pub fn set_region(&mut self, region: impl Into<String>) -> &mut Self {
        self.region = Some(region.into());
        self
    }

    /// Forward geocoding: resolve address text to coordinates.
    ///
    /// An empty address short-circuits to the not-found sentinel without
    /// any network call.
    pub async fn forward_geocode(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        let query = AddressQuery::new(address);
        if query.is_empty() {
            return Ok(GeocodeResult::not_found());
        }
        self.request(query.query_pair()).await
    }

    /// Reverse geocoding: resolve a coordinate pair to an address.
    ///
    /// Coordinates are sent exactly as given; there is no empty-input
    /// short-circuit and no special-casing of any coordinate value. Only
    /// an empty `results` sequence yields the not-found sentinel.
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<GeocodeResult, GeocodeError> {
        let query = CoordinateQuery::new(latitude, longitude);
        self.request(query.query_pair()).await
    }

    /// Issue one GET for the given operation parameter and normalize the
    /// response.
    async fn request(&self, pair: (&'static str, String)) -> Result<GeocodeResult, GeocodeError> {
        let operation = pair.0;
        let params = self.request_params(pair);
        debug!(endpoint = %self.endpoint, operation, "issuing geocoding request");

        let response = self.http.get(&self.endpoint, &params).await?;
        if response.status != 200 {
            debug!(status = response.status, "geocoding request not accepted");
            return Err(GeocodeError::CouldNotConnect);
        }

        let decoded: GeocodeResponse = serde_json::from_str(&response.body)?;
        if let Some(message) = decoded.error_message.filter(|m| !m.is_empty()) {
            warn!(%message, "geocoding service reported an error");
            return Err(GeocodeError::ServiceError(message));
        }

        match decoded.results.into_iter().next() {
            Some(candidate) => Ok(format_result(&candidate)),
            None => Ok(GeocodeResult::not_found()),
        }
    }

    /// Assemble the query parameters for one call: configuration first,
    /// then the operation's own parameter. Unset optional fields are
    /// omitted entirely.
    fn request_params(&self, (name, value): (&'static str, String)) -> Vec<(&'static str, String)> {
        let mut params = vec![("key", self.api_key.clone())];
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        if let Some(region) = &self.region {
            params.push(("region", region.clone()));
        }
        params.push((name, value));
        params
    }
}

/// Map the service's top-ranked candidate into a [`GeocodeResult`].
///
/// Address components are scanned in service order with independent,
/// sequential type checks: a component may legally carry several
/// applicable type tags, and a later match deliberately overwrites an
/// earlier one. Keep these as separate `if`s: collapsing them into an
/// exclusive dispatch changes observable behavior.
fn format_result(candidate: &GeocodeCandidate) -> GeocodeResult {
    let mut result = GeocodeResult {
        latitude: candidate.geometry.location.lat,
        longitude: candidate.geometry.location.lng,
        accuracy: candidate.geometry.location_type.clone(),
        formatted_address: candidate.formatted_address.clone(),
        ..GeocodeResult::default()
    };

    for component in &candidate.address_components {
        if component.has_type("sublocality") {
            result.city = component.long_name.clone();
        }
        if component.has_type("administrative_area_level_2") {
            result.city = component.long_name.clone();
        }
        if component.has_type("locality") {
            result.city = component.long_name.clone();
        }
        if component.has_type("postal_town") {
            result.city = component.long_name.clone();
        }
        if component.has_type("administrative_area_level_1") {
            result.region = component.long_name.clone();
        }
        if component.has_type("country") {
            result.country = component.long_name.clone();
            result.iso_country_code = component.short_name.clone();
        }
    }

    result
}
