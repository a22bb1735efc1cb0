//! Wire shape of the upstream geocoding response.
//!
//! Decoded once per call and discarded; only `results[0]` is ever
//! consumed, in the order the service ranked its matches. Every field the
//! service may omit carries a default so a sparse payload still decodes.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeCandidate {
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Geometry {
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub location_type: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Location {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

/// A structured piece of the postal address, tagged by the service with
/// one or more semantic type labels.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representative_response_decodes() {
        let json = r#"{
            "results": [{
                "formatted_address": "Springfield, IL, USA",
                "geometry": {
                    "location": {"lat": 39.78, "lng": -89.65},
                    "location_type": "ROOFTOP"
                },
                "address_components": [
                    {"long_name": "Springfield", "short_name": "Springfield", "types": ["locality", "political"]},
                    {"long_name": "Illinois", "short_name": "IL", "types": ["administrative_area_level_1", "political"]},
                    {"long_name": "United States", "short_name": "US", "types": ["country", "political"]}
                ]
            }],
            "status": "OK"
        }"#;

        let decoded: GeocodeResponse = serde_json::from_str(json).expect("decode GeocodeResponse");
        assert!(decoded.error_message.is_none());
        assert_eq!(decoded.results.len(), 1);

        let candidate = &decoded.results[0];
        assert_eq!(candidate.formatted_address, "Springfield, IL, USA");
        assert_eq!(candidate.geometry.location.lat, 39.78);
        assert_eq!(candidate.geometry.location.lng, -89.65);
        assert_eq!(candidate.geometry.location_type, "ROOFTOP");
        assert_eq!(candidate.address_components.len(), 3);
        assert!(candidate.address_components[2].has_type("country"));
        assert!(!candidate.address_components[2].has_type("locality"));
    }

    #[test]
    fn sparse_response_decodes_with_defaults() {
        let decoded: GeocodeResponse = serde_json::from_str("{}").expect("decode empty object");
        assert!(decoded.results.is_empty());
        assert!(decoded.error_message.is_none());

        let decoded: GeocodeResponse =
            serde_json::from_str(r#"{"results": [{}]}"#).expect("decode bare candidate");
        let candidate = &decoded.results[0];
        assert_eq!(candidate.formatted_address, "");
        assert_eq!(candidate.geometry.location.lat, 0.0);
        assert_eq!(candidate.geometry.location_type, "");
        assert!(candidate.address_components.is_empty());
    }

    #[test]
    fn error_message_is_surfaced() {
        let json = r#"{"results": [], "error_message": "The provided API key is invalid.", "status": "REQUEST_DENIED"}"#;
        let decoded: GeocodeResponse = serde_json::from_str(json).expect("decode error response");
        assert_eq!(
            decoded.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }
}
