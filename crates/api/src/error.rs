//! Error taxonomy for geocoding calls.

use thiserror::Error;

/// Error surfaced when a geocoding operation cannot produce a result.
///
/// "No match" is deliberately absent here (it is reported as the
/// `result_not_found` sentinel record, not as an error), so every variant
/// below means the service was unreachable, rejected the call, or
/// answered with something the client could not decode.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The service answered with an HTTP status other than 200. Carries
    /// no further detail.
    #[error("could not connect to the geocoding service")]
    CouldNotConnect,
    /// The service was reachable but reported an error of its own; the
    /// upstream message is passed through verbatim.
    #[error("geocoding service returned an error: {0}")]
    ServiceError(String),
    /// The response body was not valid JSON for the documented shape.
    #[error("failed to decode geocoding response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    /// The injected HTTP client failed before producing a response; its
    /// own error is propagated unchanged.
    #[error(transparent)]
    Client(#[from] anyhow::Error),
}
