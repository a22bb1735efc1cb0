//! HTTP capability consumed by the geocoder.
//!
//! The adapter never talks to the network directly: it issues every call
//! through the [`HttpClient`] trait, which callers inject. Retry, timeout
//! and TLS policy live entirely in the injected implementation.
//! [`ReqwestClient`] is the default implementation used by
//! [`Geocoder::new`](crate::Geocoder::new).

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Url, header};
use tracing::debug;

use crate::{DEFAULT_ENDPOINT, GEOCODE_API_BASE_ENV};

/// Base domains an endpoint override may point at (subdomains included).
const ALLOWED_API_DOMAINS: &[&str] = &["googleapis.com"];
/// Hosts exempt from the HTTPS requirement.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

/// The minimal view of an HTTP exchange the geocoder needs: a status code
/// and the raw response body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// A "GET with query parameters" capability.
///
/// The geocoder performs exactly one call through this trait per
/// operation and interprets nothing but the returned status and body.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request to `url` with the given query parameters.
    ///
    /// Implementations report their own transport failures (connect
    /// errors, timeouts, ...) through the error; a non-2xx status is not
    /// a failure at this layer.
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse>;
}

/// Default [`HttpClient`] implementation backed by `reqwest`.
///
/// Pre-configures an `Accept: application/json` header, a 30 second
/// request timeout and a descriptive User-Agent. Anything beyond that
/// (proxies, additional timeouts, retries) is out of scope; construct
/// your own implementation of [`HttpClient`] instead.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: Client,
    user_agent: String,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(Duration::from_secs(30))
            .build()
            .context("build http client")?;

        Ok(Self {
            http,
            user_agent: format!("geopin/0.1; {}", env::consts::OS),
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        let resp = self
            .http
            .get(url)
            .query(query)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| anyhow!("Network error: {}", e))?;

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        debug!(%url, status, "geocoding request completed");

        Ok(HttpResponse { status, body })
    }
}

/// Resolve the geocoding endpoint from the environment.
///
/// Uses `GEOCODE_API_BASE` when set (after validation), falling back to
/// the fixed public endpoint.
pub(crate) fn endpoint_from_env() -> Result<String> {
    match env::var(GEOCODE_API_BASE_ENV) {
        Ok(base) => {
            validate_base_url(&base)?;
            Ok(base)
        }
        Err(_) => Ok(DEFAULT_ENDPOINT.to_string()),
    }
}

/// Validate that an endpoint override is acceptable for use by the client.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS, and host must be within
///   `googleapis.com` or a subdomain thereof
pub fn validate_base_url(base: &str) -> Result<()> {
    let parsed_base_url = Url::parse(base)
        .map_err(|e| anyhow!("Invalid {} URL '{}': {}", GEOCODE_API_BASE_ENV, base, e))?;

    let host_name = parsed_base_url
        .host_str()
        .ok_or_else(|| anyhow!("{} must include a host", GEOCODE_API_BASE_ENV))?;

    // Local development: any scheme is fine.
    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(());
    }

    if parsed_base_url.scheme() != "https" {
        return Err(anyhow!(
            "{} must use https for non-localhost hosts; got '{}://'",
            GEOCODE_API_BASE_ENV,
            parsed_base_url.scheme()
        ));
    }

    let is_allowed_domain = ALLOWED_API_DOMAINS.iter().any(|&allowed_domain| {
        host_name.eq_ignore_ascii_case(allowed_domain)
            || host_name
                .to_ascii_lowercase()
                .ends_with(&format!(".{}", allowed_domain))
    });
    if !is_allowed_domain {
        return Err(anyhow!(
            "{} host '{}' is not allowed; must be one of {:?} or a subdomain, or localhost",
            GEOCODE_API_BASE_ENV,
            host_name,
            ALLOWED_API_DOMAINS
        ));
    }

    Ok(())
}
