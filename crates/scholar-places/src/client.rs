//! HTTP client for the Mapbox forward-geocoding API.
//!
//! Wraps `reqwest` with access-token handling, URL construction and typed
//! response deserialization. Non-2xx answers surface as
//! [`PlacesError::Api`] carrying the provider's `message` when it sent one.

use std::time::Duration;

use reqwest::{Client, Url};
use scholar_core::AppConfig;

use crate::error::PlacesError;
use crate::types::{GeocodeResponse, SelectionResult};
use crate::widget::GeocoderOptions;

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/";
const DEFAULT_USER_AGENT: &str = "scholar/0.1 (place-autocomplete)";
const GEOCODING_PATH: [&str; 3] = ["geocoding", "v5", "mapbox.places"];

/// Client for the Mapbox geocoding endpoint.
///
/// Use [`MapboxClient::new`] for production or [`MapboxClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Clone)]
pub struct MapboxClient {
    client: Client,
    access_token: String,
    base_url: Url,
}

impl std::fmt::Debug for MapboxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxClient")
            .field("access_token", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl MapboxClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(access_token: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(access_token, timeout_secs, DEFAULT_USER_AGENT, DEFAULT_BASE_URL)
    }

    /// Creates a client using the geocoder settings from `config`.
    ///
    /// # Errors
    ///
    /// Same as [`MapboxClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig, access_token: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(
            access_token,
            config.geocoder_request_timeout_secs,
            &config.geocoder_user_agent,
            &config.geocoder_base_url,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`PlacesError::InvalidBaseUrl`] if `base_url` does not
    /// parse as a URL that can carry path segments.
    pub fn with_base_url(
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so path segments append under the base
        // path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(PlacesError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            base_url: parsed,
        })
    }

    /// Looks up places matching `query`, restricted by `options`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the provider answers with a non-2xx status.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the body is not a feature collection.
    pub async fn forward_geocode(
        &self,
        query: &str,
        options: &GeocoderOptions,
    ) -> Result<Vec<SelectionResult>, PlacesError> {
        let url = self.build_url(query, options)?;
        let body = self.request_json(&url).await?;
        let response: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("forward_geocode(query={query})"),
                source: e,
            })?;

        tracing::debug!(
            query,
            results = response.features.len(),
            "forward geocode complete"
        );
        Ok(response.features)
    }

    /// Builds `{base}/geocoding/v5/mapbox.places/{query}.json` with the
    /// query string derived from `options`.
    fn build_url(&self, query: &str, options: &GeocoderOptions) -> Result<Url, PlacesError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| PlacesError::InvalidBaseUrl {
                    base_url: self.base_url.to_string(),
                    reason: "URL cannot carry path segments".to_string(),
                })?;
            segments.pop_if_empty();
            segments.extend(GEOCODING_PATH);
            segments.push(&format!("{query}.json"));
        }
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("access_token", &self.access_token);
            pairs.append_pair("autocomplete", "true");
            pairs.append_pair("fuzzyMatch", bool_param(options.fuzzy_match));
            pairs.append_pair("limit", &options.limit.to_string());
            pairs.append_pair("routing", bool_param(options.routing));
            if !options.countries.is_empty() {
                pairs.append_pair("country", &options.countries);
            }
            if let Some(types) = &options.types {
                pairs.append_pair("types", types);
            }
        }
        Ok(url)
    }

    /// Sends a GET request and parses the body as JSON. Non-2xx statuses are
    /// mapped to [`PlacesError::Api`].
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        // reqwest errors carry the request URL, which includes the token.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| PlacesError::Http(e.without_url()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::Http(e.without_url()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            tracing::warn!(status = status.as_u16(), %message, "geocoding request failed");
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: redact_token(url),
            source: e,
        })
    }
}

fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// URL with its `access_token` value masked, for error context.
fn redact_token(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "access_token" {
                "[redacted]".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
