use thiserror::Error;

/// Errors raised while talking to the geocoding provider or rendering a field.
///
/// None of these escape a mounted binding: construction failures are logged
/// and the input falls back to manual entry.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("geocoding API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid geocoder base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// A lookup was attempted on a widget that has already been torn down.
    #[error("geocoder widget has been removed")]
    WidgetRemoved,

    /// A passthrough attribute name would break out of the input tag.
    #[error("invalid input attribute name \"{0}\"")]
    InvalidAttributeName(String),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}
