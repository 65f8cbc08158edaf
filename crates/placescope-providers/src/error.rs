use thiserror::Error;

/// Failures inside a provider adapter.
///
/// The shipped adapters catch these and fall back to demo data; the variants
/// exist so the catch site can log a precise category, and so injected test
/// doubles can simulate a provider that fails outright.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status, either on the HTTP
    /// line or inside its JSON envelope.
    #[error("unexpected status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The provider has no record for the requested id.
    #[error("place not found: {0}")]
    NotFound(String),

    #[error("{provider} did not answer within {secs}s")]
    Timeout { provider: String, secs: u64 },

    /// Catch-all for adapters that cannot produce a value at all.
    #[error("{0}")]
    Unavailable(String),
}

/// Failures while handing a payload to the notification relay.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid relay URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("relay rejected notification with status {status}: {body}")]
    Rejected { status: u16, body: String },
}
