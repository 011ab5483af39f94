//! Error types for configuration and provider lookups.

use thiserror::Error;

use crate::provider::ProviderId;

/// A failed temperature lookup against one remote source.
///
/// Nothing here is retried or recovered internally; every variant propagates
/// up to the HTTP layer unchanged.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The remote API could not be reached (includes timeouts).
    #[error("{provider}: request failed: {source}")]
    Transport {
        provider: ProviderId,
        #[source]
        source: reqwest::Error,
    },

    /// The remote API answered with a non-2xx status.
    #[error("{provider}: request failed with status {status}: {body}")]
    Status {
        provider: ProviderId,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not match the expected schema.
    #[error("{provider}: failed to parse response JSON: {source}")]
    Decode {
        provider: ProviderId,
        #[source]
        source: serde_json::Error,
    },

    /// The response parsed but contained no data entries.
    #[error("{provider}: response contained no data entries")]
    EmptyPayload { provider: ProviderId },
}

/// Startup configuration errors. Fatal; the process never starts serving.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable '{0}'. Hint: add it to the local .env file.")]
    MissingVar(&'static str),

    #[error("Composite provider requires at least one provider")]
    NoProviders,
}
