//! Gateway error types

use thiserror::Error;

/// Failures surfaced by a model-call gateway. Every variant names the
/// provider so callers can tell which collaborator failed.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("provider {provider}: credentials missing ({detail})")]
    MissingCredentials { provider: String, detail: String },

    #[error("provider {provider}: network failure: {detail}")]
    Network { provider: String, detail: String },

    #[error("provider {provider}: request failed with status {status}: {detail}")]
    Status {
        provider: String,
        status: u16,
        detail: String,
    },

    #[error("provider {provider}: invalid response: {detail}")]
    InvalidResponse { provider: String, detail: String },

    #[error("unknown provider: {provider}")]
    UnknownProvider { provider: String },
}

impl GatewayError {
    /// The provider this error originated from.
    pub fn provider(&self) -> &str {
        match self {
            Self::MissingCredentials { provider, .. }
            | Self::Network { provider, .. }
            | Self::Status { provider, .. }
            | Self::InvalidResponse { provider, .. }
            | Self::UnknownProvider { provider } => provider,
        }
    }
}
