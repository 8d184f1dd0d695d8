//! Engine error types

use garimpo_providers::GatewayError;
use thiserror::Error;

/// Failures of the AI-augmented paths. Every non-AI path is a total
/// function and never returns these.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown creator model: {creator} (supported: gemini, deepseek, codestral)")]
    UnknownCreator { creator: String },

    #[error("model gateway call failed: {0}")]
    Gateway(#[from] GatewayError),
}
