//! Model gateway trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::GatewayError;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// One prompt-creation request sent to a creator model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayRequest {
    pub provider: String,
    pub model: String,
    pub prompt: String,
    pub system: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GatewayRequest {
    pub fn new(provider: &str, model: &str, prompt: impl Into<String>) -> Self {
        Self {
            provider: provider.to_string(),
            model: model.to_string(),
            prompt: prompt.into(),
            system: None,
            max_tokens: 4096,
            temperature: 0.3,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input: u32,
    pub output: u32,
}

/// A completed gateway call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub content: String,
    pub tokens: TokenUsage,
    pub latency_ms: u64,
}

/// Trait for the external model-call collaborator. Calls are independent
/// and idempotent given identical inputs; retry and fallback policy belong
/// to the implementation, never to the engine.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn call(&self, request: GatewayRequest) -> GatewayResult<GatewayResponse>;
}
