//! Test doubles for the gateway trait.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{GatewayError, GatewayRequest, GatewayResponse, ModelGateway, TokenUsage};

/// In-memory gateway returning canned content and recording every request.
/// Construct with [`FakeGateway::replying`] for the success path or
/// [`FakeGateway::failing`] to exercise error propagation.
pub struct FakeGateway {
    reply: Option<String>,
    calls: Mutex<Vec<GatewayRequest>>,
}

impl FakeGateway {
    pub fn replying(content: impl Into<String>) -> Self {
        Self {
            reply: Some(content.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Gateway whose every call fails with a network error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<GatewayRequest> {
        self.calls.lock().expect("fake gateway lock").clone()
    }
}

#[async_trait]
impl ModelGateway for FakeGateway {
    async fn call(&self, request: GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        let provider = request.provider.clone();
        self.calls.lock().expect("fake gateway lock").push(request);
        match &self.reply {
            Some(content) => Ok(GatewayResponse {
                content: content.clone(),
                tokens: TokenUsage {
                    input: 100,
                    output: 200,
                },
                latency_ms: 5,
            }),
            None => Err(GatewayError::Network {
                provider,
                detail: "connection refused (fake)".to_string(),
            }),
        }
    }
}
