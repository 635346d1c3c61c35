//! LLM provider abstraction for recipe generation.
//!
//! The generation pipeline only needs "prompt in, text out"; this module
//! provides that behind a trait so the server can run against the real
//! Anthropic API or a deterministic fake in tests.

mod claude;
mod fake;

pub use claude::ClaudeProvider;
pub use fake::FakeProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// A single completion request: one prompt plus sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. The provider is
/// responsible for transport, authentication, and turning the service's
/// response into plain text; callers never see the wire format.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a completion request and get the model's text response.
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "claude", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}

/// Registry of available providers.
///
/// Use environment variables to configure:
/// - MISE_LLM_PROVIDER: "claude" | "fake" (default: "fake")
/// - MISE_LLM_MODEL: Model name (provider-specific)
/// - ANTHROPIC_API_KEY: API key for Claude
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("MISE_LLM_PROVIDER").unwrap_or_else(|_| "fake".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::with_recipe_responses())),
        "claude" => {
            let api_key = std::env::var("ANTHROPIC_API_KEY")
                .map_err(|_| LlmError::NotConfigured("ANTHROPIC_API_KEY not set".to_string()))?;
            let model = std::env::var("MISE_LLM_MODEL")
                .unwrap_or_else(|_| "claude-3-5-sonnet-20241022".to_string());
            Ok(Box::new(ClaudeProvider::new(api_key, model)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
