//! Recipe generation pipeline.
//!
//! Three steps, invoked once per request: build the prompt from the
//! structured request, send it to an LLM provider, normalize whatever
//! text comes back into a recipe document. Only the provider call can
//! fail; normalization always produces a valid recipe.

mod normalize;
mod prompt;

pub use normalize::normalize_response;
pub use prompt::build_recipe_prompt;

use crate::llm::{CompletionRequest, LlmError, LlmProvider};
use crate::types::{Recipe, RecipeRequest};

/// Maximum output length for a generation call.
pub const MAX_TOKENS: u32 = 2000;
/// Sampling temperature for a generation call.
pub const TEMPERATURE: f32 = 0.7;
/// Nucleus-sampling threshold for a generation call.
pub const TOP_P: f32 = 0.9;

/// Generate a recipe for the given request using the given provider.
///
/// Provider failures (transport, auth, quota) propagate; malformed model
/// output does not, it is absorbed into the fallback recipe.
pub async fn generate_recipe(
    llm: &dyn LlmProvider,
    request: &RecipeRequest,
) -> Result<Recipe, LlmError> {
    let prompt = build_recipe_prompt(request);

    tracing::debug!(
        provider = llm.provider_name(),
        model = llm.model_name(),
        ingredients = request.ingredients.len(),
        "requesting recipe generation"
    );

    let raw = llm
        .complete(CompletionRequest {
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        })
        .await?;

    Ok(normalize_response(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider that records the request it receives, so tests can
    /// observe what the pipeline actually sends.
    #[derive(Debug, Default)]
    struct RecordingProvider {
        seen: Mutex<Option<CompletionRequest>>,
    }

    #[async_trait]
    impl LlmProvider for RecordingProvider {
        async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
            *self.seen.lock().unwrap() = Some(request);
            Ok("{}".to_string())
        }

        fn provider_name(&self) -> &'static str {
            "recording"
        }

        fn model_name(&self) -> &str {
            "recording-model"
        }
    }

    #[tokio::test]
    async fn test_generation_parameters_reach_the_provider() {
        let provider = RecordingProvider::default();
        let request = RecipeRequest::new(vec!["chicken".to_string()]);

        generate_recipe(&provider, &request).await.unwrap();

        let seen = provider.seen.lock().unwrap();
        let sent = seen.as_ref().expect("provider was never called");

        assert_eq!(sent.max_tokens, 2000);
        assert_eq!(sent.temperature, 0.7);
        assert_eq!(sent.top_p, 0.9);
        assert_eq!(sent.prompt, build_recipe_prompt(&request));
    }

    #[tokio::test]
    async fn test_generate_with_fake_provider() {
        let provider = FakeProvider::with_recipe_responses();
        let request = RecipeRequest::new(vec!["chicken".to_string(), "soy sauce".to_string()]);

        let recipe = generate_recipe(&provider, &request).await.unwrap();

        assert_eq!(recipe.title(), Some("Simple Stir Fry"));
        assert_eq!(recipe.source, crate::types::AI_GENERATED_SOURCE);
    }

    #[tokio::test]
    async fn test_generate_unparseable_output_falls_back() {
        let provider = FakeProvider::with_response(
            "Generate a detailed recipe",
            "Sorry, I can't help with that.",
        );
        let request = RecipeRequest::new(vec!["rocks".to_string()]);

        let recipe = generate_recipe(&provider, &request).await.unwrap();

        assert_eq!(
            recipe.fields["instructions"],
            serde_json::json!(["Sorry, I can't help with that."])
        );
    }

    #[tokio::test]
    async fn test_generate_propagates_provider_errors() {
        let provider = FakeProvider::new();
        let request = RecipeRequest::new(vec!["chicken".to_string()]);

        let result = generate_recipe(&provider, &request).await;
        assert!(result.is_err());
    }
}
