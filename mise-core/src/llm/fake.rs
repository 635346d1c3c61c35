//! Fake LLM provider for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests
//! can exercise the generation pipeline without network access.

use super::{CompletionRequest, LlmError, LlmProvider};
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

/// A fake LLM provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, returns a default response or error.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("{}".to_string()),
        }
    }
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a FakeProvider that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Create a FakeProvider with a canned recipe for generation prompts.
    pub fn with_recipe_responses() -> Self {
        let mut provider = Self::new();

        provider.add_response(
            "Generate a detailed recipe",
            r#"Here is your recipe:
{
    "title": "Simple Stir Fry",
    "description": "A quick weeknight stir fry",
    "prep_time": "10 minutes",
    "cook_time": "15 minutes",
    "total_time": "25 minutes",
    "servings": 4,
    "difficulty": "easy",
    "cuisine": "asian",
    "ingredients": [
        {"item": "chicken breast", "amount": "1 pound", "notes": "sliced thin"},
        {"item": "soy sauce", "amount": "2 tablespoons", "notes": null}
    ],
    "instructions": [
        "Step 1: Heat oil in a wok over high heat.",
        "Step 2: Add chicken and cook until browned."
    ],
    "nutrition": {"calories": 320, "protein": "28g"},
    "tags": ["quick", "weeknight"],
    "tips": ["Slice the chicken while the pan heats."]
}"#,
        );

        provider
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = request.prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                request.prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
