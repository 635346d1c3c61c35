pub mod generate;
pub mod llm;
pub mod types;

pub use generate::{build_recipe_prompt, generate_recipe, normalize_response};
pub use llm::{
    create_provider_from_env, ClaudeProvider, CompletionRequest, FakeProvider, LlmError,
    LlmProvider,
};
pub use types::{Recipe, RecipeRequest, AI_GENERATED_SOURCE};
