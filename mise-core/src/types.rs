//! Domain types for recipe generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Provenance marker stamped on every recipe produced by the normalizer.
pub const AI_GENERATED_SOURCE: &str = "ai_generated";

/// A request to generate a recipe from a list of ingredients.
///
/// `ingredients` must be non-empty; the HTTP boundary validates this
/// before any model call is made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
    pub difficulty: String,
}

impl RecipeRequest {
    /// Build a request with just ingredients and the default difficulty.
    pub fn new(ingredients: Vec<String>) -> Self {
        Self {
            ingredients,
            dietary_restrictions: Vec::new(),
            cuisine_type: None,
            meal_type: None,
            difficulty: "medium".to_string(),
        }
    }
}

/// A generated recipe document.
///
/// The provenance fields (`id`, `created_at`, `source`) are typed and
/// always set by the normalizer, never taken from model output. The
/// remaining schema fields (`title`, `ingredients`, `instructions`,
/// `nutrition`, ...) live in the flattened map: the model is asked for a
/// specific JSON shape but may omit fields or add extras, and we keep
/// exactly what it returned rather than defaulting absent fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub source: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Recipe {
    /// Stamp fresh provenance onto a set of recipe fields.
    ///
    /// Any `id`, `created_at`, or `source` the model supplied is
    /// discarded: those three are authoritative from us, always.
    pub fn with_provenance(mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        fields.remove("created_at");
        fields.remove("source");

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            source: AI_GENERATED_SOURCE.to_string(),
            fields,
        }
    }

    /// The recipe title, if the model supplied one.
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }
}
