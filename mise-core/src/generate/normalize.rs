//! Normalization of raw model output into a recipe document.
//!
//! Models rarely return bare JSON; the usual shape is prose wrapped
//! around a JSON object. We slice out the candidate object, parse it
//! strictly, and fall back to a fixed placeholder recipe when that
//! fails. This function is total: every string input yields a recipe.

use crate::types::Recipe;
use serde_json::{json, Map, Value};

/// Turn raw model output into a recipe document.
///
/// Whatever happens, the returned recipe carries freshly generated
/// `id` and `created_at` and the `"ai_generated"` source marker;
/// model-supplied values for those keys are never trusted.
pub fn normalize_response(raw: &str) -> Recipe {
    match extract_object(raw) {
        Some(fields) => Recipe::with_provenance(fields),
        None => fallback_recipe(raw),
    }
}

/// Slice the candidate JSON object out of the raw text and parse it.
///
/// The slice runs from the first `{` to the last `}` in the whole text,
/// not a balanced match. If the model emits stray braces in surrounding
/// prose the slice stops being valid JSON and we fall back, rather than
/// guessing at which braces delimit the object.
fn extract_object(raw: &str) -> Option<Map<String, Value>> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }

    // Both delimiters are single-byte chars, so byte slicing is safe here.
    match serde_json::from_str(&raw[start..=end]) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Build the fixed placeholder recipe used when parsing fails.
///
/// The raw text is preserved verbatim as the single instruction step so
/// nothing the model produced is lost.
fn fallback_recipe(raw: &str) -> Recipe {
    let mut fields = Map::new();
    fields.insert("title".to_string(), json!("AI Generated Recipe"));
    fields.insert("description".to_string(), json!("Recipe generated by AI"));
    fields.insert("prep_time".to_string(), json!("20 minutes"));
    fields.insert("cook_time".to_string(), json!("30 minutes"));
    fields.insert("total_time".to_string(), json!("50 minutes"));
    fields.insert("servings".to_string(), json!(4));
    fields.insert("difficulty".to_string(), json!("medium"));
    fields.insert("cuisine".to_string(), json!("various"));
    fields.insert("ingredients".to_string(), json!([]));
    fields.insert("instructions".to_string(), json!([raw]));
    fields.insert("nutrition".to_string(), json!({}));
    fields.insert("tags".to_string(), json!(["ai-generated"]));
    fields.insert("tips".to_string(), json!([]));

    Recipe::with_provenance(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AI_GENERATED_SOURCE;

    #[test]
    fn test_embedded_json_is_parsed() {
        let raw = r#"Here you go: {"title":"Pasta","servings":2} enjoy!"#;
        let recipe = normalize_response(raw);

        assert_eq!(recipe.title(), Some("Pasta"));
        assert_eq!(recipe.fields["servings"], json!(2));
        assert_eq!(recipe.source, AI_GENERATED_SOURCE);
        assert!(!recipe.id.is_nil());
    }

    #[test]
    fn test_plain_text_falls_back() {
        let recipe = normalize_response("not json at all");

        assert_eq!(recipe.title(), Some("AI Generated Recipe"));
        assert_eq!(recipe.fields["tags"], json!(["ai-generated"]));
        assert_eq!(recipe.fields["instructions"], json!(["not json at all"]));
        assert_eq!(recipe.fields["ingredients"], json!([]));
        assert_eq!(recipe.fields["servings"], json!(4));
    }

    #[test]
    fn test_empty_string_falls_back() {
        let recipe = normalize_response("");

        assert_eq!(recipe.title(), Some("AI Generated Recipe"));
        assert_eq!(recipe.fields["instructions"], json!([""]));
        assert_eq!(recipe.source, AI_GENERATED_SOURCE);
    }

    #[test]
    fn test_unbalanced_braces_fall_back() {
        let recipe = normalize_response("{ this never closes properly");
        assert_eq!(recipe.title(), Some("AI Generated Recipe"));

        let recipe = normalize_response("closing only }");
        assert_eq!(recipe.title(), Some("AI Generated Recipe"));

        // '}' before '{' means there is no candidate slice at all
        let recipe = normalize_response("} backwards {");
        assert_eq!(recipe.title(), Some("AI Generated Recipe"));
    }

    #[test]
    fn test_two_brace_blocks_slice_first_to_last() {
        // The slice spans both objects and the text between them, which
        // is not valid JSON as a whole, so this lands in the fallback.
        let raw = r#"{"a":1} middle text {"title":"X"}"#;
        let recipe = normalize_response(raw);

        assert_eq!(recipe.title(), Some("AI Generated Recipe"));
        assert_eq!(recipe.fields["instructions"], json!([raw]));
    }

    #[test]
    fn test_model_provenance_is_overwritten() {
        let raw = r#"{"id":"fake-id","created_at":"2000-01-01","source":"model","title":"Pie"}"#;
        let recipe = normalize_response(raw);

        assert_eq!(recipe.title(), Some("Pie"));
        assert_eq!(recipe.source, AI_GENERATED_SOURCE);
        assert!(!recipe.fields.contains_key("id"));
        assert!(!recipe.fields.contains_key("created_at"));
    }

    #[test]
    fn test_extra_fields_are_preserved() {
        let raw = r#"{"title":"Pie","chef_notes":"secret"}"#;
        let recipe = normalize_response(raw);

        assert_eq!(recipe.fields["chef_notes"], json!("secret"));
    }

    #[test]
    fn test_empty_object_keeps_fields_absent() {
        let recipe = normalize_response("{}");

        assert!(recipe.fields.is_empty());
        assert_eq!(recipe.source, AI_GENERATED_SOURCE);
    }

    #[test]
    fn test_non_ascii_text_around_json() {
        let raw = "Voilà! {\"title\":\"Crêpes\"} — bon appétit";
        let recipe = normalize_response(raw);

        assert_eq!(recipe.title(), Some("Crêpes"));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let a = normalize_response("not json");
        let b = normalize_response("not json");
        let c = normalize_response(r#"{"title":"Pasta"}"#);

        assert_ne!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert_ne!(b.id, c.id);
    }
}
