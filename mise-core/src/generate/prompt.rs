//! Prompt construction for recipe generation.

use crate::types::RecipeRequest;

/// Fixed footer specifying the JSON shape the model should emit.
const FORMAT_FOOTER: &str = r#"
Please provide the recipe in the following JSON format:
{
    "title": "Recipe Name",
    "description": "Brief description of the dish",
    "prep_time": "15 minutes",
    "cook_time": "30 minutes",
    "total_time": "45 minutes",
    "servings": 4,
    "difficulty": "medium",
    "cuisine": "cuisine type",
    "ingredients": [
        {
            "item": "ingredient name",
            "amount": "1 cup",
            "notes": "optional preparation notes"
        }
    ],
    "instructions": [
        "Step 1: Detailed instruction",
        "Step 2: Another detailed instruction"
    ],
    "nutrition": {
        "calories": 350,
        "protein": "25g",
        "carbs": "30g",
        "fat": "15g"
    },
    "tags": ["tag1", "tag2", "tag3"],
    "tips": ["Cooking tip 1", "Cooking tip 2"]
}

Please ensure all ingredients from the input list are used in the recipe where possible.
"#;

/// Render the generation prompt for a recipe request.
///
/// Pure function of its input: identical requests produce byte-identical
/// prompts. The dietary/cuisine/meal lines appear only when the request
/// actually carries a value for them.
pub fn build_recipe_prompt(request: &RecipeRequest) -> String {
    let mut prompt = format!(
        "Generate a detailed recipe using the following ingredients: {}\n\n\
         Requirements:\n\
         - Difficulty level: {}\n",
        request.ingredients.join(", "),
        request.difficulty
    );

    if !request.dietary_restrictions.is_empty() {
        prompt.push_str(&format!(
            "- Dietary restrictions: {}\n",
            request.dietary_restrictions.join(", ")
        ));
    }

    if let Some(cuisine) = request.cuisine_type.as_deref().filter(|c| !c.is_empty()) {
        prompt.push_str(&format!("- Cuisine type: {}\n", cuisine));
    }

    if let Some(meal) = request.meal_type.as_deref().filter(|m| !m.is_empty()) {
        prompt.push_str(&format!("- Meal type: {}\n", meal));
    }

    prompt.push_str(FORMAT_FOOTER);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> RecipeRequest {
        RecipeRequest {
            ingredients: vec![
                "chicken".to_string(),
                "rice".to_string(),
                "broccoli".to_string(),
            ],
            dietary_restrictions: vec!["gluten-free".to_string()],
            cuisine_type: Some("thai".to_string()),
            meal_type: Some("dinner".to_string()),
            difficulty: "easy".to_string(),
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = full_request();
        assert_eq!(build_recipe_prompt(&request), build_recipe_prompt(&request));
    }

    #[test]
    fn test_prompt_contains_every_ingredient() {
        let request = full_request();
        let prompt = build_recipe_prompt(&request);

        for ingredient in &request.ingredients {
            assert!(prompt.contains(ingredient), "missing {}", ingredient);
        }
        assert!(prompt.contains("chicken, rice, broccoli"));
    }

    #[test]
    fn test_prompt_contains_all_constraint_lines() {
        let prompt = build_recipe_prompt(&full_request());

        assert!(prompt.contains("- Difficulty level: easy"));
        assert!(prompt.contains("- Dietary restrictions: gluten-free"));
        assert!(prompt.contains("- Cuisine type: thai"));
        assert!(prompt.contains("- Meal type: dinner"));
    }

    #[test]
    fn test_optional_lines_absent_when_not_provided() {
        let request = RecipeRequest::new(vec!["eggs".to_string()]);
        let prompt = build_recipe_prompt(&request);

        assert!(prompt.contains("- Difficulty level: medium"));
        assert!(!prompt.contains("Dietary restrictions"));
        assert!(!prompt.contains("Cuisine type:"));
        assert!(!prompt.contains("Meal type:"));
    }

    #[test]
    fn test_prompt_contains_schema_footer() {
        let prompt = build_recipe_prompt(&RecipeRequest::new(vec!["eggs".to_string()]));

        assert!(prompt.contains("Please provide the recipe in the following JSON format"));
        assert!(prompt.contains("\"title\": \"Recipe Name\""));
        assert!(prompt.contains("\"instructions\""));
        assert!(prompt.contains("used in the recipe where possible"));
    }
}
