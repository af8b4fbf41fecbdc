use serde::{Deserialize, Serialize};
use validator::Validate;

use pf_core::domain::RecipeDraft;

/// Recipe fields accepted by the create and update endpoints
///
/// The list fields default to empty when omitted, so a minimal body of
/// `{"name": "..."}` is a valid recipe.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecipePayload {
    #[validate(length(min = 1, message = "Recipe name must not be empty"))]
    pub name: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub instructions: Vec<String>,
}

impl From<RecipePayload> for RecipeDraft {
    fn from(payload: RecipePayload) -> Self {
        RecipeDraft {
            name: payload.name,
            tags: payload.tags,
            ingredients: payload.ingredients,
            instructions: payload.instructions,
        }
    }
}

/// Body returned after a successful create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecipeResponse {
    pub message: String,

    #[serde(rename = "recipeID")]
    pub recipe_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_accepts_minimal_body() {
        let payload: RecipePayload = serde_json::from_str(r#"{"name": "Toast"}"#).unwrap();
        assert!(payload.validate().is_ok());
        assert!(payload.tags.is_empty());
        assert!(payload.ingredients.is_empty());
        assert!(payload.instructions.is_empty());
    }

    #[test]
    fn test_payload_rejects_empty_name() {
        let payload: RecipePayload = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_create_response_field_casing() {
        let response = CreateRecipeResponse {
            message: "New recipe added with id abc".to_string(),
            recipe_id: "abc".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("recipeID").is_some());
        assert!(json.get("recipe_id").is_none());
    }
}
