//! Recipe entity, the central aggregate of the Plateful catalogue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published recipe.
///
/// The identifier and publish timestamp are assigned once at creation and
/// never change afterwards; updates replace the remaining fields wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier for the recipe
    pub id: Uuid,

    /// Display name of the dish
    pub name: String,

    /// Free-form labels used for search (e.g. "italian", "vegan")
    #[serde(default)]
    pub tags: Vec<String>,

    /// Ingredient lines, in shopping order
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Preparation steps, in cooking order
    #[serde(default)]
    pub instructions: Vec<String>,

    /// Timestamp when the recipe was published
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
}

/// Incoming recipe data for create and update operations.
///
/// Carries every caller-controlled field of a [`Recipe`]; the identifier and
/// publish timestamp are assigned server-side. Absent list fields
/// deserialize to empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Creates a new recipe from a draft, assigning a fresh identifier and
    /// the current timestamp
    pub fn new(draft: RecipeDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            tags: draft.tags,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            published_at: Utc::now(),
        }
    }

    /// Replaces the mutable fields from a draft, keeping the identifier and
    /// publish timestamp
    pub fn apply(&mut self, draft: RecipeDraft) {
        self.name = draft.name;
        self.tags = draft.tags;
        self.ingredients = draft.ingredients;
        self.instructions = draft.instructions;
    }

    /// Checks whether any tag matches the given one, ignoring ASCII case
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, tags: &[&str]) -> RecipeDraft {
        RecipeDraft {
            name: name.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ingredients: vec!["ingredient".to_string()],
            instructions: vec!["step".to_string()],
        }
    }

    #[test]
    fn test_new_recipe_assigns_id_and_timestamp() {
        let before = Utc::now();
        let recipe = Recipe::new(draft("Carbonara", &["italian", "pasta"]));

        assert!(!recipe.id.is_nil());
        assert_eq!(recipe.name, "Carbonara");
        assert_eq!(recipe.tags, vec!["italian", "pasta"]);
        assert!(recipe.published_at >= before);
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut recipe = Recipe::new(draft("Carbonara", &["italian"]));
        let id = recipe.id;
        let published_at = recipe.published_at;

        recipe.apply(draft("Cacio e Pepe", &["roman"]));

        assert_eq!(recipe.id, id);
        assert_eq!(recipe.published_at, published_at);
        assert_eq!(recipe.name, "Cacio e Pepe");
        assert_eq!(recipe.tags, vec!["roman"]);
    }

    #[test]
    fn test_has_tag_is_case_insensitive() {
        let recipe = Recipe::new(draft("Carbonara", &["Italian"]));

        assert!(recipe.has_tag("italian"));
        assert!(recipe.has_tag("ITALIAN"));
        assert!(!recipe.has_tag("french"));
    }

    #[test]
    fn test_has_tag_on_empty_list() {
        let recipe = Recipe::new(RecipeDraft {
            name: "Plain".to_string(),
            ..RecipeDraft::default()
        });

        assert!(!recipe.has_tag("anything"));
        assert!(!recipe.has_tag(""));
    }

    #[test]
    fn test_draft_deserializes_missing_lists_as_empty() {
        let draft: RecipeDraft = serde_json::from_str(r#"{"name": "Toast"}"#)
            .unwrap();

        assert_eq!(draft.name, "Toast");
        assert!(draft.tags.is_empty());
        assert!(draft.ingredients.is_empty());
        assert!(draft.instructions.is_empty());
    }

    #[test]
    fn test_recipe_serializes_camel_case_timestamp() {
        let recipe = Recipe::new(draft("Toast", &[]));
        let json = serde_json::to_value(&recipe).unwrap();

        assert!(json.get("publishedAt").is_some());
        assert!(json.get("published_at").is_none());
        assert!(json.get("ingredients").is_some());
    }
}
