//! MySQL implementation of the RecipeRepository trait.
//!
//! Recipes are stored in a single `recipes` table; the tag, ingredient and
//! instruction lists are kept as JSON text columns and decoded on read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pf_core::domain::entities::recipe::{Recipe, RecipeDraft};
use pf_core::errors::DomainError;
use pf_core::repositories::RecipeRepository;

/// MySQL implementation of RecipeRepository
pub struct MySqlRecipeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRecipeRepository {
    /// Create a new MySQL recipe repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Recipe entity
    fn row_to_recipe(row: &sqlx::mysql::MySqlRow) -> Result<Recipe, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        let tags: String = row.try_get("tags").map_err(|e| DomainError::Database {
            message: format!("Failed to get tags: {}", e),
        })?;
        let ingredients: String = row
            .try_get("ingredients")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get ingredients: {}", e),
            })?;
        let instructions: String = row
            .try_get("instructions")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get instructions: {}", e),
            })?;

        Ok(Recipe {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            tags: decode_list(&tags)?,
            ingredients: decode_list(&ingredients)?,
            instructions: decode_list(&instructions)?,
            published_at: row
                .try_get::<DateTime<Utc>, _>("published_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get published_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl RecipeRepository for MySqlRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, DomainError> {
        let query = r#"
            INSERT INTO recipes (
                id, name, tags, ingredients, instructions, published_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(recipe.id.to_string())
            .bind(&recipe.name)
            .bind(encode_list(&recipe.tags)?)
            .bind(encode_list(&recipe.ingredients)?)
            .bind(encode_list(&recipe.instructions)?)
            .bind(recipe.published_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database insert failed: {}", e),
            })?;

        Ok(recipe)
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, DomainError> {
        let query = r#"
            SELECT id, name, tags, ingredients, instructions, published_at
            FROM recipes
            ORDER BY published_at
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_recipe).collect()
    }

    async fn update(&self, id: Uuid, draft: &RecipeDraft) -> Result<bool, DomainError> {
        // rows_affected is 0 for a no-op update of identical values, so
        // existence is checked separately
        let found = sqlx::query("SELECT id FROM recipes WHERE id = ? LIMIT 1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;
        if found.is_none() {
            return Ok(false);
        }

        let query = r#"
            UPDATE recipes
            SET name = ?, tags = ?, ingredients = ?, instructions = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&draft.name)
            .bind(encode_list(&draft.tags)?)
            .bind(encode_list(&draft.ingredients)?)
            .bind(encode_list(&draft.instructions)?)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database update failed: {}", e),
            })?;

        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database delete failed: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}

fn encode_list(values: &[String]) -> Result<String, DomainError> {
    serde_json::to_string(values).map_err(|e| DomainError::Internal {
        message: format!("Failed to encode list column: {}", e),
    })
}

fn decode_list(raw: &str) -> Result<Vec<String>, DomainError> {
    serde_json::from_str(raw).map_err(|e| DomainError::Database {
        message: format!("Malformed list column: {}", e),
    })
}
