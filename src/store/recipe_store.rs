//! Recipe storage.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::{Value, json};
use surrealdb::RecordId;

use crate::db::{Db, RecipeChanges, RecipeDraft, RecipeRecord};

/// Document operations over the recipe collection.
///
/// Handlers depend on this trait rather than the concrete SurrealDB
/// implementation so tests can substitute a fault-injecting fake.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Persist a new recipe and return the stored record.
    async fn create(&self, draft: &RecipeDraft) -> Result<RecipeRecord>;

    /// Fetch every recipe in the collection.
    async fn find_all(&self) -> Result<Vec<RecipeRecord>>;

    /// Fetch one recipe by its record key. Unknown keys (including
    /// keys that never could have been assigned) come back as `None`.
    async fn find_by_id(&self, id: &str) -> Result<Option<RecipeRecord>>;

    /// Apply a partial update, writing only the supplied fields.
    /// Returns `None` when the key does not resolve to a record.
    async fn update(&self, id: &str, changes: &RecipeChanges) -> Result<Option<RecipeRecord>>;

    /// Remove one recipe. Returns whether a record was actually removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Recipe store backed by SurrealDB.
pub struct SurrealRecipeStore {
    db: Db,
}

impl SurrealRecipeStore {
    /// Create a new recipe store.
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    fn record_id(id: &str) -> RecordId {
        RecordId::from_table_key("recipe", id)
    }
}

#[async_trait]
impl RecipeStore for SurrealRecipeStore {
    async fn create(&self, draft: &RecipeDraft) -> Result<RecipeRecord> {
        // Absent optional fields are left out of the document entirely
        // rather than stored as nulls.
        let mut content = serde_json::Map::new();
        content.insert("name".to_string(), json!(draft.name));
        if let Some(difficulty) = draft.difficulty {
            content.insert("difficulty".to_string(), json!(difficulty));
        }
        if let Some(vegetarian) = draft.vegetarian {
            content.insert("vegetarian".to_string(), json!(vegetarian));
        }

        let mut res = self.db
            .query("CREATE recipe CONTENT $data")
            .bind(("data", Value::Object(content)))
            .await?;

        let created: Vec<RecipeRecord> = res.take(0)?;
        created.into_iter().next()
            .ok_or_else(|| anyhow!("failed to create recipe record"))
    }

    async fn find_all(&self) -> Result<Vec<RecipeRecord>> {
        let mut res = self.db
            .query("SELECT * FROM recipe ORDER BY created_at ASC")
            .await?;

        let recipes: Vec<RecipeRecord> = res.take(0)?;
        Ok(recipes)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<RecipeRecord>> {
        let query = "SELECT * FROM recipe WHERE id = $id LIMIT 1";

        let mut res = self.db
            .query(query)
            .bind(("id", Self::record_id(id)))
            .await?;

        let recipes: Vec<RecipeRecord> = res.take(0)?;
        Ok(recipes.into_iter().next())
    }

    async fn update(&self, id: &str, changes: &RecipeChanges) -> Result<Option<RecipeRecord>> {
        // Build the update query dynamically based on which fields are set
        let mut updates = Vec::new();

        if changes.name.is_some() {
            updates.push("name = $name");
        }
        if changes.difficulty.is_some() {
            updates.push("difficulty = $difficulty");
        }
        if changes.vegetarian.is_some() {
            updates.push("vegetarian = $vegetarian");
        }

        if updates.is_empty() {
            return self.find_by_id(id).await;
        }

        updates.push("updated_at = time::now()");

        let query = format!(
            "UPDATE recipe SET {} WHERE id = $id RETURN AFTER",
            updates.join(", ")
        );

        let mut query_builder = self.db.query(query);
        query_builder = query_builder.bind(("id", Self::record_id(id)));

        if let Some(name) = changes.name.clone() {
            query_builder = query_builder.bind(("name", name));
        }
        if let Some(difficulty) = changes.difficulty {
            query_builder = query_builder.bind(("difficulty", difficulty));
        }
        if let Some(vegetarian) = changes.vegetarian {
            query_builder = query_builder.bind(("vegetarian", vegetarian));
        }

        let mut res = query_builder.await?;
        let updated: Vec<RecipeRecord> = res.take(0)?;
        Ok(updated.into_iter().next())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let query = "DELETE recipe WHERE id = $id RETURN BEFORE";

        let mut res = self.db
            .query(query)
            .bind(("id", Self::record_id(id)))
            .await?;

        let removed: Vec<RecipeRecord> = res.take(0)?;
        Ok(!removed.is_empty())
    }
}
