use serde::{Deserialize, Serialize};
use surrealdb::{RecordId, sql::Datetime};

/// Persisted representation of an operator account in SurrealDB.
///
/// Users are created only through the `create-user` CLI command and are
/// never mutated or deleted by the HTTP service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable database identifier for this user (table: `user`).
    pub id: RecordId,
    /// Unique login name.
    pub username: String,
    /// bcrypt hash of the password. Opaque to everything except the
    /// password verifier.
    pub password: String,
    /// When this record was first created.
    pub created_at: Option<Datetime>,
}

/// Persisted representation of a recipe in SurrealDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Store-assigned identifier for this recipe (table: `recipe`).
    pub id: RecordId,
    /// Recipe name, always non-empty.
    pub name: String,
    /// Optional difficulty rating.
    pub difficulty: Option<i64>,
    /// Optional vegetarian flag.
    pub vegetarian: Option<bool>,
    /// When this record was first created.
    pub created_at: Option<Datetime>,
    /// When this record was last updated.
    pub updated_at: Option<Datetime>,
}

/// Payload used when inserting a new recipe, produced by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub difficulty: Option<i64>,
    pub vegetarian: Option<bool>,
}

/// Partial update for an existing recipe, produced by the validator.
/// Only the fields that are `Some` are written to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub difficulty: Option<i64>,
    pub vegetarian: Option<bool>,
}

impl RecipeChanges {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.difficulty.is_none() && self.vegetarian.is_none()
    }
}

/// Wire representation of a recipe as returned by the API.
///
/// The record key is exposed as `_id` to stay compatible with the
/// original document-store identifiers clients already rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegetarian: Option<bool>,
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Self {
            id: record.id.key().to_string(),
            name: record.name,
            difficulty: record.difficulty,
            vegetarian: record.vegetarian,
        }
    }
}
