// Core modules
mod auth;
mod db;
mod error;
mod store;
mod validate;

pub mod api;

// Re-export key types and functions
pub use api::{AppState, create_router};
pub use auth::{
    Authenticator, AuthUser, BcryptVerifier, Claims, LoginSuccess, PasswordVerifier, TokenConfig,
    TokenSigner, hash_password,
};
pub use db::{
    DatabaseConfig, Db, Recipe, RecipeChanges, RecipeDraft, RecipeRecord, UserRecord,
    create_connection, ensure_schema,
};
pub use error::ApiError;
pub use store::{RecipeStore, SurrealRecipeStore, SurrealUserStore, UserStore};
pub use validate::{
    LoginInput, ValidationError, validate_login, validate_recipe_create, validate_recipe_update,
};
