pub mod recipe_store;
pub mod user_store;

pub use recipe_store::{RecipeStore, SurrealRecipeStore};
pub use user_store::{SurrealUserStore, UserStore};
