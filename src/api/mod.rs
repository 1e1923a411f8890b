// REST API surface for the recipe service

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{Authenticator, BcryptVerifier, TokenConfig, TokenSigner};
use crate::db::Db;
use crate::store::{RecipeStore, SurrealRecipeStore, SurrealUserStore};

mod login;
mod recipes;

/// Explicitly constructed, dependency-injected context shared by every
/// handler. There is no ambient global state; tests build an `AppState`
/// with stub stores to inject faults.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<dyn RecipeStore>,
    pub authenticator: Arc<Authenticator>,
    pub tokens: TokenSigner,
}

impl AppState {
    /// Wire the production components over a database handle.
    pub fn new(db: Db, token_config: &TokenConfig) -> Self {
        let tokens = TokenSigner::new(token_config);
        let users = Arc::new(SurrealUserStore::new(db.clone()));
        let authenticator = Arc::new(Authenticator::new(
            users,
            Arc::new(BcryptVerifier),
            tokens.clone(),
        ));

        Self {
            recipes: Arc::new(SurrealRecipeStore::new(db)),
            authenticator,
            tokens,
        }
    }

    /// Assemble a state from pre-built parts. Used by tests to swap in
    /// fault-injecting stores.
    pub fn with_parts(
        recipes: Arc<dyn RecipeStore>,
        authenticator: Arc<Authenticator>,
        tokens: TokenSigner,
    ) -> Self {
        Self {
            recipes,
            authenticator,
            tokens,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/login", post(login::login))
        .route("/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/recipes/{id}",
            get(recipes::get_by_id)
                .patch(recipes::update)
                .delete(recipes::remove),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check() -> Result<Json<Value>, StatusCode> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
