//! Handlers for the recipe CRUD operations.
//!
//! Mutations (create, update, delete) require a valid bearer token via
//! the [`AuthUser`] extractor; reads are open. Store faults surface as
//! 500 with a fixed per-operation message and the detail only in the
//! logs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use tracing::{debug, error};

use crate::api::AppState;
use crate::auth::AuthUser;
use crate::db::Recipe;
use crate::error::ApiError;
use crate::validate::{validate_recipe_create, validate_recipe_update};

/// POST /recipes — persist a new recipe.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let draft = validate_recipe_create(&payload)
        .map_err(|e| ApiError::Validation(e.message().to_string()))?;

    let record = state.recipes.create(&draft).await.map_err(|e| {
        error!("recipe insert failed: {e:#}");
        ApiError::Internal("Failed to save recipes!".to_string())
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": Recipe::from(record),
        })),
    ))
}

/// GET /recipes — fetch the whole collection. An empty collection is a
/// success, not an error.
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let records = state.recipes.find_all().await.map_err(|e| {
        error!("recipe listing failed: {e:#}");
        ApiError::Internal("Some error occurred while retrieving recipes.".to_string())
    })?;

    let recipes: Vec<Recipe> = records.into_iter().map(Recipe::from).collect();

    Ok(Json(json!({
        "success": true,
        "data": recipes,
    })))
}

/// GET /recipes/{id} — fetch one recipe.
///
/// A malformed identifier and a well-formed-but-absent one produce the
/// same 400 response; clients cannot tell the cases apart.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let record = state
        .recipes
        .find_by_id(&id)
        .await
        .map_err(|e| {
            error!("recipe lookup failed: {e:#}");
            ApiError::Internal("Some error occurred while retrieving recipe details.".to_string())
        })?
        .ok_or_else(|| ApiError::NotFound(id))?;

    Ok(Json(json!({
        "success": true,
        "data": Recipe::from(record),
    })))
}

/// PATCH /recipes/{id} — partial update; only supplied fields change.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let changes = validate_recipe_update(&payload)
        .map_err(|e| ApiError::Validation(e.message().to_string()))?;

    let record = state
        .recipes
        .update(&id, &changes)
        .await
        .map_err(|e| {
            error!("recipe update failed: {e:#}");
            ApiError::Internal("An error occured while updating recipe".to_string())
        })?
        .ok_or_else(|| ApiError::NotFound(id))?;

    Ok(Json(json!({
        "success": true,
        "data": Recipe::from(record),
    })))
}

/// DELETE /recipes/{id} — idempotent: deleting an id that does not
/// resolve still reports success.
pub async fn remove(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let removed = state.recipes.delete(&id).await.map_err(|e| {
        error!("recipe delete failed: {e:#}");
        ApiError::Internal("An error occured while deleting recipe".to_string())
    })?;

    if !removed {
        debug!("delete of unknown recipe id {id}, reporting success");
    }

    Ok(Json(json!({
        "success": true,
        "message": "Recipe successfully deleted",
    })))
}
