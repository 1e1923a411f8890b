//! POST /login handler.

use axum::extract::State;
use axum::response::Json;
use serde_json::{Value, json};

use crate::api::AppState;
use crate::error::ApiError;
use crate::validate::validate_login;

/// Authenticate and hand out an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let input = validate_login(&payload)
        .map_err(|e| ApiError::Validation(e.message().to_string()))?;

    let success = state
        .authenticator
        .login(&input.username, &input.password)
        .await?;

    Ok(Json(json!({
        "success": true,
        "accessToken": success.access_token,
        "data": {
            "id": success.id,
            "username": success.username,
        }
    })))
}
