//! Bearer-token gate for recipe mutations.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use crate::api::AppState;
use crate::auth::token::Claims;
use crate::error::ApiError;

/// Decoded caller identity, extracted from `Authorization: Bearer`.
///
/// Any failure — missing or malformed header, bad signature, expired
/// token — rejects with 403 "Unauthorized". Authorization here is
/// all-or-nothing: holding a valid token grants every mutation, so the
/// claims are attached for handlers but nothing downstream branches on
/// them.
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "))
            .ok_or(ApiError::Unauthorized)?;

        let claims = state.tokens.verify(token).map_err(|e| {
            debug!("bearer token rejected: {e:#}");
            ApiError::Unauthorized
        })?;

        Ok(AuthUser(claims))
    }
}
