//! Field-level validation of incoming request bodies.
//!
//! Bodies arrive as already-parsed `serde_json::Value` because the
//! legacy wire contract cares about JSON types, not just shapes: a
//! numeric string is not a number and a `"true"` string is not a
//! boolean. Deserializing straight into typed structs would surface
//! those as framework errors with the wrong status and message, so the
//! checks live here as pure functions producing either a typed payload
//! or a specific failure reason.

use std::fmt;

use serde_json::Value;

use crate::db::{RecipeChanges, RecipeDraft};

/// A specific validation failure. The message text is part of the wire
/// contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `username` or `password` absent, empty, or not a string.
    MissingCredentials,
    /// `name` absent, empty, or not a string.
    MissingName,
    /// `difficulty` present but not an integer.
    InvalidDifficulty,
    /// `vegetarian` present but not a boolean.
    InvalidVegetarian,
    /// Update body with zero recognized fields.
    EmptyUpdate,
}

impl ValidationError {
    /// Client-facing message for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "username or password can not be empty",
            Self::MissingName => "name field can not be empty",
            Self::InvalidDifficulty => "difficulty field should be a number",
            Self::InvalidVegetarian => "vegetarian field should be boolean",
            Self::EmptyUpdate => "field should not be empty",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Credentials extracted from a login body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

// A JSON null is treated the same as an absent field throughout.

fn non_empty_string(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn is_present(body: &Value, field: &str) -> bool {
    matches!(body.get(field), Some(v) if !v.is_null())
}

/// Validate a login body: both `username` and `password` must be
/// non-empty strings.
pub fn validate_login(body: &Value) -> Result<LoginInput, ValidationError> {
    let username = non_empty_string(body, "username")
        .ok_or(ValidationError::MissingCredentials)?;
    let password = non_empty_string(body, "password")
        .ok_or(ValidationError::MissingCredentials)?;

    Ok(LoginInput { username, password })
}

fn check_difficulty(body: &Value) -> Result<Option<i64>, ValidationError> {
    if !is_present(body, "difficulty") {
        return Ok(None);
    }
    body.get("difficulty")
        .and_then(|v| v.as_i64())
        .map(Some)
        .ok_or(ValidationError::InvalidDifficulty)
}

fn check_vegetarian(body: &Value) -> Result<Option<bool>, ValidationError> {
    if !is_present(body, "vegetarian") {
        return Ok(None);
    }
    body.get("vegetarian")
        .and_then(|v| v.as_bool())
        .map(Some)
        .ok_or(ValidationError::InvalidVegetarian)
}

/// Validate a recipe creation body.
///
/// Violations are reported in a fixed order: name, then difficulty,
/// then vegetarian.
pub fn validate_recipe_create(body: &Value) -> Result<RecipeDraft, ValidationError> {
    let name = non_empty_string(body, "name").ok_or(ValidationError::MissingName)?;
    let difficulty = check_difficulty(body)?;
    let vegetarian = check_vegetarian(body)?;

    Ok(RecipeDraft {
        name,
        difficulty,
        vegetarian,
    })
}

/// Validate a recipe update body.
///
/// No field is required, but the body must carry at least one
/// recognized field, and each supplied field gets the same type check
/// as on creation.
pub fn validate_recipe_update(body: &Value) -> Result<RecipeChanges, ValidationError> {
    let has_any = is_present(body, "name")
        || is_present(body, "difficulty")
        || is_present(body, "vegetarian");
    if !has_any {
        return Err(ValidationError::EmptyUpdate);
    }

    let name = if is_present(body, "name") {
        Some(non_empty_string(body, "name").ok_or(ValidationError::MissingName)?)
    } else {
        None
    };
    let difficulty = check_difficulty(body)?;
    let vegetarian = check_vegetarian(body)?;

    Ok(RecipeChanges {
        name,
        difficulty,
        vegetarian,
    })
}
