//! Access token issuing and verification.
//!
//! Tokens are stateless HS256 JWTs signed with a shared secret. There
//! is no revocation list; validity is signature plus expiry.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Result, anyhow};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Default token lifetime: 30 days. The deployment has a single
/// operator, so long-lived tokens are acceptable.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Token signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// HMAC secret used to sign and verify tokens.
    pub secret: String,
    /// Seconds until an issued token expires.
    pub ttl_secs: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: env::var("RECIPE_TOKEN_SECRET")
                .unwrap_or_else(|_| "insecure-dev-secret".to_string()),
            ttl_secs: env::var("RECIPE_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
        }
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User record key.
    pub sub: String,
    /// Login name at issue time.
    pub username: String,
    /// Issued-at (Unix timestamp).
    pub iat: u64,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
}

/// Issues and verifies access tokens.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl TokenSigner {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl_secs: config.ttl_secs,
        }
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    /// Issue a signed token for the given user.
    pub fn issue(&self, user_id: &str, username: &str) -> Result<String> {
        let now = Self::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token and return its claims.
    ///
    /// Fails on bad signatures, malformed tokens, and expired tokens.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        let claims = data.claims;

        // Expiration check (jsonwebtoken does this, but be explicit)
        if claims.exp < Self::now() {
            return Err(anyhow!("token expired"));
        }

        Ok(claims)
    }
}
