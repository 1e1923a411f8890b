//! Password hashing and verification (bcrypt).

use anyhow::Result;
use bcrypt::DEFAULT_COST;

/// A format-valid bcrypt hash used to equalize the timing of failed
/// logins: when the username does not exist we still run a real
/// verification against this hash and discard the result.
pub const DUMMY_HASH: &str =
    "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

/// Opaque verify(plain, hash) capability.
///
/// Injected into the authenticator so tests can force a match or a
/// mismatch without computing real hashes.
pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, plain: &str, hash: &str) -> Result<bool>;
}

/// Production verifier backed by the `bcrypt` crate.
pub struct BcryptVerifier;

impl PasswordVerifier for BcryptVerifier {
    fn verify(&self, plain: &str, hash: &str) -> Result<bool> {
        Ok(bcrypt::verify(plain, hash)?)
    }
}

/// Hash a password for storage. Used by the provisioning CLI only; the
/// service itself never hashes.
pub fn hash_password(plain: &str) -> Result<String> {
    Ok(bcrypt::hash(plain, DEFAULT_COST)?)
}
