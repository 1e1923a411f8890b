//! Authentication: password checking, token issuance, and the access
//! guard applied to recipe mutations.
//!
//! ## Security model
//!
//! - One global credential set; any valid token grants every mutation
//! - Login failures never reveal whether the username exists
//! - Tokens are stateless HS256 JWTs; no server-side revocation

mod authenticator;
mod guard;
mod password;
mod token;

pub use authenticator::{Authenticator, LoginSuccess};
pub use guard::AuthUser;
pub use password::{BcryptVerifier, DUMMY_HASH, PasswordVerifier, hash_password};
pub use token::{Claims, DEFAULT_TOKEN_TTL_SECS, TokenConfig, TokenSigner};
