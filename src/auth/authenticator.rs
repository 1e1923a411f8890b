//! Login flow: credential verification and token issuance.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};

use crate::auth::password::{DUMMY_HASH, PasswordVerifier};
use crate::auth::token::TokenSigner;
use crate::error::ApiError;
use crate::store::UserStore;

/// Both the unknown-user and wrong-password paths report this exact
/// message so clients cannot enumerate usernames.
const INCORRECT_CREDENTIALS: &str = "Incorrect username or password";
const LOGIN_FAILED: &str = "login failed.";

/// Successful login payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginSuccess {
    pub access_token: String,
    pub id: String,
    pub username: String,
}

/// Verifies a username/password pair against the user store and issues
/// a signed access token on success.
pub struct Authenticator {
    users: Arc<dyn UserStore>,
    passwords: Arc<dyn PasswordVerifier>,
    tokens: TokenSigner,
}

impl Authenticator {
    pub fn new(
        users: Arc<dyn UserStore>,
        passwords: Arc<dyn PasswordVerifier>,
        tokens: TokenSigner,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Authenticate already shape-validated credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginSuccess, ApiError> {
        let user = self.users.find_by_username(username).await.map_err(|e| {
            error!("user lookup failed: {e:#}");
            ApiError::Internal(LOGIN_FAILED.to_string())
        })?;

        let Some(user) = user else {
            // Unknown user: run a dummy verification so the response
            // time matches the wrong-password path.
            let _ = self.passwords.verify(password, DUMMY_HASH);
            debug!("login rejected: unknown username");
            return Err(ApiError::Validation(INCORRECT_CREDENTIALS.to_string()));
        };

        let matched = self
            .passwords
            .verify(password, &user.password)
            .map_err(|e| {
                error!("password verification failed: {e:#}");
                ApiError::Internal(LOGIN_FAILED.to_string())
            })?;

        if !matched {
            debug!("login rejected: wrong password");
            return Err(ApiError::Validation(INCORRECT_CREDENTIALS.to_string()));
        }

        let id = user.id.key().to_string();
        let access_token = self.tokens.issue(&id, &user.username).map_err(|e| {
            error!("token signing failed: {e:#}");
            ApiError::Internal(LOGIN_FAILED.to_string())
        })?;

        Ok(LoginSuccess {
            access_token,
            id,
            username: user.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::TokenConfig;
    use crate::db::UserRecord;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use surrealdb::RecordId;

    // Test stubs

    struct StubUserStore {
        user: Option<UserRecord>,
        fail: bool,
    }

    impl StubUserStore {
        fn with_user(hash: &str) -> Self {
            Self {
                user: Some(UserRecord {
                    id: RecordId::from_table_key("user", "test123"),
                    username: "admin".to_string(),
                    password: hash.to_string(),
                    created_at: None,
                }),
                fail: false,
            }
        }

        fn empty() -> Self {
            Self {
                user: None,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                user: None,
                fail: true,
            }
        }
    }

    #[async_trait]
    impl UserStore for StubUserStore {
        async fn find_by_username(&self, _username: &str) -> Result<Option<UserRecord>> {
            if self.fail {
                return Err(anyhow!("store unavailable"));
            }
            Ok(self.user.clone())
        }
    }

    struct StubVerifier {
        matches: bool,
    }

    impl PasswordVerifier for StubVerifier {
        fn verify(&self, _plain: &str, _hash: &str) -> Result<bool> {
            Ok(self.matches)
        }
    }

    fn signer() -> TokenSigner {
        TokenSigner::new(&TokenConfig {
            secret: "test-secret".to_string(),
            ttl_secs: 3600,
        })
    }

    fn authenticator(users: StubUserStore, matches: bool) -> Authenticator {
        Authenticator::new(
            Arc::new(users),
            Arc::new(StubVerifier { matches }),
            signer(),
        )
    }

    #[tokio::test]
    async fn test_login_success_issues_token() {
        let sut = authenticator(StubUserStore::with_user("hash"), true);

        let success = sut.login("admin", "okay").await.unwrap();
        assert!(!success.access_token.is_empty());
        assert_eq!(success.id, "test123");
        assert_eq!(success.username, "admin");

        let claims = signer().verify(&success.access_token).unwrap();
        assert_eq!(claims.sub, "test123");
        assert_eq!(claims.username, "admin");
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_share_a_message() {
        let unknown = authenticator(StubUserStore::empty(), true)
            .login("admin2", "okay")
            .await
            .unwrap_err();
        let mismatch = authenticator(StubUserStore::with_user("hash"), false)
            .login("admin", "okay2")
            .await
            .unwrap_err();

        let (ApiError::Validation(a), ApiError::Validation(b)) = (unknown, mismatch) else {
            panic!("expected validation errors");
        };
        assert_eq!(a, b);
        assert_eq!(a, "Incorrect username or password");
    }

    #[tokio::test]
    async fn test_store_fault_maps_to_internal() {
        let err = authenticator(StubUserStore::failing(), true)
            .login("admin", "okay")
            .await
            .unwrap_err();

        let ApiError::Internal(msg) = err else {
            panic!("expected internal error");
        };
        assert_eq!(msg, "login failed.");
    }
}
