//! Operator account storage.

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::db::{Db, UserRecord};

/// Read access to operator accounts, as needed by the login flow.
///
/// The service itself never creates or mutates users; provisioning goes
/// through [`SurrealUserStore::create`] from the CLI.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by login name.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>>;
}

/// User store backed by SurrealDB.
pub struct SurrealUserStore {
    db: Db,
}

impl SurrealUserStore {
    /// Create a new user store.
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Provision a new operator account with an already-hashed password.
    ///
    /// Fails if the username is taken (unique index on `user.username`).
    pub async fn create(&self, username: &str, password_hash: &str) -> Result<UserRecord> {
        let username = username.to_string();
        let password_hash = password_hash.to_string();

        let query = r#"
            CREATE user CONTENT {
                username: $username,
                password: $password
            }
        "#;

        let mut res = self.db
            .query(query)
            .bind(("username", username))
            .bind(("password", password_hash))
            .await?;

        let users: Vec<UserRecord> = res.take(0)?;
        users.into_iter().next()
            .ok_or_else(|| anyhow!("failed to create user record"))
    }
}

#[async_trait]
impl UserStore for SurrealUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let username = username.to_string();

        let query = r#"
            SELECT * FROM user
            WHERE username = $username
            LIMIT 1
        "#;

        let mut res = self.db
            .query(query)
            .bind(("username", username))
            .await?;

        let users: Vec<UserRecord> = res.take(0)?;
        Ok(users.into_iter().next())
    }
}
