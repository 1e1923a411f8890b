use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;

pub type Db = Surreal<Any>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: env::var("SURREALDB_URL")
                .unwrap_or_else(|_| "memory".to_string()),
            namespace: env::var("SURREALDB_NAMESPACE")
                .unwrap_or_else(|_| "recipes".to_string()),
            database: env::var("SURREALDB_DATABASE")
                .unwrap_or_else(|_| "service".to_string()),
            username: env::var("SURREALDB_USERNAME").ok(),
            password: env::var("SURREALDB_PASSWORD").ok(),
        }
    }
}

pub async fn create_connection(config: DatabaseConfig) -> Result<Db> {
    let db = surrealdb::engine::any::connect(config.url).await?;

    // Sign in if credentials are provided
    if let (Some(username), Some(password)) = (config.username, config.password) {
        db.signin(Root {
            username: &username,
            password: &password,
        })
        .await?;
    }

    // Use the specified namespace and database
    db.use_ns(config.namespace).use_db(config.database).await?;

    Ok(db)
}

pub async fn ensure_schema(db: &Db) -> Result<()> {
    // Define schema for each table
    let schema_queries = vec![
        // User table: operator accounts, provisioned via the CLI only
        "DEFINE TABLE user SCHEMAFULL;
         DEFINE FIELD username ON TABLE user TYPE string ASSERT $value != '';
         DEFINE FIELD password ON TABLE user TYPE string;
         DEFINE FIELD created_at ON TABLE user VALUE time::now();",

        // Recipe table
        "DEFINE TABLE recipe SCHEMAFULL;
         DEFINE FIELD name ON TABLE recipe TYPE string ASSERT $value != '';
         DEFINE FIELD difficulty ON TABLE recipe TYPE option<int>;
         DEFINE FIELD vegetarian ON TABLE recipe TYPE option<bool>;
         DEFINE FIELD created_at ON TABLE recipe VALUE time::now();
         DEFINE FIELD updated_at ON TABLE recipe VALUE time::now();",

        // Usernames are the login key, so they must be unique
        "DEFINE INDEX user_username ON TABLE user COLUMNS username UNIQUE;",
    ];

    for query in schema_queries {
        db.query(query).await?;
    }

    Ok(())
}
