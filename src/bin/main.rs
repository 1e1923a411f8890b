use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_service::{AppState, DatabaseConfig, TokenConfig};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipe-service")]
#[command(about = "Recipe CRUD API with bearer-token authentication")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP service
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(long, default_value = "memory")]
        db_url: String,
        /// Secret used to sign access tokens
        #[arg(long, env = "RECIPE_TOKEN_SECRET")]
        token_secret: Option<String>,
        /// Seconds until issued tokens expire
        #[arg(long, env = "RECIPE_TOKEN_TTL_SECS")]
        token_ttl_secs: Option<u64>,
    },
    /// Initialize the database schema
    Init {
        #[arg(long, default_value = "memory")]
        db_url: String,
    },
    /// Provision an operator account
    CreateUser {
        username: String,
        /// Password for the new account
        #[arg(long, env = "RECIPE_USER_PASSWORD")]
        password: String,
        #[arg(long, default_value = "memory")]
        db_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("recipe_service=info".parse()?),
        )
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            db_url,
            token_secret,
            token_ttl_secs,
        } => {
            let db_config = DatabaseConfig {
                url: db_url,
                ..Default::default()
            };
            info!("Using database url: {}", db_config.url);

            let db = recipe_service::create_connection(db_config).await?;
            recipe_service::ensure_schema(&db).await?;

            let mut token_config = TokenConfig::default();
            if let Some(secret) = token_secret {
                token_config.secret = secret;
            }
            if let Some(ttl) = token_ttl_secs {
                token_config.ttl_secs = ttl;
            }

            let app = recipe_service::create_router(AppState::new(db, &token_config));

            let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
            info!("Recipe service listening on http://0.0.0.0:{}", port);

            axum::serve(listener, app).await?;
        }
        Commands::Init { db_url } => {
            let db_config = DatabaseConfig {
                url: db_url,
                ..Default::default()
            };
            info!("Using database url for initialization: {}", db_config.url);

            info!("Initializing database...");
            let db = recipe_service::create_connection(db_config).await?;
            recipe_service::ensure_schema(&db).await?;
            info!("Database initialized successfully");
        }
        Commands::CreateUser {
            username,
            password,
            db_url,
        } => {
            let db_config = DatabaseConfig {
                url: db_url,
                ..Default::default()
            };
            let db = recipe_service::create_connection(db_config).await?;
            recipe_service::ensure_schema(&db).await?;

            let hash = recipe_service::hash_password(&password)?;
            let user = recipe_service::SurrealUserStore::new(db)
                .create(&username, &hash)
                .await?;

            println!("User created successfully!");
            println!();
            println!("  Id:       {}", user.id.key());
            println!("  Username: {}", user.username);
        }
    }

    Ok(())
}
