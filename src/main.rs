use anyhow::{Context, Result};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use club_api::config::Config;
use club_api::router::{create_router, AppState};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting club API server...");

    // --- Configuration ---
    let config_path =
        env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());
    info!("Loading configuration from: {}", config_path);
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path))?;

    // --- Database Setup ---
    info!("Setting up database connection pool...");
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder()
        .build(manager)
        .context("Failed to create database connection pool")?;
    let db_pool = Arc::new(pool);
    info!("Database pool created successfully.");

    // --- Migrations ---
    info!("Running pending migrations...");
    let mut conn = db_pool
        .get()
        .context("Failed to check out a connection for migrations")?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
    drop(conn);
    info!("Migrations up to date.");

    // --- Router ---
    let state = AppState::new(db_pool, Arc::new(config.clone()));
    let app = create_router(state)?;
    info!("Router created.");

    // --- Server ---
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen_addr format in config: {}", config.listen_addr))?;
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind TCP listener")?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    info!("Application shut down.");
    Ok(())
}
