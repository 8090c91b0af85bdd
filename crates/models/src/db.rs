use std::env;
use std::str::FromStr;

use configs::DatabaseConfig;
use once_cell::sync::Lazy;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, SqlxSqliteConnector};
use tracing::info;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string())
});

/// Connect using `DATABASE_URL` and the pool settings from the environment.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: DATABASE_URL.clone(), ..DatabaseConfig::from_env() };
    connect_with_config(&cfg).await
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    cfg.validate()?;
    if cfg.is_in_memory() {
        return connect_in_memory(cfg).await;
    }

    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(cfg.connect_timeout())
        .acquire_timeout(cfg.acquire_timeout())
        .idle_timeout(cfg.idle_timeout())
        .max_lifetime(cfg.max_lifetime())
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

/// In-memory SQLite lives as long as its only connection, so that connection
/// is never reaped for idleness or age.
async fn connect_in_memory(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = SqliteConnectOptions::from_str(&cfg.url)?;
    if !cfg.sqlx_logging {
        opts = opts.disable_statement_logging();
    }
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(cfg.acquire_timeout())
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    info!(backend = "sqlite", "in-memory database connected");
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Round-trip check used by health probes and tests.
pub async fn ping(db: &DatabaseConnection) -> anyhow::Result<()> {
    db.ping().await?;
    Ok(())
}
