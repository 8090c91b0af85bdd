use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unknown log format: {other}")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Fallback filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "info,sqlx=warn".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: LogFormat::default(), filter: default_log_filter() }
    }
}

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

/// True when the config file is simply absent; parse errors are not.
fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

impl AppConfig {
    /// Config file first, environment second. Either way the result is validated.
    pub fn load_and_validate() -> Result<Self> {
        Self::load_and_validate_from(&config_path())
    }

    /// Only a missing file falls back to the environment; a broken one is an error.
    pub fn load_and_validate_from(path: &str) -> Result<Self> {
        let _ = dotenvy::dotenv();
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => Self::from_env(),
            Err(e) => return Err(e.context(format!("invalid config file {path}"))),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self { database: DatabaseConfig::from_env(), logging: LoggingConfig::from_env() }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            url: std::env::var("DATABASE_URL").unwrap_or_default(),
            max_connections: env_parse("DB_MAX_CONNECTIONS").unwrap_or(d.max_connections),
            min_connections: env_parse("DB_MIN_CONNECTIONS").unwrap_or(d.min_connections),
            connect_timeout_secs: env_parse("DB_CONNECT_TIMEOUT_SECS").unwrap_or(d.connect_timeout_secs),
            idle_timeout_secs: env_parse("DB_IDLE_TIMEOUT_SECS").unwrap_or(d.idle_timeout_secs),
            max_lifetime_secs: env_parse("DB_MAX_LIFETIME_SECS").unwrap_or(d.max_lifetime_secs),
            acquire_timeout_secs: env_parse("DB_ACQUIRE_TIMEOUT_SECS").unwrap_or(d.acquire_timeout_secs),
            sqlx_logging: env_parse("DB_SQLX_LOGGING").unwrap_or(d.sqlx_logging),
        }
    }

    /// Fill the URL from `DATABASE_URL` when the file left it empty.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        if !self.is_postgres() && !self.is_sqlite() {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive"));
        }
        Ok(())
    }

    pub fn is_postgres(&self) -> bool {
        let lower = self.url.to_lowercase();
        lower.starts_with("postgresql://") || lower.starts_with("postgres://")
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.to_lowercase().starts_with("sqlite:")
    }

    /// In-memory SQLite lives inside its connections, so the pool must not shrink to zero.
    pub fn is_in_memory(&self) -> bool {
        self.is_sqlite() && self.url.contains(":memory:")
    }

    pub fn connect_timeout(&self) -> Duration { Duration::from_secs(self.connect_timeout_secs) }
    pub fn idle_timeout(&self) -> Duration { Duration::from_secs(self.idle_timeout_secs) }
    pub fn max_lifetime(&self) -> Duration { Duration::from_secs(self.max_lifetime_secs) }
    pub fn acquire_timeout(&self) -> Duration { Duration::from_secs(self.acquire_timeout_secs) }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            format: env_parse("LOG_FORMAT").unwrap_or(d.format),
            filter: std::env::var("LOG_FILTER").unwrap_or(d.filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db(url: &str) -> DatabaseConfig {
        DatabaseConfig { url: url.to_string(), ..DatabaseConfig::default() }
    }

    #[test]
    fn parses_full_toml() {
        let cfg = from_toml_str(
            r#"
            [database]
            url = "postgres://u:p@localhost:5432/datasets"
            max_connections = 20
            min_connections = 4
            sqlx_logging = true

            [logging]
            format = "json"
            filter = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.database.max_connections, 20);
        assert_eq!(cfg.database.min_connections, 4);
        assert_eq!(cfg.database.acquire_timeout_secs, 30);
        assert!(cfg.database.sqlx_logging);
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.logging.filter, "debug");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = from_toml_str("").unwrap();
        assert!(cfg.database.url.is_empty());
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.logging.format, LogFormat::Compact);
        assert_eq!(cfg.logging.filter, "info,sqlx=warn");
    }

    #[test]
    fn validate_accepts_postgres_and_sqlite() {
        assert!(db("postgres://localhost/x").validate().is_ok());
        assert!(db("postgresql://localhost/x").validate().is_ok());
        assert!(db("sqlite::memory:").validate().is_ok());
        assert!(db("sqlite://data.db?mode=rwc").validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_urls_and_bounds() {
        assert!(db("").validate().is_err());
        assert!(db("mysql://localhost/x").validate().is_err());

        let mut c = db("postgres://localhost/x");
        c.min_connections = 0;
        assert!(c.validate().is_err());

        let mut c = db("postgres://localhost/x");
        c.min_connections = 5;
        c.max_connections = 2;
        assert!(c.validate().is_err());

        let mut c = db("postgres://localhost/x");
        c.acquire_timeout_secs = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn in_memory_detection() {
        assert!(db("sqlite::memory:").is_in_memory());
        assert!(!db("sqlite://data.db").is_in_memory());
        assert!(!db("postgres://localhost/x").is_in_memory());
    }

    fn temp_config(tag: &str, content: &str) -> std::path::PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let path = std::env::temp_dir().join(format!("dataset-hub-{tag}-{}-{nanos}.toml", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let path = temp_config("broken", "[database\nurl = ");
        let res = AppConfig::load_and_validate_from(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        let err = res.expect_err("syntax error must not fall back to the environment");
        assert!(!is_missing_file(&err));
        assert!(err.to_string().contains("invalid config file"));
    }

    #[test]
    fn valid_config_file_is_loaded() {
        let path = temp_config("valid", "[database]\nurl = \"sqlite::memory:\"\nmax_connections = 3\nmin_connections = 1\n");
        let res = AppConfig::load_and_validate_from(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        let cfg = res.unwrap();
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.database.max_connections, 3);
    }

    #[test]
    fn only_a_missing_file_counts_as_absent() {
        let missing = std::env::temp_dir().join("dataset-hub-does-not-exist.toml");
        let err = load_from_file(missing.to_str().unwrap()).unwrap_err();
        assert!(is_missing_file(&err));
        let err = from_toml_str("[database\nurl = ").unwrap_err();
        assert!(!is_missing_file(&err));
    }

    #[test]
    fn log_format_from_str() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("yaml".parse::<LogFormat>().is_err());
    }
}
