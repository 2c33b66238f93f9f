/**
 * Server Configuration
 *
 * This module loads the server configuration and selects the credential
 * store backing the auth core.
 *
 * # Configuration Sources
 *
 * Later sources override earlier ones:
 * 1. Built-in defaults (`shared::config`)
 * 2. TOML file at `APP_CONFIG`, or `config/config.<APP_ENV>.toml` if present
 * 3. Environment variables (a `.env` file is loaded first via `dotenv`)
 *
 * # Error Handling
 *
 * Unlike optional services, the auth core cannot run without a signing
 * secret or with a database it failed to reach, so every error here is
 * fatal at startup.
 */

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use sqlx::PgPool;

use crate::backend::auth::memory_store::InMemoryCredentialStore;
use crate::backend::auth::users::{CredentialStore, PgCredentialStore};
use crate::backend::error::StartupError;
use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, DatabaseConfig, FileConfig};

/// Explicit config file path
pub const CONFIG_PATH_VAR: &str = "APP_CONFIG";
/// Selects `config/config.<APP_ENV>.toml` when `APP_CONFIG` is unset
pub const CONFIG_ENV_VAR: &str = "APP_ENV";
const DEFAULT_APP_ENV: &str = "development";

/// Load configuration from `.env`, the optional config file and the process
/// environment
///
/// # Example
///
/// ```rust,no_run
/// use socialnet::backend::server::config::load_config;
///
/// let config = load_config().expect("JWT_SECRET must be set");
/// println!("binding {}", config.bind_address());
/// ```
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenv::dotenv().ok();

    let env = |key: &str| std::env::var(key).ok();
    let path = config_file_path(&env);
    resolve_config(path.as_deref(), env)
}

/// Locate the config file, if any
///
/// An explicit `APP_CONFIG` is returned even if it does not exist, so that a
/// typo surfaces as a read error instead of silently falling back to
/// defaults.
pub fn config_file_path(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(path) = env(CONFIG_PATH_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let app_env = env(CONFIG_ENV_VAR).unwrap_or_else(|| DEFAULT_APP_ENV.to_string());
    let path = PathBuf::from(format!("config/config.{app_env}.toml"));
    path.exists().then_some(path)
}

/// Build a validated configuration from an optional file and an
/// environment lookup
pub fn resolve_config(
    file: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = AppConfig::builder();

    if let Some(path) = file {
        builder = builder.merge_file(read_config_file(path)?);
        tracing::info!("Loaded configuration file {}", path.display());
    }

    apply_env_overrides(builder, env)?.build()
}

/// Read and parse a TOML config file
pub fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

fn apply_env_overrides(
    mut builder: AppConfigBuilder,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AppConfigBuilder, ConfigError> {
    if let Some(secret) = env("JWT_SECRET") {
        builder = builder.jwt_secret(secret);
    }
    if let Some(url) = env("DATABASE_URL") {
        builder = builder.database_url(url);
    }
    if let Some(host) = env("SERVER_HOST") {
        builder = builder.host(host);
    }
    if let Some(port) = env("SERVER_PORT") {
        builder = builder.port(parse_var("SERVER_PORT", &port)?);
    }
    if let Some(prefix) = env("API_PREFIX") {
        builder = builder.api_prefix(prefix);
    }
    if let Some(ttl) = env("TOKEN_TTL_SECS") {
        builder = builder.token_ttl_secs(parse_var("TOKEN_TTL_SECS", &ttl)?);
    }
    if let Some(cost) = env("BCRYPT_COST") {
        builder = builder.bcrypt_cost(parse_var("BCRYPT_COST", &cost)?);
    }
    Ok(builder)
}

fn parse_var<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::invalid(key, format!("{value:?}: {e}")))
}

/// Select and initialize the credential store
///
/// With a database URL this connects a `PgPool` and runs the migrations in
/// `migrations/`; both failures abort startup. Without one, identities live
/// in process memory and are lost on restart.
pub async fn load_credential_store(
    database: &DatabaseConfig,
) -> Result<Arc<dyn CredentialStore>, StartupError> {
    let Some(url) = database.url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory credential store.");
        return Ok(Arc::new(InMemoryCredentialStore::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(url).await.inspect_err(|e| {
        tracing::error!("Failed to create database connection pool: {}", e);
    })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.inspect_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(PgCredentialStore::new(pool)))
}
