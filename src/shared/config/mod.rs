//! Application configuration module
//!
//! Provides configuration types for the application. Values are collected
//! into an [`AppConfigBuilder`] (from a TOML file section, environment
//! variables, or code) and validated once by [`AppConfigBuilder::build`].
//! The resulting [`AppConfig`] is immutable for the life of the process.

use serde::Deserialize;
use thiserror::Error;

/// Default listen address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;
/// Default route prefix for API endpoints
pub const DEFAULT_API_PREFIX: &str = "/api";
/// Default token lifetime in seconds
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 360_000;
/// Longest accepted token lifetime (ten years)
pub const MAX_TOKEN_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;
/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub database: DatabaseConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for API routes, without a trailing slash (`"/api"`, or `""`)
    pub api_prefix: String,
}

/// Token and password hashing settings
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign bearer tokens
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
    /// bcrypt cost for newly hashed passwords
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Token lifetime as a signed duration
    ///
    /// `None` when `token_ttl_secs` is outside `1..=MAX_TOKEN_TTL_SECS`.
    pub fn token_ttl(&self) -> Option<chrono::Duration> {
        if !(1..=MAX_TOKEN_TTL_SECS).contains(&self.token_ttl_secs) {
            return None;
        }
        chrono::TimeDelta::try_seconds(self.token_ttl_secs)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Persistence settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string. `None` selects the in-memory store.
    pub url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if self.auth.token_ttl().is_none() {
            return Err(ConfigError::invalid(
                "token_ttl_secs",
                format!("must be between 1 and {MAX_TOKEN_TTL_SECS}"),
            ));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::invalid(
                "bcrypt_cost",
                format!("must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"),
            ));
        }
        if !self.server.api_prefix.is_empty() && !self.server.api_prefix.starts_with('/') {
            return Err(ConfigError::invalid("api_prefix", "must start with '/'"));
        }
        Ok(())
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    api_prefix: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_secs: Option<i64>,
    bcrypt_cost: Option<u32>,
    database_url: Option<String>,
}

impl AppConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(prefix.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_secs(mut self, secs: i64) -> Self {
        self.token_ttl_secs = Some(secs);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Overlay every value present in a parsed config file
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        let FileConfig {
            server,
            auth,
            database,
        } = file;
        self.host = server.host.or(self.host);
        self.port = server.port.or(self.port);
        self.api_prefix = server.api_prefix.or(self.api_prefix);
        self.jwt_secret = auth.jwt_secret.or(self.jwt_secret);
        self.token_ttl_secs = auth.token_ttl_secs.or(self.token_ttl_secs);
        self.bcrypt_cost = auth.bcrypt_cost.or(self.bcrypt_cost);
        self.database_url = database.url.or(self.database_url);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let api_prefix = self
            .api_prefix
            .unwrap_or_else(|| DEFAULT_API_PREFIX.to_string())
            .trim_end_matches('/')
            .to_string();

        let config = AppConfig {
            server: ServerConfig {
                host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: self.port.unwrap_or(DEFAULT_PORT),
                api_prefix,
            },
            auth: AuthConfig {
                jwt_secret: self
                    .jwt_secret
                    .ok_or(ConfigError::MissingValue("jwt_secret"))?,
                token_ttl_secs: self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS),
                bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            },
            database: DatabaseConfig {
                url: self.database_url.filter(|url| !url.is_empty()),
            },
        };
        config.validate()?;
        Ok(config)
    }
}

/// On-disk configuration file layout (TOML). Every key is optional.
///
/// ```toml
/// [server]
/// port = 5000
/// api_prefix = "/api"
///
/// [auth]
/// jwt_secret = "change-me"
/// token_ttl_secs = 360000
/// bcrypt_cost = 10
///
/// [database]
/// url = "postgres://localhost/socialnet"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub server: ServerSection,
    pub auth: AuthSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub api_prefix: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthSection {
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: Option<i64>,
    pub bcrypt_cost: Option<u32>,
}

impl std::fmt::Debug for AuthSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSection")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            message: message.into(),
        }
    }
}
