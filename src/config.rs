use std::env;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Process configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub oauth: OAuthConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// TLS to the datastore is an explicit flag, not inferred from the URL.
    pub require_tls: bool,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Absolute URL the identity provider redirects back to.
    pub redirect_url: String,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Allow-list of external logins accepted at sign-in. Usually length 1.
    pub allowed_logins: Vec<String>,
    pub session_ttl_hours: i64,
}

impl DatabaseConfig {
    /// Connection URL handed to the pool. When TLS is required and the URL
    /// carries no `sslmode` parameter, `sslmode=require` is appended.
    pub fn connection_url(&self) -> String {
        if !self.require_tls || self.url.contains("sslmode=") {
            return self.url.clone();
        }
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}sslmode=require", self.url, separator)
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::MissingVar(key));

        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let require_tls = parse_or(&lookup, "DATABASE_REQUIRE_TLS", false)?;
        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 20u32)?;
        let min_connections = parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", 2u32)?;
        let session_ttl_hours = parse_or(&lookup, "SESSION_TTL_HOURS", 720i64)?;

        let public_base_url = required("PUBLIC_BASE_URL")?;
        let redirect_url = format!(
            "{}/api/auth/callback",
            public_base_url.trim_end_matches('/')
        );

        let allowed_logins: Vec<String> = required("ADMIN_ALLOWED_LOGINS")?
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if allowed_logins.is_empty() {
            return Err(ConfigError::InvalidVar(
                "ADMIN_ALLOWED_LOGINS",
                "must contain at least one login".to_string(),
            ));
        }

        Ok(AppConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                require_tls,
                max_connections,
                min_connections,
                connect_timeout: Duration::from_secs(5),
                acquire_timeout: Duration::from_secs(5),
            },
            oauth: OAuthConfig {
                client_id: required("OAUTH_GITHUB_CLIENT_ID")?,
                client_secret: required("OAUTH_GITHUB_CLIENT_SECRET")?,
                redirect_url,
            },
            auth: AuthConfig {
                allowed_logins,
                session_ttl_hours,
            },
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidVar(key, raw)),
        None => Ok(default),
    }
}

/// Loads `.env.{RUST_ENV}` first, falling back to `.env`.
pub fn load_env_files() {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
