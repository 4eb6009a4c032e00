use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub jwt_secret: String,
    pub token_duration_hours: i64,
    pub max_login_attempts: u32,
    pub lockout_duration_minutes: i64,
    pub default_admin_username: String,
    pub default_admin_password: String,
    pub default_admin_email: String,
    pub database_retry_delay_secs: u64,
    pub cors_origin: Option<String>,
    pub metrics_enabled: bool,
    pub metrics_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let server_port = var("SERVER_PORT", "5000")
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let metrics_enabled = matches!(
            var("METRICS_ENABLED", "false").trim().to_lowercase().as_str(),
            "true" | "1" | "yes"
        );

        Ok(Config {
            database_url: var("DATABASE_URL", "sqlite://gamecafe.db?mode=rwc"),
            server_host: var("SERVER_HOST", "0.0.0.0"),
            server_port,
            jwt_secret,
            token_duration_hours: parse_number(&lookup, "TOKEN_DURATION_HOURS", 8)?,
            max_login_attempts: parse_number(&lookup, "MAX_LOGIN_ATTEMPTS", 5)?,
            lockout_duration_minutes: parse_number(&lookup, "LOCKOUT_DURATION_MINUTES", 120)?,
            default_admin_username: var("DEFAULT_ADMIN_USERNAME", "admin"),
            default_admin_password: var("DEFAULT_ADMIN_PASSWORD", "admin123"),
            default_admin_email: var("DEFAULT_ADMIN_EMAIL", "admin@gamecafe.local"),
            database_retry_delay_secs: parse_number(&lookup, "DATABASE_RETRY_DELAY_SECS", 5)?,
            cors_origin: lookup("CORS_ORIGIN").filter(|s| !s.trim().is_empty()),
            metrics_enabled,
            metrics_port: parse_number(&lookup, "METRICS_PORT", 9000)?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_number<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        None => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JWT_SECRET environment variable not set")]
    MissingJwtSecret,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}
