//! Server configuration

use chrono_tz::Tz;

/// Configuration errors surfaced at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TIMEZONE: {0}")]
    InvalidTimezone(String),
    #[error("invalid {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Business timezone (IANA name); its calendar day bounds the
    /// in-progress bucket and past-event dates are printed in it
    pub timezone: Tz,
    pub session_ttl_hours: i64,
    /// Sessions older than this get their expiry pushed out on use
    pub session_update_age_hours: i64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Set the `Secure` attribute on the session cookie
    pub cookie_secure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://attendease.db?mode=rwc".into(),
            http_port: 3000,
            environment: "development".into(),
            timezone: chrono_tz::Asia::Kolkata,
            session_ttl_hours: 24 * 7,
            session_update_age_hours: 24,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            cookie_secure: false,
        }
    }
}

/// IANA zone name such as `Asia/Kolkata` or `UTC`
pub fn parse_timezone(raw: &str) -> Result<Tz, ConfigError> {
    raw.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimezone(raw.to_string()))
}

impl Config {
    fn number<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
        match std::env::var(name) {
            Ok(v) if !v.trim().is_empty() => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { name, value: v }),
            _ => Ok(default),
        }
    }

    fn flag(name: &str, default: bool) -> bool {
        std::env::var(name)
            .ok()
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(default)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let environment = std::env::var("ENVIRONMENT").unwrap_or(defaults.environment);

        let timezone = match std::env::var("TIMEZONE") {
            Ok(raw) if !raw.trim().is_empty() => parse_timezone(&raw)?,
            _ => defaults.timezone,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            http_port: Self::number("HTTP_PORT", defaults.http_port)?,
            timezone,
            session_ttl_hours: Self::number("SESSION_TTL_HOURS", defaults.session_ttl_hours)?,
            session_update_age_hours: Self::number(
                "SESSION_UPDATE_AGE_HOURS",
                defaults.session_update_age_hours,
            )?,
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: Self::flag("LOG_JSON", false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            cookie_secure: Self::flag("COOKIE_SECURE", environment != "development"),
            environment,
        })
    }
}
