//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use chrono::NaiveTime;
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub scheduler: SchedulerConfig,
    pub mail: MailConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Apply pending migrations at startup
    pub run_migrations: bool,
}

/// Background sweep configuration
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Seconds between two absence sweeps
    pub absence_sweep_interval_secs: u64,
    /// Wall-clock time (UTC) of the daily payment expiry sweep
    pub payment_sweep_time: NaiveTime,
    /// Days a payment stays valid
    pub payment_validity_days: u32,
    /// Upper bound on a single sweep run
    pub sweep_timeout_secs: u64,
}

impl SchedulerConfig {
    #[must_use]
    pub fn absence_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.absence_sweep_interval_secs)
    }

    #[must_use]
    pub fn payment_validity(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.payment_validity_days))
    }

    #[must_use]
    pub fn sweep_timeout(&self) -> Duration {
        Duration::from_secs(self.sweep_timeout_secs)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            absence_sweep_interval_secs: default_absence_sweep_interval(),
            payment_sweep_time: NaiveTime::MIN,
            payment_validity_days: default_payment_validity_days(),
            sweep_timeout_secs: default_sweep_timeout(),
        }
    }
}

/// Payment reminder mail configuration
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// HTTP mail relay endpoint; reminders are only logged when unset
    pub relay_url: Option<String>,
    pub relay_token: Option<String>,
    pub from: String,
    /// Link embedded in reminder emails
    pub payment_link: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            relay_url: None,
            relay_token: None,
            from: default_mail_from(),
            payment_link: default_payment_link(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "gym-server".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    10
}

fn default_absence_sweep_interval() -> u64 {
    1200 // 20 minutes
}

fn default_payment_validity_days() -> u32 {
    30
}

fn default_sweep_timeout() -> u64 {
    60
}

fn default_mail_from() -> String {
    "no-reply@gym.local".to_string()
}

fn default_payment_link() -> String {
    "http://localhost:5173/clientdas/payment".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let port = match vars.parsed::<u16>("API_PORT")? {
            Some(port) => port,
            None => vars
                .parsed::<u16>("PORT")?
                .ok_or(ConfigError::MissingVar("API_PORT"))?,
        };

        let payment_sweep_time = match vars.get("PAYMENT_SWEEP_TIME") {
            Some(raw) => NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| {
                ConfigError::InvalidValue("PAYMENT_SWEEP_TIME", format!("'{raw}' is not HH:MM"))
            })?,
            None => NaiveTime::MIN,
        };

        let config = Self {
            app: AppSettings {
                name: vars.get("APP_NAME").unwrap_or_else(default_app_name),
                env: vars.parsed("APP_ENV")?.unwrap_or_default(),
            },
            api: ServerConfig {
                host: vars.get("API_HOST").unwrap_or_else(default_host),
                port,
                request_timeout_secs: vars
                    .parsed("REQUEST_TIMEOUT_SECS")?
                    .unwrap_or_else(default_request_timeout),
            },
            database: DatabaseConfig {
                url: vars
                    .get("DATABASE_URL")
                    .ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: vars
                    .parsed("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: vars
                    .parsed("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                acquire_timeout_secs: vars
                    .parsed("DATABASE_ACQUIRE_TIMEOUT_SECS")?
                    .unwrap_or_else(default_acquire_timeout),
                run_migrations: vars.parsed("RUN_MIGRATIONS")?.unwrap_or(true),
            },
            scheduler: SchedulerConfig {
                absence_sweep_interval_secs: vars
                    .parsed("ABSENCE_SWEEP_INTERVAL_SECS")?
                    .unwrap_or_else(default_absence_sweep_interval),
                payment_sweep_time,
                payment_validity_days: vars
                    .parsed("PAYMENT_VALIDITY_DAYS")?
                    .unwrap_or_else(default_payment_validity_days),
                sweep_timeout_secs: vars
                    .parsed("SWEEP_TIMEOUT_SECS")?
                    .unwrap_or_else(default_sweep_timeout),
            },
            mail: MailConfig {
                relay_url: vars.get("MAIL_RELAY_URL"),
                relay_token: vars.get("MAIL_RELAY_TOKEN"),
                from: vars.get("MAIL_FROM").unwrap_or_else(default_mail_from),
                payment_link: vars.get("PAYMENT_LINK").unwrap_or_else(default_payment_link),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: vars
                    .parsed("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: vars
                    .parsed("RATE_LIMIT_BURST")?
                    .unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: vars
                    .get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scheduler.absence_sweep_interval_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "ABSENCE_SWEEP_INTERVAL_SECS",
                "must be greater than zero".to_string(),
            ));
        }
        if self.scheduler.payment_validity_days == 0 {
            return Err(ConfigError::InvalidValue(
                "PAYMENT_VALIDITY_DAYS",
                "must be greater than zero".to_string(),
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::InvalidValue(
                "DATABASE_MIN_CONNECTIONS",
                "exceeds DATABASE_MAX_CONNECTIONS".to_string(),
            ));
        }
        if self.rate_limit.requests_per_second == 0 || self.rate_limit.burst == 0 {
            return Err(ConfigError::InvalidValue(
                "RATE_LIMIT_REQUESTS_PER_SECOND",
                "rate limits must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Variable source; empty values count as unset
struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    fn parsed<T>(&self, key: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue(key, raw)),
            None => Ok(None),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
