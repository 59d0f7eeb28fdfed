use crate::core::{AppError, Result};
use crate::modules::reports::models::DateRangeMode;
use crate::modules::reports::services::InterStatePolicyKind;
use std::env;
use std::str::FromStr;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Source of raw configuration values, keyed by environment variable name
pub type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub gst: GstConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// Report behaviour switches
#[derive(Debug, Clone, Copy)]
pub struct GstConfig {
    /// How a date range with only `from` is interpreted
    pub date_range_mode: DateRangeMode,
    /// How invoices are classified as inter-state
    pub inter_state_policy: InterStatePolicyKind,
}

impl Default for GstConfig {
    fn default() -> Self {
        Self {
            date_range_mode: DateRangeMode::SingleDay,
            inter_state_policy: InterStatePolicyKind::IntraStateOnly,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key/value source
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self> {
        let defaults = GstConfig::default();

        let config = Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_format: parse_or_default(lookup, "LOG_FORMAT", LogFormat::Pretty)?,
            },
            database: DatabaseConfig::from_lookup(lookup)?,
            server: ServerConfig::from_lookup(lookup)?,
            gst: GstConfig {
                date_range_mode: parse_or_default(
                    lookup,
                    "GST_DATE_RANGE_MODE",
                    defaults.date_range_mode,
                )?,
                inter_state_policy: parse_or_default(
                    lookup,
                    "GST_INTER_STATE_POLICY",
                    defaults.inter_state_policy,
                )?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.database.validate()?;

        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "SERVER_PORT must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parse `key` from `lookup`, falling back to `default` when unset.
/// A value that is set but unparseable is a configuration error.
pub(crate) fn parse_or_default<T: FromStr>(lookup: &Lookup<'_>, key: &str, default: T) -> Result<T> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}: '{}'", key, raw))),
        None => Ok(default),
    }
}
