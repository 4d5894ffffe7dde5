// Configuration management

use crate::core::errors::CatalogError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
///
/// All configuration is validated on load with clear error messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server configuration
    pub bind_address: String,
    pub port: u16,

    // Middleware configuration
    pub request_timeout_secs: u64,
    pub body_size_limit_bytes: usize,
    /// `["*"]` allows any origin
    pub cors_allowed_origins: Vec<String>,

    // Catalog seeding
    pub seed_events: bool,
    pub seed_events_path: Option<PathBuf>,

    // Logging configuration
    pub log_level: String,
    pub log_format: String, // "json" or "text"
}

impl Default for Config {
    fn default() -> Self {
        Self::test_config()
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Supports `.env` file loading in development (via dotenv crate).
    pub fn from_env() -> Result<Self, CatalogError> {
        // Skip in test environment to avoid interfering with test environment variables
        #[cfg(not(test))]
        {
            dotenv::dotenv().ok();
        }

        let config = Self {
            bind_address: Self::get_env_or_default("BIND_ADDRESS", "0.0.0.0"),
            port: Self::parse_port()?,
            request_timeout_secs: Self::parse_u64_or_default("REQUEST_TIMEOUT_SECS", 30)?,
            body_size_limit_bytes: Self::parse_usize_or_default("BODY_SIZE_LIMIT_BYTES", 1024 * 1024)?,
            cors_allowed_origins: Self::parse_list(&Self::get_env_or_default("CORS_ALLOWED_ORIGINS", "*")),
            seed_events: Self::parse_bool_or_default("SEED_EVENTS", true)?,
            seed_events_path: Self::get_optional_path("SEED_EVENTS_PATH"),
            log_level: Self::get_env_or_default("LOG_LEVEL", "info"),
            log_format: Self::get_env_or_default("LOG_FORMAT", "text"),
        };

        config.validate()?;

        Ok(config)
    }

    /// Socket address string for the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Whether CORS should allow any origin
    pub fn cors_allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }

    fn get_env_or_default(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    fn get_optional_path(key: &str) -> Option<PathBuf> {
        match env::var(key) {
            Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
            _ => None,
        }
    }

    /// Parse port from PORT environment variable
    fn parse_port() -> Result<u16, CatalogError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
        let port = port_str.parse::<u16>().map_err(|e| {
            CatalogError::Configuration(format!("Invalid PORT value '{}': {}", port_str, e))
        })?;

        if port == 0 {
            return Err(CatalogError::Configuration(
                "PORT must be between 1 and 65535".to_string(),
            ));
        }

        Ok(port)
    }

    fn parse_u64_or_default(key: &str, default: u64) -> Result<u64, CatalogError> {
        match env::var(key) {
            Ok(value) => Self::parse_positive(key, &value),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_or_default(key: &str, default: usize) -> Result<usize, CatalogError> {
        match env::var(key) {
            Ok(value) => Self::parse_positive(key, &value),
            Err(_) => Ok(default),
        }
    }

    fn parse_positive<T>(key: &str, value: &str) -> Result<T, CatalogError>
    where
        T: std::str::FromStr + PartialEq + Default,
        T::Err: std::fmt::Display,
    {
        let parsed = value.parse::<T>().map_err(|e| {
            CatalogError::Configuration(format!("Invalid {} value '{}': {}", key, value, e))
        })?;

        if parsed == T::default() {
            return Err(CatalogError::Configuration(format!(
                "{} must be greater than 0",
                key
            )));
        }

        Ok(parsed)
    }

    fn parse_bool_or_default(key: &str, default: bool) -> Result<bool, CatalogError> {
        match env::var(key) {
            Ok(value) => match value.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(CatalogError::Configuration(format!(
                    "Invalid {} value '{}': expected true or false",
                    key, value
                ))),
            },
            Err(_) => Ok(default),
        }
    }

    /// Split a comma-separated list, dropping blank entries
    fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validate all configuration values
    fn validate(&self) -> Result<(), CatalogError> {
        if let Some(ref path) = self.seed_events_path {
            if !path.is_file() {
                return Err(CatalogError::Configuration(format!(
                    "Seed events file not found at {:?}",
                    path
                )));
            }
        }

        if self.cors_allowed_origins.is_empty() {
            return Err(CatalogError::Configuration(
                "CORS_ALLOWED_ORIGINS must list at least one origin or '*'".to_string(),
            ));
        }

        Self::validate_log_level(&self.log_level)?;
        Self::validate_log_format(&self.log_format)?;

        Ok(())
    }

    fn validate_log_level(level: &str) -> Result<(), CatalogError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&level.to_lowercase().as_str()) {
            return Err(CatalogError::Configuration(format!(
                "Invalid LOG_LEVEL '{}': must be one of {}",
                level,
                valid_levels.join(", ")
            )));
        }
        Ok(())
    }

    fn validate_log_format(format: &str) -> Result<(), CatalogError> {
        if format != "json" && format != "text" {
            return Err(CatalogError::Configuration(format!(
                "Invalid LOG_FORMAT '{}': must be 'json' or 'text'",
                format
            )));
        }
        Ok(())
    }

    /// Create a configuration for tests
    ///
    /// This bypasses environment variable loading and file validation.
    pub fn test_config() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            request_timeout_secs: 30,
            body_size_limit_bytes: 1024 * 1024,
            cors_allowed_origins: vec!["*".to_string()],
            seed_events: true,
            seed_events_path: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}
