use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::catalog::Locale;

/// Distinguishes runtime behavior for different stages of the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the command-line tool.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalog: CatalogConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = env::var("PPE_CATALOG_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let locale = match env::var("PPE_LOCALE") {
            Ok(value) => {
                Locale::parse(&value).ok_or(ConfigError::InvalidLocale { value })?
            }
            Err(_) => Locale::default(),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            catalog: CatalogConfig { path, locale },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the catalogue export lives and which language labels use.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
    pub locale: Locale,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLocale { value: String },
    MissingCatalogPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLocale { value } => {
                write!(f, "PPE_LOCALE must be 'en' or 'it', got '{value}'")
            }
            ConfigError::MissingCatalogPath => {
                write!(f, "no catalogue given: pass --catalog or set PPE_CATALOG_PATH")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
