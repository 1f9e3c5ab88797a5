//! # configs
//!
//! Runtime settings, layered from lowest to highest precedence:
//!
//! 1. `config/default.toml` (optional)
//! 2. a `.env` file in the working directory (optional, loaded into the
//!    process environment)
//! 3. environment variables
//!
//! | Variable        | Default    | Notes                                          |
//! |-----------------|------------|------------------------------------------------|
//! | `DATABASE_URL`  | (required) | `postgres://...`, or `memory://` for in-process |
//! | `HOST`          | `0.0.0.0`  |                                                |
//! | `PORT`          | `3000`     |                                                |
//! | `RESPONSE_MODE` | `redirect` | `json` answers creates with the new id          |
//! | `LOG_FORMAT`    | `pretty`   | `json` for structured logs                     |

use config::{Config, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("database_url must not be empty")]
    EmptyDatabaseUrl,
}

/// How create operations answer: the new id as JSON (automated clients) or
/// a redirect to the page showing the result (browsers).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    Json,
    #[default]
    Redirect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Which document store `database_url` points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database_url: SecretString,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub response_mode: ResponseMode,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Loads `.env` into the process environment. A missing file is not an
/// error; any other failure is returned for the caller to log once tracing
/// is installed.
pub fn load_dotenv() -> Option<dotenvy::Error> {
    unless_missing(dotenvy::dotenv().map(drop))
}

fn unless_missing(result: Result<(), dotenvy::Error>) -> Option<dotenvy::Error> {
    result.err().filter(|e| !e.not_found())
}

impl Settings {
    /// Loads settings from the optional config file and the process
    /// environment. Fails when `DATABASE_URL` is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default())
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        if settings.database_url.expose_secret().trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }
        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn store_backend(&self) -> StoreBackend {
        if self.database_url.expose_secret().starts_with("memory:") {
            StoreBackend::Memory
        } else {
            StoreBackend::Postgres
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_from(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let mut map = config::Map::new();
        for (k, v) in vars {
            map.insert(k.to_string(), v.to_string());
        }
        Settings::from_environment(Environment::default().source(Some(map)))
    }

    #[test]
    fn missing_database_url_is_fatal() {
        let err = load_from(&[("PORT", "8080")]).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn empty_database_url_is_rejected() {
        let err = load_from(&[("DATABASE_URL", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDatabaseUrl));
    }

    #[test]
    fn defaults_apply() {
        let settings = load_from(&[("DATABASE_URL", "postgres://localhost/board")]).unwrap();
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.bind_addr(), "0.0.0.0:3000");
        assert_eq!(settings.response_mode, ResponseMode::Redirect);
        assert_eq!(settings.log_format, LogFormat::Pretty);
        assert_eq!(settings.store_backend(), StoreBackend::Postgres);
    }

    #[test]
    fn overrides_are_read() {
        let settings = load_from(&[
            ("DATABASE_URL", "memory://"),
            ("PORT", "8080"),
            ("RESPONSE_MODE", "json"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.response_mode, ResponseMode::Json);
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.store_backend(), StoreBackend::Memory);
    }

    #[test]
    fn missing_dotenv_file_is_not_reported() {
        assert!(unless_missing(dotenvy::from_path("no/such/dir/.env").map(drop)).is_none());
    }

    #[test]
    fn database_url_is_redacted_in_debug() {
        let settings = load_from(&[("DATABASE_URL", "postgres://user:hunter2@db/board")]).unwrap();
        assert!(!format!("{settings:?}").contains("hunter2"));
    }
}
