//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ZENITH_API_URL` - Backend base URL (default: `http://localhost:8080`)
//! - `ZENITH_DATA_DIR` - Directory for the session store file
//!   (default: `<platform data dir>/zenith`)
//! - `ZENITH_HTTP_TIMEOUT_SECS` - Per-request timeout (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("No data directory available; set ZENITH_DATA_DIR")]
    NoDataDir,
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend REST API.
    pub api_url: Url,
    /// Directory holding the session store file.
    pub data_dir: PathBuf,
    /// Per-request HTTP timeout.
    pub http_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable, or if
    /// no data directory can be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_env_or_default("ZENITH_API_URL", DEFAULT_API_URL);
        let mut api_url = Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("ZENITH_API_URL".to_string(), e.to_string()))?;
        // A trailing slash makes Url::join treat the whole path as a prefix
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        let data_dir = match std::env::var("ZENITH_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join("zenith"),
        };

        let timeout_secs = get_env_or_default(
            "ZENITH_HTTP_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        );
        let timeout_secs = timeout_secs.parse::<u64>().map_err(|e| {
            ConfigError::InvalidEnvVar("ZENITH_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            api_url,
            data_dir,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Path of the session store file inside the data directory.
    #[must_use]
    pub fn session_file(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
