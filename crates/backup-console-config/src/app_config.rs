//! Application configuration
//!
//! Configuration loaded from `.backup-console.toml`, with environment
//! overrides for the backend location and credentials.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Overrides `backend_url`
pub const ENV_URL: &str = "BACKUP_CONSOLE_URL";
/// Overrides `username`
pub const ENV_USER: &str = "BACKUP_CONSOLE_USER";
/// Overrides `password`
pub const ENV_PASSWORD: &str = "BACKUP_CONSOLE_PASSWORD";

/// Application configuration loaded from `.backup-console.toml`
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the backup backend (e.g., "http://127.0.0.1:5000")
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Console login name
    #[serde(default = "default_username")]
    pub username: String,

    /// Console login password
    #[serde(default)]
    pub password: String,

    /// Timeout for a single backend request. Backups run SSH sessions on the
    /// backend, so this is generous.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Accept self-signed TLS certificates
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            username: default_username(),
            password: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
            accept_invalid_certs: false,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("backend_url", &self.backend_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

impl AppConfig {
    /// Load config from file (or defaults), then apply environment overrides.
    ///
    /// A `.env` file is loaded first if present.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
            Err(_) => log::debug!(".env file not found, will rely on environment variables"),
        }

        let mut config = Self::from_file_or_default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    fn from_file_or_default() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Replace fields with values found by `lookup`. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(url) = lookup(ENV_URL) {
            log::debug!("Backend URL overridden by {}", ENV_URL);
            self.backend_url = url;
        }
        if let Some(user) = lookup(ENV_USER) {
            self.username = user;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.password = password;
        }
    }

    /// Whether a login can be attempted at all.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
