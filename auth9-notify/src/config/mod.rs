//! Configuration management for Auth9 notifications

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Claim dialect root used when deriving claim URIs from placeholder tokens
pub const DEFAULT_CLAIM_URI_ROOT: &str = "http://wso2.org/claims/";

/// Locale used when the user has no locale claim
pub const DEFAULT_LOCALE: &str = "en_US";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Public server URL settings
    pub server: ServerConfig,
    /// Placeholder and locale settings
    pub notification: NotificationConfig,
    /// Logging and metrics settings
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Externally reachable base URL (e.g., https://id.example.com/auth)
    pub public_url: Option<String>,
    /// Append `/t/<tenant>` to the tenant-qualified URL placeholder
    pub tenant_qualified_urls: bool,
}

#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub default_locale: String,
    pub claim_uri_root: String,
    /// XML fragment holding the `param.*` placeholder values
    pub placeholders_file: Option<PathBuf>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            claim_uri_root: DEFAULT_CLAIM_URI_ROOT.to_string(),
            placeholders_file: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// "json" or "pretty"
    pub log_format: String,
    pub metrics_enabled: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_format: "pretty".to_string(),
            metrics_enabled: false,
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read configuration from the environment
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| -> Result<bool> {
            match lookup(key) {
                Some(v) => v
                    .trim()
                    .parse::<bool>()
                    .with_context(|| format!("{} must be true or false", key)),
                None => Ok(false),
            }
        };

        Ok(Self {
            server: ServerConfig {
                public_url: lookup("AUTH9_PUBLIC_URL").filter(|v| !v.trim().is_empty()),
                tenant_qualified_urls: flag("AUTH9_TENANT_QUALIFIED_URLS")?,
            },
            notification: NotificationConfig {
                default_locale: lookup("NOTIFICATION_DEFAULT_LOCALE")
                    .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
                claim_uri_root: lookup("NOTIFICATION_CLAIM_URI_ROOT")
                    .unwrap_or_else(|| DEFAULT_CLAIM_URI_ROOT.to_string()),
                placeholders_file: lookup("NOTIFICATION_PLACEHOLDERS_FILE").map(PathBuf::from),
            },
            telemetry: TelemetryConfig {
                log_format: lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
                metrics_enabled: flag("METRICS_ENABLED")?,
            },
        })
    }
}
