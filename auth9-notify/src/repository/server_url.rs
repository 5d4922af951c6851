//! Public server URL resolution

use crate::config::ServerConfig;
use crate::error::{AppError, Result};
use url::Url;

/// Externally reachable server URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrls {
    /// Full public URL, including any context path
    pub absolute_public_url: String,
    /// Scheme, host and port only
    pub absolute_public_url_without_path: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait ServerUrlResolver: Send + Sync {
    fn resolve(&self) -> Result<ServerUrls>;

    /// Whether tenant URLs are qualified with `/t/<tenant>`
    fn tenant_qualified_urls(&self) -> bool;
}

/// Server URLs derived from static configuration
#[derive(Debug, Clone)]
pub struct ConfiguredServerUrls {
    public_url: Option<String>,
    tenant_qualified_urls: bool,
}

impl ConfiguredServerUrls {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            public_url: config.public_url.clone(),
            tenant_qualified_urls: config.tenant_qualified_urls,
        }
    }
}

impl ServerUrlResolver for ConfiguredServerUrls {
    fn resolve(&self) -> Result<ServerUrls> {
        let raw = self.public_url.as_deref().ok_or_else(|| {
            AppError::Configuration("Server public URL is not configured".to_string())
        })?;

        let url = Url::parse(raw).map_err(|e| {
            AppError::Configuration(format!("Invalid server public URL '{}': {}", raw, e))
        })?;

        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(AppError::Configuration(format!(
                "Server public URL '{}' has no host",
                raw
            )));
        }

        Ok(ServerUrls {
            absolute_public_url: url.as_str().trim_end_matches('/').to_string(),
            absolute_public_url_without_path: origin.ascii_serialization(),
        })
    }

    fn tenant_qualified_urls(&self) -> bool {
        self.tenant_qualified_urls
    }
}
