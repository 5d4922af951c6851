//! Unified error handling for notification assembly

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Notification error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The server's public URL could not be determined
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No recipient address could be resolved for the user
    #[error("Delivery address error: {0}")]
    DeliveryAddress(String),

    #[error("Template lookup error: {0}")]
    TemplateLookup(String),

    /// User attribute lookup failed (absorbed on the claim-fetch path)
    #[error("Attribute lookup error: {0}")]
    AttributeLookup(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "configuration",
            AppError::DeliveryAddress(_) => "delivery_address",
            AppError::TemplateLookup(_) => "template_lookup",
            AppError::AttributeLookup(_) => "attribute_lookup",
            AppError::Validation(_) => "validation",
            AppError::Xml(_) => "xml",
            AppError::Internal(_) => "internal",
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for AppError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        AppError::Xml(err.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(err.to_string())
    }
}
