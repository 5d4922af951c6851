//! Placeholder extraction, resolution and substitution
//!
//! Placeholders are written as `{{token}}` in any template field.

pub mod engine;
pub mod extract;
pub mod resolve;
pub mod static_values;

pub use engine::TemplateEngine;
pub use extract::extract_placeholders;
pub use resolve::{classify, PlaceholderKind, PlaceholderResolver};
pub use static_values::{StaticPlaceholderSource, StaticPlaceholders};

/// Caller-supplied recipient override
pub const SEND_TO: &str = "sendTo";
/// Current calendar year, set when the caller left it empty
pub const CURRENT_YEAR: &str = "current-year";
/// Tenant of the user, used to qualify the tenant URL
pub const TENANT_DOMAIN: &str = "tenant-domain";
/// Absolute public URL of the server
pub const PRODUCT_URL: &str = "product-url";
/// Public URL without path, tenant-qualified when enabled
pub const PRODUCT_URL_WITH_USER_TENANT: &str = "product-url-with-user-tenant";
