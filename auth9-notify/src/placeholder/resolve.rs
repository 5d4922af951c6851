//! Placeholder resolution
//!
//! Tokens are classified by prefix and filled from one of three sources:
//!
//! - `param.<key>`: static configuration; a miss binds `""`.
//! - `...user.claim.identity.<name>`: identity claim `<root>identity/<name>`.
//! - `...user.claim.<name>`: user claim `<root><name>`.
//!
//! Claim misses leave the token unbound so it renders verbatim. A value the
//! caller already supplied is never replaced, except for the two server URL
//! keys which always reflect the current environment.

use super::extract::extract_placeholders;
use super::static_values::StaticPlaceholderSource;
use super::{PRODUCT_URL, PRODUCT_URL_WITH_USER_TENANT, TENANT_DOMAIN};
use crate::config::DEFAULT_CLAIM_URI_ROOT;
use crate::domain::{ClaimMap, PlaceholderData, Template};
use crate::error::Result;
use crate::repository::ServerUrlResolver;
use std::sync::Arc;

pub const STATIC_PREFIX: &str = "param.";
pub const USER_CLAIM_PREFIX: &str = "user.claim";
pub const IDENTITY_CLAIM_PREFIX: &str = "identity";

const IDENTITY_CLAIM_MARKER: &str = "user.claim.identity";

/// Namespace of a placeholder token, with the part used for lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind<'a> {
    /// Static configuration key
    Static(&'a str),
    /// Claim name under `<root>identity/`
    IdentityClaim(&'a str),
    /// Claim name under `<root>`
    UserClaim(&'a str),
    /// Not resolved here; only the caller's seed can fill it
    Unmanaged,
}

/// Classify a token. The identity form is checked before the general claim form.
pub fn classify(token: &str) -> PlaceholderKind<'_> {
    if let Some(key) = token.strip_prefix(STATIC_PREFIX) {
        return PlaceholderKind::Static(key);
    }

    if let Some(pos) = token.find(IDENTITY_CLAIM_MARKER) {
        let identity_start = pos + USER_CLAIM_PREFIX.len() + 1;
        return match suffix_after_dot(token, identity_start) {
            Some(name) => PlaceholderKind::IdentityClaim(name),
            None => PlaceholderKind::Unmanaged,
        };
    }

    if let Some(pos) = token.find(USER_CLAIM_PREFIX) {
        let claim_start = pos + USER_CLAIM_PREFIX.len() - "claim".len();
        if let Some(name) = suffix_after_dot(token, claim_start) {
            return PlaceholderKind::UserClaim(name);
        }
    }

    PlaceholderKind::Unmanaged
}

/// Text after the first `.` at or after `from`
fn suffix_after_dot(token: &str, from: usize) -> Option<&str> {
    token[from..]
        .find('.')
        .map(|dot| &token[from + dot + 1..])
}

/// Absent or empty
pub(crate) fn is_vacant(data: &PlaceholderData, key: &str) -> bool {
    data.get(key).map_or(true, |v| v.is_empty())
}

/// Fills placeholder data for a template from static configuration, user
/// claims and the server environment.
#[derive(Clone)]
pub struct PlaceholderResolver {
    static_values: Arc<dyn StaticPlaceholderSource>,
    server_urls: Arc<dyn ServerUrlResolver>,
    claim_uri_root: String,
}

impl PlaceholderResolver {
    pub fn new(
        static_values: Arc<dyn StaticPlaceholderSource>,
        server_urls: Arc<dyn ServerUrlResolver>,
    ) -> Self {
        Self {
            static_values,
            server_urls,
            claim_uri_root: DEFAULT_CLAIM_URI_ROOT.to_string(),
        }
    }

    pub fn with_claim_uri_root(mut self, claim_uri_root: impl Into<String>) -> Self {
        self.claim_uri_root = claim_uri_root.into();
        self
    }

    pub fn claim_uri_root(&self) -> &str {
        &self.claim_uri_root
    }

    /// Tokens of the body, then subject, then footer
    pub fn template_placeholders(template: &Template) -> Vec<String> {
        let mut tokens = extract_placeholders(template.body());
        if let Some(subject) = template.subject().filter(|s| !s.is_empty()) {
            tokens.extend(extract_placeholders(subject));
        }
        if let Some(footer) = template.footer().filter(|f| !f.is_empty()) {
            tokens.extend(extract_placeholders(footer));
        }
        tokens
    }

    /// Resolve every placeholder of `template` into `data`.
    ///
    /// Fails with `AppError::Configuration` when the server URL cannot be
    /// determined.
    pub fn resolve(
        &self,
        template: &Template,
        mut data: PlaceholderData,
        claims: &ClaimMap,
    ) -> Result<PlaceholderData> {
        let server_urls = self.server_urls.resolve()?;

        for token in Self::template_placeholders(template) {
            if !is_vacant(&data, &token) {
                continue;
            }

            let value = match classify(&token) {
                PlaceholderKind::Static(key) => {
                    Some(self.static_values.lookup(key).unwrap_or_default())
                }
                PlaceholderKind::IdentityClaim(name) if !claims.is_empty() => self.claim(
                    claims,
                    &format!("{}{}/{}", self.claim_uri_root, IDENTITY_CLAIM_PREFIX, name),
                ),
                PlaceholderKind::UserClaim(name) if !claims.is_empty() => {
                    self.claim(claims, &format!("{}{}", self.claim_uri_root, name))
                }
                _ => None,
            };

            match value {
                Some(value) => {
                    data.insert(token, value);
                }
                None => tracing::trace!(placeholder = %token, "Placeholder left unresolved"),
            }
        }

        let tenant_url = match data.get(TENANT_DOMAIN).filter(|t| !t.is_empty()) {
            Some(tenant) if self.server_urls.tenant_qualified_urls() => format!(
                "{}/t/{}",
                server_urls.absolute_public_url_without_path, tenant
            ),
            _ => server_urls.absolute_public_url_without_path,
        };

        data.insert(PRODUCT_URL.to_string(), server_urls.absolute_public_url);
        data.insert(PRODUCT_URL_WITH_USER_TENANT.to_string(), tenant_url);

        Ok(data)
    }

    fn claim(&self, claims: &ClaimMap, uri: &str) -> Option<String> {
        claims.get(uri).filter(|v| !v.is_empty()).cloned()
    }
}
