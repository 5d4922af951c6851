//! Inbound notification events

use super::claims::ClaimMap;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque handle to the user store a user lives in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserStoreRef(pub String);

impl fmt::Display for UserStoreRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An account event that should produce a notification.
///
/// Publishers emit a free-form property map; [`NotificationEvent::from_properties`]
/// validates it once into this record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    /// Template type to send, e.g. "passwordReset"
    pub template_type: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_store_ref: Option<UserStoreRef>,
    #[serde(default)]
    pub user_store_domain: Option<String>,
    #[serde(default)]
    pub tenant_domain: Option<String>,
    #[serde(default)]
    pub send_from: Option<String>,
    /// Identity claims staged earlier in the same operation
    #[serde(default)]
    pub staged_claims: ClaimMap,
}

impl NotificationEvent {
    pub fn new(template_type: impl Into<String>) -> Self {
        Self {
            template_type: template_type.into(),
            ..Default::default()
        }
    }

    /// Parse a loosely-typed event property map. Unknown properties are ignored.
    pub fn from_properties(properties: HashMap<String, serde_json::Value>) -> Result<Self> {
        let object: serde_json::Map<String, serde_json::Value> = properties.into_iter().collect();
        let event: Self = serde_json::from_value(serde_json::Value::Object(object))?;
        Ok(event)
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_user_store(mut self, user_store: UserStoreRef) -> Self {
        self.user_store_ref = Some(user_store);
        self
    }

    pub fn with_user_store_domain(mut self, domain: impl Into<String>) -> Self {
        self.user_store_domain = Some(domain.into());
        self
    }

    pub fn with_tenant_domain(mut self, tenant_domain: impl Into<String>) -> Self {
        self.tenant_domain = Some(tenant_domain.into());
        self
    }

    pub fn with_send_from(mut self, send_from: impl Into<String>) -> Self {
        self.send_from = Some(send_from.into());
        self
    }

    pub fn with_staged_claims(mut self, staged_claims: ClaimMap) -> Self {
        self.staged_claims = staged_claims;
        self
    }

    pub fn username(&self) -> Option<&str> {
        non_blank(&self.username)
    }

    pub fn user_store_domain(&self) -> Option<&str> {
        non_blank(&self.user_store_domain)
    }

    pub fn tenant_domain(&self) -> Option<&str> {
        non_blank(&self.tenant_domain)
    }

    pub fn send_from(&self) -> Option<&str> {
        non_blank(&self.send_from)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
