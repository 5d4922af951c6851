//! Common test utilities

use async_trait::async_trait;
use auth9_notify::config::ServerConfig;
use auth9_notify::domain::{ClaimMap, Template, TemplateQuery, UserStoreRef};
use auth9_notify::placeholder::{PlaceholderResolver, StaticPlaceholders};
use auth9_notify::repository::{ConfiguredServerUrls, TemplateRepository, UserAttributeRepository};
use auth9_notify::service::NotificationService;
use auth9_notify::{AppError, Result};
use std::collections::HashMap;
use std::sync::Arc;

pub const CLAIM_ROOT: &str = "http://wso2.org/claims/";

pub fn claim(name: &str) -> String {
    format!("{}{}", CLAIM_ROOT, name)
}

pub fn map<K: AsRef<str>>(pairs: &[(K, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.to_string()))
        .collect()
}

/// Users keyed by (user store, username)
#[derive(Default)]
pub struct InMemoryUserAttributes {
    users: HashMap<(String, String), ClaimMap>,
}

impl InMemoryUserAttributes {
    pub fn with_user(mut self, user_store: &str, username: &str, claims: ClaimMap) -> Self {
        self.users
            .insert((user_store.to_string(), username.to_string()), claims);
        self
    }
}

#[async_trait]
impl UserAttributeRepository for InMemoryUserAttributes {
    async fn fetch_user_claims(
        &self,
        username: &str,
        user_store: &UserStoreRef,
    ) -> Result<ClaimMap> {
        self.users
            .get(&(user_store.0.clone(), username.to_string()))
            .cloned()
            .ok_or_else(|| {
                AppError::AttributeLookup(format!("User {} not found in {}", username, user_store))
            })
    }

    async fn resolve_user_store(&self, domain: &str, tenant_domain: &str) -> Result<UserStoreRef> {
        Ok(UserStoreRef(format!("{}@{}", domain, tenant_domain)))
    }
}

/// Templates keyed by (type, locale)
#[derive(Default)]
pub struct InMemoryTemplates {
    templates: HashMap<(String, String), Template>,
}

impl InMemoryTemplates {
    pub fn with_template(mut self, template_type: &str, locale: &str, template: Template) -> Self {
        self.templates
            .insert((template_type.to_string(), locale.to_string()), template);
        self
    }
}

#[async_trait]
impl TemplateRepository for InMemoryTemplates {
    async fn fetch_template(&self, query: &TemplateQuery) -> Result<Template> {
        self.templates
            .get(&(query.template_type.clone(), query.locale.clone()))
            .cloned()
            .ok_or_else(|| {
                AppError::TemplateLookup(format!(
                    "No {} template for locale {}",
                    query.template_type, query.locale
                ))
            })
    }
}

pub fn service(
    users: InMemoryUserAttributes,
    templates: InMemoryTemplates,
    static_values: &[(&str, &str)],
) -> NotificationService<InMemoryUserAttributes, InMemoryTemplates> {
    let resolver = PlaceholderResolver::new(
        Arc::new(StaticPlaceholders::new(map(static_values))),
        Arc::new(ConfiguredServerUrls::new(&ServerConfig {
            public_url: Some("https://id.acme.com/auth".to_string()),
            tenant_qualified_urls: true,
        })),
    );
    NotificationService::new(Arc::new(users), Arc::new(templates), resolver)
}
