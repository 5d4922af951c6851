//! Notification assembly service
//!
//! Turns an account event into a [`Notification`]: resolves the user's claims,
//! picks the recipient and locale, fetches the template and fills its
//! placeholders.

use crate::config::Config;
use crate::domain::{
    claim_value, merge_staged_claims, ClaimMap, Notification, NotificationEvent, PlaceholderData,
    TemplateQuery, EMAIL_CLAIM, LOCALE_CLAIM,
};
use crate::error::{AppError, Result};
use crate::placeholder::resolve::is_vacant;
use crate::placeholder::{
    PlaceholderResolver, StaticPlaceholders, CURRENT_YEAR, SEND_TO, TENANT_DOMAIN,
};
use crate::repository::{ConfiguredServerUrls, TemplateRepository, UserAttributeRepository};
use crate::telemetry::metrics;
use chrono::{Datelike, Utc};
use std::sync::Arc;

/// Service for assembling notifications from account events
pub struct NotificationService<U: UserAttributeRepository, T: TemplateRepository> {
    user_attributes: Arc<U>,
    templates: Arc<T>,
    resolver: PlaceholderResolver,
    default_locale: String,
}

impl<U: UserAttributeRepository, T: TemplateRepository> NotificationService<U, T> {
    pub fn new(user_attributes: Arc<U>, templates: Arc<T>, resolver: PlaceholderResolver) -> Self {
        Self {
            user_attributes,
            templates,
            resolver,
            default_locale: crate::config::DEFAULT_LOCALE.to_string(),
        }
    }

    /// Wire the service from configuration, loading static placeholders from
    /// the configured file when present.
    pub fn from_config(config: &Config, user_attributes: Arc<U>, templates: Arc<T>) -> Result<Self> {
        let static_values = match &config.notification.placeholders_file {
            Some(path) => StaticPlaceholders::load(path)?,
            None => StaticPlaceholders::default(),
        };
        let resolver = PlaceholderResolver::new(
            Arc::new(static_values),
            Arc::new(ConfiguredServerUrls::new(&config.server)),
        )
        .with_claim_uri_root(config.notification.claim_uri_root.clone());

        Ok(Self::new(user_attributes, templates, resolver)
            .with_default_locale(config.notification.default_locale.clone()))
    }

    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Build the notification for `event`.
    ///
    /// `data` is the caller's placeholder seed. A non-empty `sendTo` entry
    /// overrides the user's email claim as recipient.
    pub async fn build(
        &self,
        event: &NotificationEvent,
        data: PlaceholderData,
    ) -> Result<Notification> {
        let result = self.assemble(event, data).await;
        match &result {
            Ok(_) => metrics::record_build("success"),
            Err(e) => {
                tracing::warn!(
                    template_type = %event.template_type,
                    error_kind = e.kind(),
                    "Notification assembly failed: {}",
                    e
                );
                metrics::record_build(e.kind());
            }
        }
        result
    }

    async fn assemble(
        &self,
        event: &NotificationEvent,
        mut data: PlaceholderData,
    ) -> Result<Notification> {
        let send_to = data.get(SEND_TO).filter(|v| !v.is_empty()).cloned();
        let claims = self.fetch_claims(event).await?;
        let claim_root = self.resolver.claim_uri_root();

        let locale = claim_value(&claims, claim_root, LOCALE_CLAIM)
            .unwrap_or(self.default_locale.as_str())
            .to_string();

        let send_to = match send_to {
            Some(send_to) => send_to,
            None => claim_value(&claims, claim_root, EMAIL_CLAIM)
                .map(str::to_string)
                .ok_or_else(|| {
                    AppError::DeliveryAddress(
                        "No destination address configured for this user".to_string(),
                    )
                })?,
        };

        let query = TemplateQuery {
            template_type: event.template_type.clone(),
            locale,
            tenant_domain: event.tenant_domain().map(str::to_string),
        };
        let template = self
            .templates
            .fetch_template(&query)
            .await
            .map_err(|e| match e {
                AppError::TemplateLookup(_) => e,
                other => AppError::TemplateLookup(format!(
                    "Failed to retrieve {} template for locale {}: {}",
                    query.template_type, query.locale, other
                )),
            })?;

        if is_vacant(&data, CURRENT_YEAR) {
            data.insert(CURRENT_YEAR.to_string(), Utc::now().year().to_string());
        }
        if let Some(tenant) = event.tenant_domain() {
            if is_vacant(&data, TENANT_DOMAIN) {
                data.insert(TENANT_DOMAIN.to_string(), tenant.to_string());
            }
        }

        let data = self.resolver.resolve(&template, data, &claims)?;

        tracing::debug!(
            template_type = %query.template_type,
            locale = %query.locale,
            placeholders = data.len(),
            "Notification assembled"
        );

        Notification::builder(send_to)
            .send_from(event.send_from().map(str::to_string))
            .template(template)
            .placeholder_data(data)
            .build()
    }

    /// Claims of the event's user, or an empty map when the event does not
    /// identify one. A failed fetch degrades to an empty map; a failure to
    /// resolve the user store is returned.
    async fn fetch_claims(&self, event: &NotificationEvent) -> Result<ClaimMap> {
        let Some(username) = event.username() else {
            return Ok(ClaimMap::new());
        };

        let user_store = match (
            &event.user_store_ref,
            event.user_store_domain(),
            event.tenant_domain(),
        ) {
            (Some(user_store), _, _) => user_store.clone(),
            (None, Some(domain), Some(tenant)) => self
                .user_attributes
                .resolve_user_store(domain, tenant)
                .await
                .map_err(|e| match e {
                    AppError::AttributeLookup(_) => e,
                    other => AppError::AttributeLookup(format!(
                        "Failed to resolve user store {} in tenant {} for user {}: {}",
                        domain, tenant, username, other
                    )),
                })?,
            _ => return Ok(ClaimMap::new()),
        };

        match self
            .user_attributes
            .fetch_user_claims(username, &user_store)
            .await
        {
            Ok(claims) => Ok(merge_staged_claims(claims, &event.staged_claims)),
            Err(e) => {
                tracing::error!(
                    username,
                    user_store = %user_store,
                    tenant = event.tenant_domain().unwrap_or_default(),
                    "Failed to retrieve user claim values: {}",
                    e
                );
                metrics::record_claim_fetch_failure();
                Ok(ClaimMap::new())
            }
        }
    }
}
