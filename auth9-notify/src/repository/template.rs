//! Notification template repository

use crate::domain::{Template, TemplateQuery};
use crate::error::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Get the template for a type, locale and tenant
    async fn fetch_template(&self, query: &TemplateQuery) -> Result<Template>;
}
