//! Notification template domain types

use crate::error::{AppError, Result};

/// A localized notification template.
///
/// The body is mandatory; subject and footer are optional. Every field may
/// contain `{{placeholder}}` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    subject: Option<String>,
    body: String,
    footer: Option<String>,
}

impl Template {
    /// Create a template, rejecting an empty body
    pub fn new(body: impl Into<String>) -> Result<Self> {
        let body = body.into();
        if body.is_empty() {
            return Err(AppError::Validation(
                "Template body cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            subject: None,
            body,
            footer: None,
        })
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }
}

/// Key used to look a template up in template storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateQuery {
    /// Notification type, e.g. "passwordReset" or "accountLock"
    pub template_type: String,
    pub locale: String,
    pub tenant_domain: Option<String>,
}
