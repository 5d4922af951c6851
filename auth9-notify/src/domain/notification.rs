//! Assembled notifications

use super::template::Template;
use crate::error::{AppError, Result};
use crate::placeholder::TemplateEngine;
use std::collections::HashMap;

/// Placeholder token -> resolved value
pub type PlaceholderData = HashMap<String, String>;

/// A notification ready to hand to a transport.
#[derive(Debug, Clone)]
pub struct Notification {
    send_to: String,
    send_from: Option<String>,
    template: Template,
    placeholder_data: PlaceholderData,
}

impl Notification {
    pub fn builder(send_to: impl Into<String>) -> NotificationBuilder {
        NotificationBuilder {
            send_to: send_to.into(),
            send_from: None,
            template: None,
            placeholder_data: PlaceholderData::new(),
        }
    }

    pub fn send_to(&self) -> &str {
        &self.send_to
    }

    pub fn send_from(&self) -> Option<&str> {
        self.send_from.as_deref()
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn placeholder_data(&self) -> &PlaceholderData {
        &self.placeholder_data
    }

    /// Substitute the resolved placeholder data into every template field
    pub fn render(&self) -> RenderedNotification {
        let engine = TemplateEngine::new(&self.placeholder_data);
        RenderedNotification {
            subject: self.template.subject().map(|s| engine.render(s)),
            body: engine.render(self.template.body()),
            footer: self.template.footer().map(|f| engine.render(f)),
        }
    }
}

/// Builder for [`Notification`]; the recipient is fixed at creation.
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    send_to: String,
    send_from: Option<String>,
    template: Option<Template>,
    placeholder_data: PlaceholderData,
}

impl NotificationBuilder {
    pub fn send_from(mut self, send_from: Option<String>) -> Self {
        self.send_from = send_from;
        self
    }

    pub fn template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn placeholder_data(mut self, placeholder_data: PlaceholderData) -> Self {
        self.placeholder_data = placeholder_data;
        self
    }

    pub fn build(self) -> Result<Notification> {
        if self.send_to.trim().is_empty() {
            return Err(AppError::DeliveryAddress(
                "Notification recipient cannot be empty".to_string(),
            ));
        }
        let template = self
            .template
            .ok_or_else(|| AppError::Validation("Notification template is required".to_string()))?;

        Ok(Notification {
            send_to: self.send_to,
            send_from: self.send_from,
            template,
            placeholder_data: self.placeholder_data,
        })
    }
}

/// Notification text with placeholders substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNotification {
    pub subject: Option<String>,
    pub body: String,
    pub footer: Option<String>,
}
