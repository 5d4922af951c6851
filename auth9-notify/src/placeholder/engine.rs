//! Template rendering engine with variable substitution

use super::extract::PLACEHOLDER_REGEX;
use crate::domain::PlaceholderData;
use regex::Captures;

/// Replaces `{{token}}` occurrences with values from resolved placeholder data
#[derive(Debug, Clone, Copy)]
pub struct TemplateEngine<'a> {
    variables: &'a PlaceholderData,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(variables: &'a PlaceholderData) -> Self {
        Self { variables }
    }

    /// Render a template string. Unknown tokens are left as-is.
    pub fn render(&self, template: &str) -> String {
        PLACEHOLDER_REGEX
            .replace_all(template, |caps: &Captures<'_>| {
                match self.variables.get(&caps[1]) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}
