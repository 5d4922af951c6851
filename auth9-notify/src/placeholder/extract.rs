//! Placeholder token extraction

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `{{` + lazy capture + `}}`
    pub(crate) static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{\{(.*?)\}\}").unwrap();
}

/// Return every placeholder token in `text`, braces stripped, in order of
/// appearance. Duplicates are kept.
pub fn extract_placeholders(text: &str) -> Vec<String> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}
