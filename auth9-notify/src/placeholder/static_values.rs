//! Static `param.*` placeholder values
//!
//! Platform operators define fixed values (support address, organization
//! name, ...) in an XML fragment:
//!
//! ```xml
//! <TemplatePlaceholders>
//!     <TemplatePlaceholder key="support-email">help@acme.com</TemplatePlaceholder>
//! </TemplatePlaceholders>
//! ```

use crate::error::{AppError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;
use std::path::Path;

const PLACEHOLDER_ELEM: &[u8] = b"TemplatePlaceholder";
const PLACEHOLDER_KEY_ATTR: &str = "key";

/// Lookup for static configuration placeholders
#[cfg_attr(test, mockall::automock)]
pub trait StaticPlaceholderSource: Send + Sync {
    /// Value for `key`, or `None` when not configured
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Flattened key -> text map of static placeholders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPlaceholders {
    values: HashMap<String, String>,
}

impl StaticPlaceholders {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Parse a `TemplatePlaceholders` fragment. Elements without a `key`
    /// attribute are skipped.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut values = HashMap::new();
        let mut current_key: Option<String> = None;
        let mut current_text = String::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) if e.local_name().as_ref() == PLACEHOLDER_ELEM => {
                    current_key = match e.try_get_attribute(PLACEHOLDER_KEY_ATTR)? {
                        Some(attr) => Some(attr.unescape_value()?.into_owned()),
                        None => None,
                    };
                    current_text.clear();
                }
                Event::Empty(e) if e.local_name().as_ref() == PLACEHOLDER_ELEM => {
                    if let Some(attr) = e.try_get_attribute(PLACEHOLDER_KEY_ATTR)? {
                        values.insert(attr.unescape_value()?.into_owned(), String::new());
                    }
                }
                Event::Text(t) if current_key.is_some() => {
                    current_text.push_str(&t.unescape()?);
                }
                Event::CData(t) if current_key.is_some() => {
                    current_text.push_str(&String::from_utf8_lossy(&t));
                }
                Event::End(e) if e.local_name().as_ref() == PLACEHOLDER_ELEM => {
                    if let Some(key) = current_key.take() {
                        values.insert(key, std::mem::take(&mut current_text));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        tracing::debug!(count = values.len(), "Loaded static template placeholders");
        Ok(Self { values })
    }

    /// Read and parse a placeholder fragment from disk
    pub fn load(path: &Path) -> Result<Self> {
        let xml = std::fs::read_to_string(path).map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Failed to read template placeholders from {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_xml(&xml)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl StaticPlaceholderSource for StaticPlaceholders {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
