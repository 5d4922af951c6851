//! Collaborator interfaces (Repository pattern)

pub mod server_url;
pub mod template;
pub mod user_attribute;

pub use server_url::{ConfiguredServerUrls, ServerUrlResolver, ServerUrls};
pub use template::TemplateRepository;
pub use user_attribute::UserAttributeRepository;
