//! Domain models for Auth9 notifications

pub mod claims;
pub mod event;
pub mod notification;
pub mod template;

pub use claims::*;
pub use event::*;
pub use notification::*;
pub use template::*;
