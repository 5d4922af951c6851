//! Auth9 Notify - account notification assembly
//!
//! Resolves `{{placeholder}}` tokens in notification templates from static
//! configuration, user claims and caller-supplied values, and assembles the
//! final [`domain::Notification`] handed to a mail transport.

pub mod config;
pub mod domain;
pub mod error;
pub mod placeholder;
pub mod repository;
pub mod service;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
