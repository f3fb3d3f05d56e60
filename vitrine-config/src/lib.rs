//! Shared configuration library for Vitrine.
//!
//! Centralizes environment/`.env` loading, config composition, and
//! validation so the relay binary has a single source of truth for
//! defaults and managed keys.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod secret;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, EnvConfig};
pub use models::{Config, ConfigMetadata, MailConfig, ServerConfig};
pub use secret::SecretString;
pub use validation::{ConfigWarning, ConfigWarnings};
