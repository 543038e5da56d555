pub mod catalog;
pub mod dto;
pub mod error;
pub mod exclude;
pub mod i18n;
pub mod locale;
pub mod security;

// Re-exports
pub use error::{Error, Result};
