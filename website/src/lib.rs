pub mod config;
pub mod error;
pub mod models;
pub mod run;
pub mod services;
pub mod web;

// Re-exports
pub use error::{Error, Result};
