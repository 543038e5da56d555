pub mod analytics;
pub mod contact;

pub use analytics::*;
pub use contact::*;
