pub mod contact;
pub mod params;
pub mod template;
pub mod views;

pub use contact::*;
pub use params::*;
pub use template::*;
pub use views::*;
