pub mod catalog;
pub mod config;
pub mod types;
pub mod validation;

pub use catalog::Catalog;
pub use config::ClassConfig;
pub use types::*;
pub use validation::{GroupEdit, ValidationError, ValidationReport};
