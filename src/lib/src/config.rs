pub mod validation_config;

pub use crate::config::validation_config::ValidationConfig;
