pub mod config;
pub mod error;

pub use config::{load_domain_config, Bounds, DomainConfig};
pub use error::{ConfigError, Result};
