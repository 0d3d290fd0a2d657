//! Bootstrap configuration
//!
//! - `bootstrap_config`: Configuration structure
//! - `defaults`: Default configuration values

pub mod bootstrap_config;
pub mod defaults;

pub use bootstrap_config::BootstrapConfig;
