//! Configuration loading.
//!
//! The config file is optional: without one the converter writes into `notes/`
//! below the working directory and keeps tags in front matter.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
