pub mod config;

pub use config::{load_registry, ConfigError, ConfigResult, RegistryConfig, TrackerConfig};
