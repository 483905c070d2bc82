pub mod config;
pub mod paths;

pub use config::{Config, DemoConfig, LoggingConfig};
pub use paths::PathManager;
