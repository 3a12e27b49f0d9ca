//! Process-wide configuration, read once at startup.

mod app;
mod defaults;
mod error;
mod loader;

pub use app::AppConfig;
pub use defaults::*;
pub use error::ConfigError;
pub use loader::load_env_file;
