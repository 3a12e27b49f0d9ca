use thiserror::Error;

/// Errors raised while building [`super::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {name} must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("environment variable {name} must be a socket address, got '{value}'")]
    InvalidAddress { name: &'static str, value: String },

    #[error("failed to load environment file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}
