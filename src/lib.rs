pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{agent, service, tooling};
pub use infrastructure::{emr, model, server};
