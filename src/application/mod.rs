pub mod agent;
pub mod service;
pub mod tooling;
