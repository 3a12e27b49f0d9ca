pub mod agent;
pub mod root;
