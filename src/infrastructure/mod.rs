pub mod emr;
pub mod model;
pub mod server;
