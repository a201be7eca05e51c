pub mod body_limit;
pub mod dependency_injection;
pub mod server;
