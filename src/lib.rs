pub mod commands;
pub mod github;
pub mod http;
pub mod platform;
pub mod python;
pub mod runtime;
pub mod wheel;
