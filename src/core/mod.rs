//! Startup configuration and the request data model

pub mod config;
pub mod models;
pub mod secrets;
