pub mod agent;
pub mod batch;
pub mod config;
pub mod error;
pub mod platform;
