pub mod client;

pub use client::CodegenRunner;
