pub mod cache;
pub mod cache_keys;
pub mod configuration;
pub mod controller;
pub mod error;
pub mod handler;
pub mod provider;
pub mod scoring;
pub mod server;
pub mod types;
