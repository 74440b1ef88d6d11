pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod exchange;
pub mod indicators;
pub mod notifier;
pub mod rest_client;
pub mod signal;
