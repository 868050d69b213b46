//! Configuration management for the exemplar migration toolkit.
//!
//! This crate provides the connection configuration for a Grafana instance
//! and a loader that merges `.env` files, environment variables, and
//! command-line overrides into a validated [`Config`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig};
