//! Core library for the weather aggregation service.
//!
//! This crate defines:
//! - Configuration loaded from environment variables
//! - The temperature provider abstraction and its concrete implementations
//! - The composite provider that averages across all configured sources
//!
//! It is used by `weather-server`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{Config, ProviderConfig};
pub use error::{ConfigError, ProviderError};
pub use model::Temperature;
pub use provider::{composite_from_config, ProviderId, TemperatureProvider};
