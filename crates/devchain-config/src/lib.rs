//! Devchain network declarations
//!
//! This crate provides the schema, validation, loading and lookup of the
//! named blockchain endpoints a development toolchain deploys against.

pub mod config;
pub mod error;
pub mod loader;
pub mod networks;
pub mod registry;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use loader::*;
pub use registry::ConfigRegistry;
pub use utils::ConfigUtils;

// Re-export main types
pub use error::{ConfigError, ConfigResult, InvalidReason};

// Re-export presets
pub use networks::{development_descriptor, ganache_descriptor, NetworkPreset};
