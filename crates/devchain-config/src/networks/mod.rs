//! Built-in network presets

pub mod development;
pub mod ganache;

use crate::config::NetworkDescriptor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkPreset {
    Ganache,
    Development,
}

impl NetworkPreset {
    pub fn all() -> &'static [NetworkPreset] {
        &[NetworkPreset::Ganache, NetworkPreset::Development]
    }

    /// Name the preset is registered under
    pub fn name(&self) -> &'static str {
        match self {
            NetworkPreset::Ganache => "ganache",
            NetworkPreset::Development => "development",
        }
    }

    pub fn descriptor(&self) -> NetworkDescriptor {
        match self {
            NetworkPreset::Ganache => ganache_descriptor(),
            NetworkPreset::Development => development_descriptor(),
        }
    }
}

impl std::str::FromStr for NetworkPreset {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ganache" => Ok(NetworkPreset::Ganache),
            "development" | "dev" => Ok(NetworkPreset::Development),
            _ => Err(crate::error::ConfigError::InvalidPreset(s.to_string())),
        }
    }
}

pub use development::development_descriptor;
pub use ganache::ganache_descriptor;
