use crate::config::NetworkDescriptor;
use crate::networks::NetworkPreset;
use crate::registry::ConfigRegistry;
use crate::ConfigResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk network declaration
///
/// ```toml
/// [networks.ganache]
/// host = "127.0.0.1"
/// port = 7545
/// network_id = "5777"
/// from = "0x6323c62552e10C8e1406feAF03c79913c6e2c0E9"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworksFile {
    /// Declared networks keyed by name
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkDescriptor>,
}

impl NetworksFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declaration holding every built-in preset
    pub fn presets() -> Self {
        let networks = NetworkPreset::all()
            .iter()
            .map(|preset| (preset.name().to_string(), preset.descriptor()))
            .collect();
        Self { networks }
    }

    /// Add or replace a declared network
    pub fn with_network(mut self, name: impl Into<String>, descriptor: NetworkDescriptor) -> Self {
        self.networks.insert(name.into(), descriptor);
        self
    }

    /// Validate every entry and build the registry
    pub fn into_registry(self) -> ConfigResult<ConfigRegistry> {
        ConfigRegistry::from_file(self)
    }
}
