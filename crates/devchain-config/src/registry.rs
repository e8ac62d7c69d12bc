//! Named network descriptors, validated on insertion
//!
//! A registry is populated once at process start and then handed to
//! whatever needs lookups, by reference or behind an `Arc`. Nothing mutates
//! it after that, so no locking is involved.

use crate::config::{NetworkDescriptor, NetworksFile};
use crate::error::{ConfigError, ConfigResult};
use crate::networks::NetworkPreset;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    networks: HashMap<String, NetworkDescriptor>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in preset
    pub fn with_presets() -> Self {
        let networks = NetworkPreset::all()
            .iter()
            .map(|preset| (preset.name().to_string(), preset.descriptor()))
            .collect();
        Self { networks }
    }

    /// Register every network of a declaration, stopping at the first failure
    pub fn from_file(file: NetworksFile) -> ConfigResult<Self> {
        let mut registry = Self::new();
        for (name, descriptor) in file.networks {
            registry.register(name, descriptor)?;
        }
        Ok(registry)
    }

    /// Make `descriptor` retrievable under `name`
    ///
    /// Fails without touching the registry if the name is empty or taken,
    /// or if the descriptor breaks an invariant.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        descriptor: NetworkDescriptor,
    ) -> ConfigResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.networks.contains_key(&name) {
            return Err(ConfigError::DuplicateName(name));
        }
        if let Err(reason) = descriptor.validate() {
            return Err(ConfigError::InvalidDescriptor { name, reason });
        }

        debug!(network = %name, endpoint = %descriptor.endpoint(), "registered network");
        self.networks.insert(name, descriptor);
        Ok(())
    }

    /// Descriptor registered under `name`
    pub fn get(&self, name: &str) -> ConfigResult<&NetworkDescriptor> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.networks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.networks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NetworkDescriptor)> {
        self.networks.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl TryFrom<NetworksFile> for ConfigRegistry {
    type Error = ConfigError;

    fn try_from(file: NetworksFile) -> ConfigResult<Self> {
        Self::from_file(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidReason;

    fn ganache() -> NetworkDescriptor {
        NetworkDescriptor::new("127.0.0.1", 7545, "5777")
            .with_from("0x6323c62552e10C8e1406feAF03c79913c6e2c0E9")
    }

    #[test]
    fn test_register_then_get() {
        let mut registry = ConfigRegistry::new();
        assert!(registry.is_empty());

        registry.register("ganache", ganache()).unwrap();
        assert_eq!(registry.get("ganache").unwrap(), &ganache());
        assert_eq!(registry.get("ganache").unwrap().port, 7545);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_keeps_original() {
        let mut registry = ConfigRegistry::new();
        registry.register("ganache", ganache()).unwrap();

        let other = NetworkDescriptor::new("10.0.0.1", 8545, "*");
        let err = registry.register("ganache", other).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateName(ref n) if n == "ganache"));
        assert_eq!(registry.get("ganache").unwrap(), &ganache());
    }

    #[test]
    fn test_invalid_descriptor_not_inserted() {
        let mut registry = ConfigRegistry::new();
        let err = registry
            .register("bad", NetworkDescriptor::new("", 7545, "*"))
            .unwrap_err();
        assert_eq!(err.invalid_reason(), Some(&InvalidReason::EmptyHost));
        assert!(!registry.contains("bad"));

        let err = registry
            .register("bad2", NetworkDescriptor::new("h", 70000, "*"))
            .unwrap_err();
        assert_eq!(
            err.invalid_reason(),
            Some(&InvalidReason::PortOutOfRange(70000))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = ConfigRegistry::new();
        assert!(matches!(
            registry.register("", ganache()),
            Err(ConfigError::EmptyName)
        ));
    }

    #[test]
    fn test_get_missing() {
        let registry = ConfigRegistry::with_presets();
        assert!(matches!(
            registry.get("mainnet"),
            Err(ConfigError::NotFound(ref n)) if n == "mainnet"
        ));
    }

    #[test]
    fn test_names_sorted() {
        let registry = ConfigRegistry::with_presets();
        assert_eq!(registry.names(), vec!["development", "ganache"]);
    }
}
