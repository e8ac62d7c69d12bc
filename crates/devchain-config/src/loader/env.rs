use crate::{ConfigError, ConfigResult, NetworksFile};
use std::collections::HashMap;
use std::ffi::OsString;
use tracing::info;

pub const ENV_PREFIX: &str = "DEVCHAIN_";
pub const NETWORK_VAR: &str = "DEVCHAIN_NETWORK";
pub const HOST_VAR: &str = "DEVCHAIN_NETWORK_HOST";
pub const PORT_VAR: &str = "DEVCHAIN_NETWORK_PORT";
pub const NETWORK_ID_VAR: &str = "DEVCHAIN_NETWORK_ID";
pub const FROM_VAR: &str = "DEVCHAIN_NETWORK_FROM";

const OVERRIDE_VARS: [&str; 4] = [HOST_VAR, PORT_VAR, NETWORK_ID_VAR, FROM_VAR];

/// Environment variable-based network selection and overrides
///
/// The variables are captured once when the loader is built, so later
/// changes to the process environment do not leak into a load in progress.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    vars: HashMap<String, String>,
}

impl EnvLoader {
    /// Capture every `DEVCHAIN_*` variable of the current process
    pub fn from_env() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Like `from_vars`, dropping pairs that are not valid UTF-8
    pub fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        Self::from_vars(
            vars.into_iter()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with(ENV_PREFIX))
            .collect();
        Self { vars }
    }

    /// Make `network` the override target, replacing `DEVCHAIN_NETWORK`
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.vars.insert(NETWORK_VAR.to_string(), network.into());
        self
    }

    fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Network named by `DEVCHAIN_NETWORK`
    pub fn selected_network(&self) -> Option<&str> {
        self.var(NETWORK_VAR)
    }

    pub fn has_overrides(&self) -> bool {
        OVERRIDE_VARS.iter().any(|key| self.var(key).is_some())
    }

    /// Rewrite fields of the selected network's declaration
    ///
    /// Runs before the registry is built so the overridden values go through
    /// the same validation as the file contents.
    pub fn apply_overrides(&self, file: &mut NetworksFile) -> ConfigResult<()> {
        if !self.has_overrides() {
            return Ok(());
        }

        let name = self.selected_network().ok_or_else(|| {
            ConfigError::EnvironmentError(format!(
                "{} must name the network to override",
                NETWORK_VAR
            ))
        })?;
        let descriptor = file
            .networks
            .get_mut(name)
            .ok_or_else(|| ConfigError::NotFound(name.to_string()))?;

        if let Some(host) = self.var(HOST_VAR) {
            info!(network = %name, host, "host overridden from environment");
            descriptor.host = host.to_string();
        }

        if let Some(port) = self.var(PORT_VAR) {
            descriptor.port = port
                .parse()
                .map_err(|_| ConfigError::EnvironmentError(format!("Invalid {}", PORT_VAR)))?;
            info!(network = %name, port = descriptor.port, "port overridden from environment");
        }

        if let Some(network_id) = self.var(NETWORK_ID_VAR) {
            info!(network = %name, network_id, "network id overridden from environment");
            descriptor.network_id = network_id.to_string();
        }

        if let Some(from) = self.var(FROM_VAR) {
            info!(network = %name, from, "sender overridden from environment");
            descriptor.from_address = Some(from.to_string());
        }

        Ok(())
    }
}
