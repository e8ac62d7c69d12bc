//! Declaration loading and environment handling

pub mod env;
pub mod file;
pub mod validation;

pub use env::EnvLoader;
pub use file::FileLoader;
pub use validation::*;

use crate::{ConfigRegistry, ConfigResult, NetworksFile};
use std::path::Path;
use tracing::info;

/// Builds the process registry from a declaration file or the presets
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    env: EnvLoader,
}

impl ConfigLoader {
    /// Loader that honours the current process environment
    pub fn new() -> Self {
        Self {
            env: EnvLoader::from_env(),
        }
    }

    /// Loader using an explicit set of environment overrides
    pub fn with_env(env: EnvLoader) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &EnvLoader {
        &self.env
    }

    /// Read the declaration and apply environment overrides, without validating
    ///
    /// With no path the built-in presets are used. A path that cannot be read
    /// or parsed is an error; there is no fallback to the presets.
    pub async fn load_file<P: AsRef<Path>>(&self, path: Option<P>) -> ConfigResult<NetworksFile> {
        let mut file = match path {
            Some(path) => FileLoader::load_auto(path).await?,
            None => NetworksFile::presets(),
        };
        self.env.apply_overrides(&mut file)?;
        Ok(file)
    }

    /// Load, override and validate into a registry
    pub async fn load<P: AsRef<Path>>(&self, path: Option<P>) -> ConfigResult<ConfigRegistry> {
        let registry = self.load_file(path).await?.into_registry()?;
        info!(networks = registry.len(), "network registry initialized");
        Ok(registry)
    }
}
