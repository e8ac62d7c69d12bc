use crate::{ConfigError, ConfigResult, NetworksFile};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// File-based declaration loader
pub struct FileLoader;

impl FileLoader {
    pub fn parse_toml(content: &str) -> ConfigResult<NetworksFile> {
        Ok(toml::from_str(content)?)
    }

    pub fn parse_json(content: &str) -> ConfigResult<NetworksFile> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a declaration from a TOML file
    pub async fn load_toml<P: AsRef<Path>>(path: P) -> ConfigResult<NetworksFile> {
        let content = fs::read_to_string(path.as_ref()).await?;
        Self::parse_toml(&content)
    }

    /// Load a declaration from a JSON file
    pub async fn load_json<P: AsRef<Path>>(path: P) -> ConfigResult<NetworksFile> {
        let content = fs::read_to_string(path.as_ref()).await?;
        Self::parse_json(&content)
    }

    /// Pick the format from the file extension
    pub async fn load_auto<P: AsRef<Path>>(path: P) -> ConfigResult<NetworksFile> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        debug!(path = %path.display(), "loading network declaration");
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::load_toml(path).await,
            Some("json") => Self::load_json(path).await,
            Some(ext) => Err(ConfigError::InvalidFormat(format!(
                "Unsupported file extension: {}",
                ext
            ))),
            None => {
                // JSON declarations are always an object
                let content = fs::read_to_string(path).await?;
                if content.trim_start().starts_with('{') {
                    Self::parse_json(&content)
                } else {
                    Self::parse_toml(&content)
                }
            }
        }
    }

    /// Save a declaration to a TOML file
    pub async fn save_toml<P: AsRef<Path>>(file: &NetworksFile, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(file)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Save a declaration to a JSON file
    pub async fn save_json<P: AsRef<Path>>(file: &NetworksFile, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(file)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Save using the format implied by the extension
    pub async fn save_auto<P: AsRef<Path>>(file: &NetworksFile, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::save_json(file, path).await,
            Some("toml") | None => Self::save_toml(file, path).await,
            Some(ext) => Err(ConfigError::InvalidFormat(format!(
                "Unsupported file extension: {}",
                ext
            ))),
        }
    }
}
