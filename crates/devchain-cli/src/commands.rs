//! CLI subcommand implementations.

use anyhow::{Context, Result};
use devchain_config::loader::env::NETWORK_VAR;
use devchain_config::validation::ConfigValidator;
use devchain_config::{
    ConfigLoader, ConfigRegistry, ConfigUtils, EnvLoader, FileLoader, NetworksFile,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Network used by `show` when none is selected and several are declared
const FALLBACK_NETWORK: &str = "development";

/// Loader over the process environment, with `--network` taking precedence
/// over `DEVCHAIN_NETWORK` as the override target.
pub fn loader(network: Option<&str>) -> ConfigLoader {
    let env = EnvLoader::from_env();
    let env = match network {
        Some(name) => env.with_network(name),
        None => env,
    };
    ConfigLoader::with_env(env)
}

/// The given declaration, else one found in the standard locations
///
/// `None` means no declaration exists and the presets apply.
pub fn resolve_config(config: Option<&Path>) -> Option<PathBuf> {
    match config {
        Some(path) => Some(path.to_path_buf()),
        None => match ConfigUtils::find_default_config() {
            Ok(path) => {
                debug!(path = %path.display(), "found declaration");
                Some(path)
            }
            Err(_) => None,
        },
    }
}

/// Pick the network to act on when the caller did not name one
pub fn default_network(registry: &ConfigRegistry) -> Result<String> {
    let names = registry.names();
    match names.as_slice() {
        [only] => Ok(only.to_string()),
        _ if registry.contains(FALLBACK_NETWORK) => Ok(FALLBACK_NETWORK.to_string()),
        _ => anyhow::bail!(
            "several networks declared ({}); select one with --network or {}",
            names.join(", "),
            NETWORK_VAR
        ),
    }
}

pub async fn show_network(config: Option<&Path>, network: Option<&str>) -> Result<()> {
    let registry = loader(network).load(resolve_config(config)).await?;
    let name = match network {
        Some(name) => name.to_string(),
        None => default_network(&registry)?,
    };

    let descriptor = registry.get(&name)?;
    info!(network = %name, url = %descriptor.rpc_url(), "selected network");

    let mut declaration = NetworksFile::new();
    declaration.networks.insert(name, descriptor.clone());
    println!("{}", serde_json::to_string_pretty(&declaration)?);
    Ok(())
}

pub async fn list_networks(config: Option<&Path>, network: Option<&str>) -> Result<()> {
    let registry = loader(network).load(resolve_config(config)).await?;
    for name in registry.names() {
        let descriptor = registry.get(name)?;
        println!(
            "{:<16} {:<24} network_id={}",
            name,
            descriptor.endpoint(),
            descriptor.network_id
        );
    }
    Ok(())
}

pub async fn validate_config(config: Option<&Path>, network: Option<&str>) -> Result<()> {
    let file = loader(network).load_file(resolve_config(config)).await?;
    let issues = ConfigValidator::validate_file(&file);

    if issues.is_empty() {
        println!("{} network(s) valid", file.networks.len());
        return Ok(());
    }

    for issue in &issues {
        println!("invalid: {}", issue);
    }
    anyhow::bail!("{} validation issue(s) found", issues.len())
}

pub async fn init_config(output: &Path) -> Result<()> {
    anyhow::ensure!(
        !output.exists(),
        "refusing to overwrite existing file {}",
        output.display()
    );

    FileLoader::save_auto(&NetworksFile::presets(), output)
        .await
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote preset networks to {}", output.display());
    Ok(())
}
