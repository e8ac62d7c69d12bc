use devchain_config::loader::env::{NETWORK_VAR, PORT_VAR};
use devchain_config::{ConfigLoader, EnvLoader, FileLoader, NetworkPreset, NetworksFile};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Devchain Network Declarations Example");
    println!("=====================================\n");

    // Example 1: Built-in presets
    println!("1. Built-in presets:");
    for preset in NetworkPreset::all() {
        let descriptor = preset.descriptor();
        println!(
            "   {:<12} {} network_id={}",
            preset.name(),
            descriptor.rpc_url(),
            descriptor.network_id
        );
    }

    // Example 2: Save and reload a declaration
    println!("\n2. Saving and loading a declaration:");
    let path = std::env::temp_dir().join("devchain_example.toml");
    FileLoader::save_toml(&NetworksFile::presets(), &path).await?;
    println!("   Saved to: {}", path.display());

    let registry = ConfigLoader::with_env(EnvLoader::default())
        .load(Some(&path))
        .await?;
    println!("   Loaded networks: {}", registry.names().join(", "));

    // Example 3: Environment overrides
    println!("\n3. Overriding the ganache port:");
    let env = EnvLoader::from_vars([(NETWORK_VAR, "ganache"), (PORT_VAR, "9545")]);
    let registry = Arc::new(ConfigLoader::with_env(env).load(Some(&path)).await?);
    println!("   ganache -> {}", registry.get("ganache")?.endpoint());

    // Example 4: Lookups share one read-only registry
    println!("\n4. Sharing the registry:");
    let shared = Arc::clone(&registry);
    let handle = tokio::spawn(async move {
        shared
            .get("development")
            .map(|d| d.matches_network_id("1337"))
            .unwrap_or(false)
    });
    println!("   development accepts network 1337: {}", handle.await?);

    std::fs::remove_file(&path)?;
    Ok(())
}
