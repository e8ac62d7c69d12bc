//! Devchain CLI: inspect and validate network declarations

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "devchain")]
#[command(about = "Local blockchain network declarations")]
struct Cli {
    /// Declaration file (TOML or JSON); built-in presets when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Network to act on
    #[arg(short, long, global = true, env = "DEVCHAIN_NETWORK")]
    network: Option<String>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the selected network as JSON
    Show,
    /// List declared networks
    List,
    /// Report every problem in the declaration
    Validate,
    /// Write the preset declaration to a new file
    Init {
        /// Output path; `.json` selects JSON, anything else TOML
        output: PathBuf,
    },
}

fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = cli.config.as_deref();
    let network = cli.network.as_deref();

    match cli.command {
        Commands::Show => commands::show_network(config, network).await,
        Commands::List => commands::list_networks(config, network).await,
        Commands::Validate => commands::validate_config(config, network).await,
        Commands::Init { output } => commands::init_config(&output).await,
    }
}
