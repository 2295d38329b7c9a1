//! Command-line front end for chain classification and resolution.
//!
//! # Usage
//!
//! ```bash
//! # List every supported chain
//! xchain list
//!
//! # Only UTXO-based testnets, as JSON
//! xchain --json list --family utxo-based --tier testnet
//!
//! # Describe one chain
//! xchain inspect arbitrum
//!
//! # Check an address against a chain's rules
//! xchain validate bitcoin_testnet tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx
//!
//! # Resolve the chains listed in a config file
//! CONFIG=/path/to/chains.toml xchain config
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` - Path to TOML configuration file (default: `chains.toml`)
//! - `RUST_LOG` - Log level filter (default: `info`)

#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xchain::{ChainFamily, ChainName, ChainOps, NetworkTier, classify};

use xchain_resolver::config::{ChainSetConfig, DEFAULT_CONFIG_PATH};
use xchain_resolver::{Asset, Chain, ChainSet, ConfigError, ResolveError};

#[derive(Debug, Parser)]
#[command(name = "xchain", version, about = "Classify and resolve blockchain names")]
struct Cli {
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List supported chains.
    List {
        /// Only chains of this family.
        #[arg(long, value_enum)]
        family: Option<ChainFamily>,
        /// Only chains on this network tier.
        #[arg(long, value_enum)]
        tier: Option<NetworkTier>,
    },
    /// Resolve a chain name and describe it.
    Inspect {
        /// Chain name, e.g. `bitcoin_regtest`.
        name: String,
    },
    /// Validate an address or asset identifier on a chain.
    Validate {
        /// Chain name, e.g. `ethereum_localnet`.
        name: String,
        /// Address to check.
        address: String,
        /// Treat the input as an asset identifier (`primary`, a symbol or a token contract).
        #[arg(long)]
        asset: bool,
    },
    /// Load a chain set configuration and resolve every chain in it.
    Config {
        /// Path to the configuration file.
        #[arg(long, env = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
        config: String,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::List { family, tier } => list(family, tier, cli.json),
        Command::Inspect { name } => {
            let chain = resolve(&name)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&chain.summary())?);
            } else {
                println!("{}", chain.summary());
            }
            Ok(())
        }
        Command::Validate {
            name,
            address,
            asset,
        } => {
            let chain = resolve(&name)?;
            if asset {
                let asset = Asset::parse(chain, &address)?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&asset)?);
                } else {
                    println!("{asset}");
                }
            } else {
                chain.validate_address(&address)?;
                if cli.json {
                    println!(
                        "{}",
                        serde_json::json!({ "chain": chain.name(), "address": address, "valid": true })
                    );
                } else {
                    println!("{address} is a valid {} address", chain.name());
                }
            }
            Ok(())
        }
        Command::Config { config } => {
            let config = ChainSetConfig::load_from(&config)?;
            let set = match ChainSet::from_config(&config) {
                Ok(set) => set,
                Err(ConfigError::Resolve(ResolveError::Violation(violation))) => violation.abort(),
                Err(e) => return Err(e.into()),
            };
            if set.is_empty() {
                tracing::warn!("No chains configured");
            }
            tracing::info!(
                chains = set.len(),
                mainnet = set.has_mainnet(),
                "Resolved chain set"
            );
            if cli.json {
                let chains: Vec<_> = set.iter().collect();
                println!("{}", serde_json::to_string_pretty(&chains)?);
            } else {
                for chain in &set {
                    println!("{chain}");
                }
            }
            Ok(())
        }
    }
}

fn list(
    family: Option<ChainFamily>,
    tier: Option<NetworkTier>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let names: Vec<ChainName> = ChainName::ALL
        .into_iter()
        .filter(|name| family.is_none_or(|family| name.family() == family))
        .filter(|name| tier.is_none_or(|tier| name.network_tier() == tier))
        .collect();

    if json {
        let rows: Vec<_> = names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": name,
                    "family": name.family(),
                    "networkTier": name.network_tier(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for name in names {
            println!("{name:<20} {:<14} {}", name.family(), name.network_tier());
        }
    }
    Ok(())
}

/// Classifies and resolves `name`, aborting on a contract violation.
fn resolve(name: &str) -> Result<Chain, ResolveError> {
    let family = classify(name)?;
    tracing::debug!(chain = name, %family, "Classified chain");
    match Chain::from_name(name) {
        Err(ResolveError::Violation(violation)) => violation.abort(),
        result => result,
    }
}
