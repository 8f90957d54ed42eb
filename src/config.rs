use std::path::PathBuf;

use clap::{command, Args, Parser, Subcommand};

use crate::network;

/// Main entrypoint to the deployer.
pub fn run() -> eyre::Result<()> {
    let config = Config::parse();
    config.command.run()
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Config {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(name = "deploy")]
    Deploy(Deploy),
    #[command(name = "networks")]
    Networks,
}

impl Commands {
    pub fn run(&self) -> eyre::Result<()> {
        match self {
            Commands::Deploy(command) => command.run(),
            Commands::Networks => network::list(),
        }
    }
}

/// Deploy the MachineRegistry contract to an EVM-compatible network.
#[derive(Parser, Debug)]
pub struct Deploy {
    /// Named target network (see the `networks` command).
    #[arg(long, conflicts_with = "endpoint")]
    pub network: Option<String>,
    /// JSON-RPC endpoint of the target network.
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Path to the contract's compiled artifact.
    #[arg(
        long,
        default_value = "artifacts/contracts/MachineRegistry.sol/MachineRegistry.json"
    )]
    pub artifact: PathBuf,
    /// ABI-encoded constructor arguments, as hex strings.
    #[arg(long)]
    pub args: Vec<String>,
    #[command(flatten)]
    pub auth: PrivateKey,
}

impl Deploy {
    pub fn run(&self) -> eyre::Result<()> {
        crate::deployer::deploy(self)
    }

    /// The JSON-RPC URL of the deployment target.
    pub fn rpc_url(&self) -> eyre::Result<String> {
        match (&self.network, &self.endpoint) {
            (Some(name), _) => network::find(name)?.rpc_url(),
            (None, Some(endpoint)) => Ok(endpoint.clone()),
            (None, None) => eyre::bail!("either --network or --endpoint is required"),
        }
    }

    pub fn explorer(&self) -> Option<&'static str> {
        let name = self.network.as_deref()?;
        network::find(name).ok()?.explorer
    }
}

/// Credentials of the deploying account.
#[derive(Args, Clone, Debug)]
pub struct PrivateKey {
    /// The deployer's private key.
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
    /// Path to a file holding the deployer's private key.
    #[arg(long, conflicts_with = "private_key")]
    pub private_key_path: Option<PathBuf>,
    /// Path to the deployer's encrypted keystore.
    #[arg(long, conflicts_with = "private_key")]
    pub keystore_path: Option<PathBuf>,
    /// Path to a file holding the keystore's password.
    #[arg(long)]
    pub keystore_password_path: Option<PathBuf>,
}
