use std::env;

use eyre::{eyre, Context};
use once_cell::sync::Lazy;
use owo_colors::OwoColorize;

/// A deployment target known to the harness by name.
#[derive(Debug)]
pub struct Network {
    /// CLI-facing network name.
    pub name: &'static str,
    /// Environment variable holding the network's JSON-RPC URL.
    pub rpc_url_var: &'static str,
    /// Block explorer base URL, when the network has one.
    pub explorer: Option<&'static str>,
}

static NETWORKS: Lazy<Vec<Network>> = Lazy::new(|| {
    vec![
        Network {
            name: "nidum-testnet",
            rpc_url_var: "NIDUM_TESTNET_RPC_URL",
            explorer: None,
        },
        Network {
            name: "polygon-amoy",
            rpc_url_var: "POLYGON_AMOY_RPC_URL",
            explorer: Some("https://amoy.polygonscan.com"),
        },
    ]
});

/// Looks up a named network.
pub fn find(name: &str) -> eyre::Result<&'static Network> {
    NETWORKS
        .iter()
        .find(|network| network.name == name)
        .ok_or_else(|| eyre!("unknown network `{name}`; run `networks` to list the known ones"))
}

impl Network {
    /// The network's JSON-RPC URL, read from its environment variable.
    pub fn rpc_url(&self) -> eyre::Result<String> {
        env::var(self.rpc_url_var)
            .wrap_err_with(|| format!("{} is not set for network {}", self.rpc_url_var, self.name))
    }
}

/// Prints the named networks and whether their RPC URLs are configured.
pub fn list() -> eyre::Result<()> {
    for network in NETWORKS.iter() {
        let status = match env::var(network.rpc_url_var) {
            Ok(_) => "configured".bright_green().to_string(),
            Err(_) => "unset".yellow().to_string(),
        };
        println!("{} ({}): {status}", network.name, network.rpc_url_var);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::find;

    #[test]
    fn finds_known_networks() {
        assert_eq!("NIDUM_TESTNET_RPC_URL", find("nidum-testnet").unwrap().rpc_url_var);
        assert_eq!("POLYGON_AMOY_RPC_URL", find("polygon-amoy").unwrap().rpc_url_var);
    }

    #[test]
    fn rejects_unknown_networks() {
        let error = find("mainnet").unwrap_err();
        assert!(error.to_string().contains("unknown network"));
    }

    #[test]
    fn reads_the_rpc_url_from_the_environment() {
        env::set_var("POLYGON_AMOY_RPC_URL", "https://rpc-amoy.polygon.technology");
        let url = find("polygon-amoy").unwrap().rpc_url().unwrap();
        assert_eq!("https://rpc-amoy.polygon.technology", url);
    }
}
