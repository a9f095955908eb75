use std::fmt;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::{constants::*, errors::*};

/// The network the keeper talks to. Selects the environment variables the RPC url and the private key are read from.
#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Network {
    #[default]
    Goerli,
    Mainnet,
}

impl Network {
    pub fn uri_var(self) -> &'static str {
        match self {
            Network::Goerli => "GOERLI_URI",
            Network::Mainnet => "MAINNET_URI",
        }
    }

    pub fn private_key_var(self) -> &'static str {
        match self {
            Network::Goerli => "GOERLI_PRIVATE_KEY",
            Network::Mainnet => "MAINNET_PRIVATE_KEY",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Goerli => f.write_str("goerli"),
            Network::Mainnet => f.write_str("mainnet"),
        }
    }
}

/// Addresses of the contracts the keeper interacts with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContractAddresses {
    pub stkaave: Address,
    pub debt_gho: Address,
    pub pod_manager: Address,
    pub vault: Address,
}

impl Default for ContractAddresses {
    fn default() -> Self {
        ContractAddresses {
            stkaave: GOERLI_STKAAVE,
            debt_gho: GOERLI_DEBT_GHO,
            pod_manager: GOERLI_POD_MANAGER,
            vault: GOERLI_VAULT,
        }
    }
}

/// Everything a [`crate::client::ChainClient`] needs to connect and sign.
#[derive(Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub network: Network,
    pub rpc_url: String,
    pub private_key: String,
    pub addresses: ContractAddresses,
}

impl fmt::Debug for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkConfig")
            .field("network", &self.network)
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"<redacted>")
            .field("addresses", &self.addresses)
            .finish()
    }
}

/// Command line arguments shared by every keeper binary.
#[derive(Args, Clone, Debug)]
pub struct NetworkArgs {
    /// Network to use, selects the environment variables read when the url or the key are not given.
    #[arg(long, value_enum, env = "DULLAHAN_NETWORK", default_value_t = Network::Goerli)]
    pub network: Network,

    /// RPC endpoint. Defaults to `GOERLI_URI` or `MAINNET_URI`.
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Signer private key. Defaults to `GOERLI_PRIVATE_KEY` or `MAINNET_PRIVATE_KEY`.
    #[arg(long)]
    pub private_key: Option<String>,

    #[arg(long, default_value_t = GOERLI_STKAAVE)]
    pub stkaave: Address,

    /// GHO variable debt token.
    #[arg(long, default_value_t = GOERLI_DEBT_GHO)]
    pub debt_gho: Address,

    #[arg(long, default_value_t = GOERLI_POD_MANAGER)]
    pub pod_manager: Address,

    #[arg(long, default_value_t = GOERLI_VAULT)]
    pub vault: Address,
}

impl NetworkArgs {
    /// Builds the network configuration, reading missing values from the process environment.
    pub fn into_config(self) -> Result<NetworkConfig> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Builds the network configuration, reading missing values through `lookup`.
    ///
    /// # Arguments:
    ///
    /// - `lookup` - Resolves a variable name to its value, if any.
    ///
    pub fn resolve_with<F>(self, lookup: F) -> Result<NetworkConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = self.network;
        let rpc_url = non_empty(self.rpc_url).or_else(|| non_empty(lookup(network.uri_var()))).context(ERROR_MISSING_RPC_URL)?;
        let private_key = non_empty(self.private_key).or_else(|| non_empty(lookup(network.private_key_var()))).context(ERROR_MISSING_PRIVATE_KEY)?;

        let addresses = ContractAddresses {
            stkaave: self.stkaave,
            debt_gho: self.debt_gho,
            pod_manager: self.pod_manager,
            vault: self.vault,
        };

        Ok(NetworkConfig { network, rpc_url, private_key, addresses })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
