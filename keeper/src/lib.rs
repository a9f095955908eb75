//! Keeper tooling of the Dullahan protocol: reads pod balances and sends the maintenance transactions of the pod
//! manager and the vault.

pub mod client;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod logging;
pub mod pods;
pub mod reserve;
pub mod units;
pub mod vault;

#[cfg(test)]
mod mock;

pub use client::ChainClient;
pub use config::{ContractAddresses, Network, NetworkArgs, NetworkConfig};
pub use ledger::{Ledger, ManagerActions, TxOutcome, TxStatus, VaultActions};
