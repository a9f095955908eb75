use std::{str::FromStr, time::Duration};

use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::{Address, U256},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::client::RpcClient,
    signers::local::PrivateKeySigner,
    transports::http::reqwest,
};
use anyhow::{Context, Result};
use bigdecimal::BigDecimal;

use crate::{config::*, constants::*, contracts::*, errors::*, events::*, ledger::*, units::*};

/// Chain client backed by an alloy provider, signing with a local private key.
#[derive(Clone)]
pub struct ChainClient {
    provider: DynProvider,
    signer: Address,
    addresses: ContractAddresses,
    receipt_delay: Duration,
}

impl ChainClient {
    /// Connects to the configured network over HTTP.
    ///
    /// # Arguments:
    ///
    /// - `config` - The network configuration, including the signer key.
    ///
    pub fn connect(config: &NetworkConfig) -> Result<Self> {
        let signer = PrivateKeySigner::from_str(&config.private_key).context(ERROR_INVALID_PRIVATE_KEY)?;
        let account = signer.address();

        let url = reqwest::Url::parse(&config.rpc_url).context(ERROR_INVALID_RPC_URL)?;
        let http = reqwest::Client::builder().timeout(RPC_TIMEOUT).build().context(ERROR_HTTP_CLIENT)?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_client(RpcClient::new_http_with_client(http, url))
            .erased();

        Ok(ChainClient { provider, signer: account, addresses: config.addresses, receipt_delay: RECEIPT_DELAY })
    }

    /// The address transactions are sent from.
    pub fn signer(&self) -> Address {
        self.signer
    }

    pub fn addresses(&self) -> &ContractAddresses {
        &self.addresses
    }

    async fn confirm(&self, call: &str, pending: PendingTransactionBuilder<Ethereum>) -> Result<TxOutcome> {
        let hash = *pending.tx_hash();
        transaction_sent_event(call, &hash);

        tokio::time::sleep(self.receipt_delay).await;
        let receipt = pending.get_receipt().await.context(ERROR_RECEIPT_UNAVAILABLE)?;

        let status = TxStatus::from(receipt.status());
        transaction_result_event(&hash, status);

        Ok(TxOutcome { hash, status })
    }

    async fn balance_of(&self, token: Address, account: Address) -> Result<BigDecimal> {
        let balance = IERC20::new(token, self.provider.clone()).balanceOf(account).call().await.with_context(|| format!("balanceOf({account}) on {token}"))?;
        Ok(decimal_from_u256(balance))
    }
}

impl Ledger for ChainClient {
    async fn debt_balance(&self, account: Address) -> Result<BigDecimal> {
        self.balance_of(self.addresses.debt_gho, account).await
    }

    async fn discount_token_balance(&self, account: Address) -> Result<BigDecimal> {
        self.balance_of(self.addresses.stkaave, account).await
    }
}

impl ManagerActions for ChainClient {
    async fn free_stkaave(&self, pod: Address) -> Result<TxOutcome> {
        let manager = IPodManager::new(self.addresses.pod_manager, self.provider.clone());
        let pending = manager.freeStkAave(pod).send().await.context("freeStkAave")?;
        self.confirm("freeStkAave", pending).await
    }

    async fn process_reserve(&self) -> Result<TxOutcome> {
        let manager = IPodManager::new(self.addresses.pod_manager, self.provider.clone());
        let pending = manager.processReserve().send().await.context("processReserve")?;
        self.confirm("processReserve", pending).await
    }

    async fn pod_list(&self) -> Result<Vec<Address>> {
        let manager = IPodManager::new(self.addresses.pod_manager, self.provider.clone());
        manager.getPodList().call().await.context("getPodList")
    }

    async fn is_pod_liquidable(&self, pod: Address) -> Result<bool> {
        let manager = IPodManager::new(self.addresses.pod_manager, self.provider.clone());
        manager.isPodLiquidable(pod).call().await.with_context(|| format!("isPodLiquidable({pod})"))
    }

    async fn liquidate_pod(&self, pod: Address) -> Result<TxOutcome> {
        let manager = IPodManager::new(self.addresses.pod_manager, self.provider.clone());
        let pending = manager.liquidatePod(pod).send().await.context("liquidatePod")?;
        self.confirm("liquidatePod", pending).await
    }
}

impl VaultActions for ChainClient {
    async fn update_stkaave_rewards(&self) -> Result<TxOutcome> {
        let vault = IDullahanVault::new(self.addresses.vault, self.provider.clone());
        let pending = vault.updateStkAaveRewards().send().await.context("updateStkAaveRewards")?;
        self.confirm("updateStkAaveRewards", pending).await
    }

    async fn approve_vault(&self, amount: U256) -> Result<TxOutcome> {
        let stkaave = IERC20::new(self.addresses.stkaave, self.provider.clone());
        let pending = stkaave.approve(self.addresses.vault, amount).send().await.context("approve")?;
        self.confirm("approve", pending).await
    }

    async fn deposit(&self, amount: U256, receiver: Address) -> Result<TxOutcome> {
        let vault = IDullahanVault::new(self.addresses.vault, self.provider.clone());
        let pending = vault.deposit(amount, receiver).send().await.context("deposit")?;
        self.confirm("deposit", pending).await
    }
}
