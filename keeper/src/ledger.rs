use std::fmt;

use alloy::primitives::{Address, B256, U256};
use anyhow::Result;
use bigdecimal::BigDecimal;

/// Status of a mined transaction, as reported by its receipt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TxStatus {
    Success,
    Failed,
}

impl From<bool> for TxStatus {
    fn from(success: bool) -> Self {
        if success {
            TxStatus::Success
        } else {
            TxStatus::Failed
        }
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxStatus::Success => f.write_str("Success"),
            TxStatus::Failed => f.write_str("Failed"),
        }
    }
}

/// Outcome of a submitted transaction. A reverted transaction is an outcome, not an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TxOutcome {
    pub hash: B256,
    pub status: TxStatus,
}

impl TxOutcome {
    pub fn is_success(&self) -> bool {
        self.status == TxStatus::Success
    }
}

impl fmt::Display for TxOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tx hash : 0x{}", hex::encode(self.hash))?;
        writeln!(f)?;
        write!(f, "Result : {}", self.status)
    }
}

/// Read access to the balances that drive the discount of a pod, in whole tokens.
#[allow(async_fn_in_trait)]
pub trait Ledger {
    /// The GHO variable debt of an account.
    async fn debt_balance(&self, account: Address) -> Result<BigDecimal>;

    /// The stkAave held by an account.
    async fn discount_token_balance(&self, account: Address) -> Result<BigDecimal>;
}

/// Calls to the Dullahan pod manager.
#[allow(async_fn_in_trait)]
pub trait ManagerActions {
    async fn free_stkaave(&self, pod: Address) -> Result<TxOutcome>;

    async fn process_reserve(&self) -> Result<TxOutcome>;

    async fn pod_list(&self) -> Result<Vec<Address>>;

    async fn is_pod_liquidable(&self, pod: Address) -> Result<bool>;

    async fn liquidate_pod(&self, pod: Address) -> Result<TxOutcome>;
}

/// Calls to the Dullahan vault, and the stkAave approval its deposits need.
#[allow(async_fn_in_trait)]
pub trait VaultActions {
    async fn update_stkaave_rewards(&self) -> Result<TxOutcome>;

    /// Approves the vault to pull `amount` stkAave (in wei) from the signer.
    async fn approve_vault(&self, amount: U256) -> Result<TxOutcome>;

    async fn deposit(&self, amount: U256, receiver: Address) -> Result<TxOutcome>;
}
