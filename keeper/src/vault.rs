use std::time::Duration;

use alloy::primitives::Address;
use anyhow::Result;
use bigdecimal::BigDecimal;

use crate::{events::*, ledger::*, units::*};

/// Harvests the stkAave rewards of the vault.
pub async fn harvest<C: VaultActions>(chain: &C) -> Result<TxOutcome> {
    chain.update_stkaave_rewards().await
}

/// The approval and the deposit sent by [`deposit`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DepositReport {
    pub approval: TxOutcome,
    /// Not sent when the approval reverted.
    pub deposit: Option<TxOutcome>,
}

/// Approves the vault for `amount` stkAave, waits for the approval to settle, then deposits the amount on behalf of
/// `receiver`.
///
/// # Arguments:
///
/// - `chain` - Access to the vault and to stkAave.
/// - `amount` - The amount to deposit, in whole stkAave.
/// - `receiver` - The account credited with the vault shares.
/// - `settle_delay` - Time to wait between the approval and the deposit.
///
pub async fn deposit<C: VaultActions>(chain: &C, amount: &BigDecimal, receiver: Address, settle_delay: Duration) -> Result<DepositReport> {
    let wei = u256_from_decimal(amount)?;

    let approval = chain.approve_vault(wei).await?;
    if !approval.is_success() {
        approval_failed_event(amount);
        return Ok(DepositReport { approval, deposit: None });
    }

    tokio::time::sleep(settle_delay).await;

    deposit_event(amount, &receiver);
    let deposit = chain.deposit(wei, receiver).await?;

    Ok(DepositReport { approval, deposit: Some(deposit) })
}
