use alloy::primitives::Address;
use anyhow::Result;
use bigdecimal::BigDecimal;
use discount_yield_model::{check_excess_discount_tokens, AccountBalances};

use crate::{events::*, ledger::*};

/// What was found, and done, when checking a pod for excess stkAave.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ReleaseReport {
    pub pod: Address,
    pub balances: AccountBalances,
    pub needed: BigDecimal,
    /// The `freeStkAave` transaction, sent only when the pod holds more than it needs.
    pub outcome: Option<TxOutcome>,
}

/// Reads the balances of a pod and frees its stkAave when it holds more than its GHO debt needs for the full discount.
///
/// # Arguments:
///
/// - `chain` - Access to the balances and to the pod manager.
/// - `pod` - The pod to check.
/// - `gho_per_discount_token` - The amount of GHO discounted per stkAave held.
///
pub async fn free_excess_stkaave<C>(chain: &C, pod: Address, gho_per_discount_token: &BigDecimal) -> Result<ReleaseReport>
where
    C: Ledger + ManagerActions,
{
    let balances = AccountBalances {
        debt_balance: chain.debt_balance(pod).await?,
        discount_token_balance: chain.discount_token_balance(pod).await?,
    };

    let (needed, should_release) = check_excess_discount_tokens(&balances, gho_per_discount_token)?;
    if !should_release {
        nothing_to_release_event(&pod, &balances.discount_token_balance, &needed);
        return Ok(ReleaseReport { pod, balances, needed, outcome: None });
    }

    release_excess_event(&pod, &balances.discount_token_balance, &needed);
    let outcome = chain.free_stkaave(pod).await?;

    Ok(ReleaseReport { pod, balances, needed, outcome: Some(outcome) })
}

/// A pod found liquidable, by its index in the pod list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LiquidablePod {
    pub index: usize,
    pub pod: Address,
    pub liquidation: Option<TxOutcome>,
}

/// Goes through every pod of the manager and reports the liquidable ones.
///
/// # Arguments:
///
/// - `chain` - Access to the pod manager.
/// - `liquidate` - Whether to send a `liquidatePod` transaction for each liquidable pod.
///
/// # Notes:
///
/// - Pods are checked, and liquidated, one after the other in pod list order.
///
pub async fn scan_pod_liquidations<C>(chain: &C, liquidate: bool) -> Result<Vec<LiquidablePod>>
where
    C: ManagerActions,
{
    let pods = chain.pod_list().await?;

    let mut liquidable = Vec::new();
    for (index, pod) in pods.iter().copied().enumerate() {
        if !chain.is_pod_liquidable(pod).await? {
            continue;
        }
        pod_liquidable_event(index, &pod);

        let liquidation = if liquidate { Some(chain.liquidate_pod(pod).await?) } else { None };
        liquidable.push(LiquidablePod { index, pod, liquidation });
    }

    pods_scanned_event(pods.len(), liquidable.len());
    Ok(liquidable)
}
