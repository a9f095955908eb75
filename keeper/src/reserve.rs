use anyhow::Result;

use crate::ledger::*;

/// Has the pod manager process its reserve.
pub async fn process_reserve<C: ManagerActions>(chain: &C) -> Result<TxOutcome> {
    chain.process_reserve().await
}
