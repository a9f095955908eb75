use alloy::primitives::{Address, B256};
use bigdecimal::BigDecimal;
use tracing::{info, warn};

use crate::ledger::TxStatus;

/// Event emitted when a pod holds more stkAave than its debt needs and the excess is about to be released.
pub fn release_excess_event(pod: &Address, balance: &BigDecimal, needed: &BigDecimal) {
    info!(%pod, %balance, %needed, "releasing excess stkAave");
}

/// Event emitted when a pod holds no more stkAave than it needs.
pub fn nothing_to_release_event(pod: &Address, balance: &BigDecimal, needed: &BigDecimal) {
    info!(%pod, %balance, %needed, "nothing to release");
}

pub fn transaction_sent_event(call: &str, hash: &B256) {
    info!(call, %hash, "transaction sent");
}

/// Event emitted once the receipt of a transaction is known.
pub fn transaction_result_event(hash: &B256, status: TxStatus) {
    match status {
        TxStatus::Success => info!(%hash, %status, "transaction mined"),
        TxStatus::Failed => warn!(%hash, %status, "transaction reverted"),
    }
}

/// Event emitted for every pod found liquidable.
pub fn pod_liquidable_event(index: usize, pod: &Address) {
    warn!(index, %pod, "pod is liquidable");
}

pub fn pods_scanned_event(total: usize, liquidable: usize) {
    info!(total, liquidable, "pods scanned");
}

/// Event emitted before depositing into the vault.
pub fn deposit_event(amount: &BigDecimal, receiver: &Address) {
    info!(%amount, %receiver, "depositing stkAave");
}

pub fn approval_failed_event(amount: &BigDecimal) {
    warn!(%amount, "stkAave approval reverted, deposit not sent");
}
