use std::{
    cell::RefCell,
    collections::HashMap,
    io,
    sync::{Arc, Mutex},
};

use alloy::primitives::{Address, B256, U256};
use anyhow::{anyhow, Result};
use bigdecimal::BigDecimal;

use crate::ledger::*;

/// In-memory chain recording every transaction it is asked to send.
#[derive(Default)]
pub struct MockChain {
    pub debts: HashMap<Address, BigDecimal>,
    pub discount_tokens: HashMap<Address, BigDecimal>,
    pub pods: Vec<Address>,
    pub liquidable: Vec<Address>,
    pub reverting: Vec<&'static str>,
    pub sent: RefCell<Vec<String>>,
}

impl MockChain {
    fn send(&self, call: String) -> Result<TxOutcome> {
        let mut sent = self.sent.borrow_mut();
        sent.push(call.clone());

        let name = call.split('(').next().unwrap_or_default();
        let status = TxStatus::from(!self.reverting.iter().any(|reverting| *reverting == name));
        Ok(TxOutcome { hash: B256::with_last_byte(sent.len() as u8), status })
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl Ledger for MockChain {
    async fn debt_balance(&self, account: Address) -> Result<BigDecimal> {
        Ok(self.debts.get(&account).cloned().unwrap_or_default())
    }

    async fn discount_token_balance(&self, account: Address) -> Result<BigDecimal> {
        Ok(self.discount_tokens.get(&account).cloned().unwrap_or_default())
    }
}

impl ManagerActions for MockChain {
    async fn free_stkaave(&self, pod: Address) -> Result<TxOutcome> {
        self.send(format!("freeStkAave({pod})"))
    }

    async fn process_reserve(&self) -> Result<TxOutcome> {
        self.send("processReserve()".into())
    }

    async fn pod_list(&self) -> Result<Vec<Address>> {
        Ok(self.pods.clone())
    }

    async fn is_pod_liquidable(&self, pod: Address) -> Result<bool> {
        if !self.pods.contains(&pod) {
            return Err(anyhow!("unknown pod {pod}"));
        }
        Ok(self.liquidable.contains(&pod))
    }

    async fn liquidate_pod(&self, pod: Address) -> Result<TxOutcome> {
        self.send(format!("liquidatePod({pod})"))
    }
}

impl VaultActions for MockChain {
    async fn update_stkaave_rewards(&self) -> Result<TxOutcome> {
        self.send("updateStkAaveRewards()".into())
    }

    async fn approve_vault(&self, amount: U256) -> Result<TxOutcome> {
        self.send(format!("approve({amount})"))
    }

    async fn deposit(&self, amount: U256, receiver: Address) -> Result<TxOutcome> {
        self.send(format!("deposit({amount},{receiver})"))
    }
}

/// Log output captured at `info`, for asserting on emitted events.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        let logs = self.clone();
        tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).with_ansi(false).with_writer(move || logs.clone()).finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
