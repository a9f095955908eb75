use std::time::Duration;

use alloy::primitives::{address, Address};

/// stkAave, the discount token held by pods and deposited into the vault, on Goerli.
pub const GOERLI_STKAAVE: Address = address!("b85B34C58129a9a7d54149e86934ed3922b05592");

/// The GHO variable debt token on Goerli. Its balance is the debt of an account.
pub const GOERLI_DEBT_GHO: Address = address!("80aa933EfF12213022Fd3d17c2c59C066cBb91c7");

/// The Dullahan pod manager on Goerli.
pub const GOERLI_POD_MANAGER: Address = address!("D8B9147B8f77721635b1C4128c25dA601F10edc4");

/// The Dullahan vault on Goerli.
pub const GOERLI_VAULT: Address = address!("6c4a5Ae899E86BD2f849b3f53261278e66Ff688C");

/// Time to wait after a transaction is sent before polling for its receipt.
pub const RECEIPT_DELAY: Duration = Duration::from_secs(5);

/// Time to wait between the approval and the deposit, so the allowance is mined first.
pub const DEPOSIT_SETTLE_DELAY: Duration = Duration::from_secs(15);

/// HTTP timeout of every RPC request.
pub const RPC_TIMEOUT: Duration = Duration::from_secs(60);

/// Amount of stkAave deposited when none is given, in whole tokens.
pub const DEFAULT_DEPOSIT_AMOUNT: u64 = 150;

/// Default log filter of the binaries, overridable through `RUST_LOG`.
pub const DEFAULT_LOG_FILTER: &str = "info";
