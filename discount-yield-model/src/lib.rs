//! Discount and renting yield model of the Dullahan vault.
//!
//! Answers two questions: how many discount tokens (stkAave) a pod needs to keep the full discount on its GHO debt, and
//! how renting rates and holder yields evolve as the vault utilization grows.

pub mod commons;
pub mod constants;
pub mod decimal;
pub mod discount;
pub mod errors;
pub mod events;
pub mod models;
pub mod utilization;

pub use discount::{check_excess_discount_tokens, needed_discount_tokens, needed_discount_tokens_with_threshold, should_release_excess_discount_tokens};
pub use models::{AccountBalances, RateParameters, UtilizationSample};
pub use utilization::{compute_utilization_sweep, renting_rate_per_second, UtilizationSweep, UtilizationSweepIter};
