use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::{constants::*, decimal::*};

/// The protocol wide parameters driving the renting rate and the yields derived from it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RateParameters {
    #[serde(deserialize_with = "deserialize_exact")]
    pub base_multiplier: BigDecimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub utilization_threshold: BigDecimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub seconds_per_year: BigDecimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub renting_fee_yearly_rate: BigDecimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub extra_multiplier_per_unit_over_threshold: BigDecimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub protocol_fee_rate: BigDecimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub gho_per_discount_token: BigDecimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub gho_yearly_apy: BigDecimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub max_interest_rate_discount: BigDecimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub vault_tvl: BigDecimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub price_of_discount_token: BigDecimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub price_of_gho: BigDecimal,
}

impl Default for RateParameters {
    fn default() -> Self {
        RateParameters {
            base_multiplier: BigDecimal::from(BASE_MULTIPLIER),
            utilization_threshold: from_bps(UTILIZATION_THRESHOLD_BPS),
            seconds_per_year: BigDecimal::from(SECONDS_PER_YEAR),
            renting_fee_yearly_rate: from_bps(RENTING_FEE_YEARLY_RATE_BPS),
            extra_multiplier_per_unit_over_threshold: BigDecimal::from(EXTRA_MULTIPLIER_PER_UNIT_OVER_THRESHOLD),
            protocol_fee_rate: from_bps(PROTOCOL_FEE_RATE_BPS),
            gho_per_discount_token: BigDecimal::from(GHO_DISCOUNTED_PER_DISCOUNT_TOKEN),
            gho_yearly_apy: from_bps(GHO_YEARLY_APY_BPS),
            max_interest_rate_discount: from_bps(MAX_INTEREST_RATE_DISCOUNT_BPS),
            vault_tvl: BigDecimal::from(VAULT_TVL),
            price_of_discount_token: decimal(DISCOUNT_TOKEN_PRICE_CENTS, 2),
            price_of_gho: decimal(GHO_PRICE_CENTS, 2),
        }
    }
}

/// The balances of a single account (a pod) as read from the ledger, in token units.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct AccountBalances {
    pub debt_balance: BigDecimal,
    pub discount_token_balance: BigDecimal,
}

/// One point of a utilization sweep. Rates are fractions, i.e. `0.02` stands for 2%.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct UtilizationSample {
    pub rented_amount: BigDecimal,
    pub utilization_rate: BigDecimal,
    pub renting_rate_per_second: BigDecimal,
    pub yearly_renting_rate: BigDecimal,
    pub vanilla_borrow_rate: BigDecimal,
    pub discounted_borrow_rate: BigDecimal,
    pub adjusted_borrow_rate: BigDecimal,
    pub holder_apr: BigDecimal,
}
