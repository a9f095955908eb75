use anyhow::Result;
use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{constants::*, decimal::*, errors::*, models::*, require};

// Requires

/// Requires that the given amount is not negative.
///
pub fn require_non_negative(amount: &BigDecimal) -> Result<()> {
    require!(!is_negative(amount), ERROR_NEGATIVE_AMOUNT);
    Ok(())
}

/// Requires that both balances of an account are not negative.
///
pub fn require_valid_balances(balances: &AccountBalances) -> Result<()> {
    require_non_negative(&balances.debt_balance)?;
    require_non_negative(&balances.discount_token_balance)
}

/// Requires a well formed set of rate parameters. Checked once before a sweep, so that no sample ever divides by zero
/// or yields a negative rate.
///
/// # Notes:
///
/// - Every parameter must be non-negative.
/// - Quantities used as divisors must be strictly positive.
/// - Threshold, protocol fee and max discount are fractions and must lie within `[0, 1]`.
///
pub fn require_valid_rate_parameters(params: &RateParameters) -> Result<()> {
    let RateParameters {
        base_multiplier,
        utilization_threshold,
        seconds_per_year,
        renting_fee_yearly_rate,
        extra_multiplier_per_unit_over_threshold,
        protocol_fee_rate,
        gho_per_discount_token,
        gho_yearly_apy,
        max_interest_rate_discount,
        vault_tvl,
        price_of_discount_token,
        price_of_gho,
    } = params;

    for parameter in [base_multiplier, renting_fee_yearly_rate, extra_multiplier_per_unit_over_threshold, gho_yearly_apy] {
        require!(!is_negative(parameter), ERROR_NEGATIVE_RATE_PARAMETER);
    }

    require!(is_positive(vault_tvl), ERROR_INVALID_VAULT_TVL);
    require!(is_positive(seconds_per_year), ERROR_INVALID_SECONDS_PER_YEAR);
    require!(is_positive(gho_per_discount_token), ERROR_INVALID_GHO_PER_DISCOUNT_TOKEN);
    require!(is_positive(price_of_discount_token), ERROR_INVALID_DISCOUNT_TOKEN_PRICE);
    require!(is_positive(price_of_gho), ERROR_INVALID_GHO_PRICE);

    require!(is_fraction(utilization_threshold), ERROR_INVALID_UTILIZATION_THRESHOLD);
    require!(is_fraction(protocol_fee_rate), ERROR_INVALID_PROTOCOL_FEE_RATE);
    require!(is_fraction(max_interest_rate_discount), ERROR_INVALID_MAX_INTEREST_RATE_DISCOUNT);

    Ok(())
}

/// Requires a strictly positive sweep step, otherwise the sweep would never reach the vault TVL.
///
pub fn require_valid_utilization_step(step: &BigDecimal) -> Result<()> {
    require!(is_positive(step), ERROR_INVALID_UTILIZATION_STEP);
    Ok(())
}

// Checks

#[inline]
fn is_positive(value: &BigDecimal) -> bool {
    !value.is_zero() && !is_negative(value)
}

#[inline]
fn is_fraction(value: &BigDecimal) -> bool {
    !is_negative(value) && value <= &from_bps(MAX_RATE_BPS)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn d(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn default_parameters_are_valid() {
        assert!(require_valid_rate_parameters(&RateParameters::default()).is_ok());
    }

    #[test]
    fn zero_vault_tvl_is_rejected() {
        let params = RateParameters { vault_tvl: BigDecimal::zero(), ..Default::default() };
        let err = require_valid_rate_parameters(&params).unwrap_err();
        assert_eq!(err.to_string(), ERROR_INVALID_VAULT_TVL);
    }

    #[test]
    fn negative_rate_is_rejected() {
        let params = RateParameters { renting_fee_yearly_rate: d("-0.1"), ..Default::default() };
        let err = require_valid_rate_parameters(&params).unwrap_err();
        assert_eq!(err.to_string(), ERROR_NEGATIVE_RATE_PARAMETER);
    }

    #[test]
    fn fractions_must_not_exceed_one() {
        let params = RateParameters { protocol_fee_rate: d("1.01"), ..Default::default() };
        let err = require_valid_rate_parameters(&params).unwrap_err();
        assert_eq!(err.to_string(), ERROR_INVALID_PROTOCOL_FEE_RATE);

        let params = RateParameters { utilization_threshold: d("1"), ..Default::default() };
        assert!(require_valid_rate_parameters(&params).is_ok());
    }

    #[test]
    fn negative_balances_are_rejected() {
        let balances = AccountBalances { debt_balance: d("10"), discount_token_balance: d("-1") };
        assert!(require_valid_balances(&balances).is_err());
    }

    #[test]
    fn step_must_be_positive() {
        assert!(require_valid_utilization_step(&d("0")).is_err());
        assert!(require_valid_utilization_step(&d("-5")).is_err());
        assert!(require_valid_utilization_step(&d("0.5")).is_ok());
    }
}
