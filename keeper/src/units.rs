use alloy::primitives::U256;
use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use discount_yield_model::decimal::{from_wei, to_wei};
use num_bigint::BigUint;

use crate::errors::*;

/// Converts an on-chain amount of an 18 decimals token into whole tokens.
pub fn decimal_from_u256(amount: U256) -> BigDecimal {
    let wei = BigUint::from_bytes_be(&amount.to_be_bytes::<32>());
    from_wei(&wei)
}

/// Converts an amount of whole tokens into its on-chain representation.
///
/// # Notes:
///
/// - Fails on negative amounts, on amounts more precise than the token decimals and on amounts above `U256::MAX`.
///
pub fn u256_from_decimal(amount: &BigDecimal) -> Result<U256> {
    let wei = to_wei(amount)?;
    U256::try_from_be_slice(&wei.to_bytes_be()).context(ERROR_AMOUNT_OVERFLOW)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;

    use super::*;

    #[test_case("0", 0 ; "zero")]
    #[test_case("1", 1_000_000_000_000_000_000 ; "one token")]
    #[test_case("150", 150_000_000_000_000_000_000 ; "default deposit")]
    #[test_case("0.000000000000000001", 1 ; "one wei")]
    fn converts_whole_tokens(amount: &str, wei: u128) {
        let amount = BigDecimal::from_str(amount).unwrap();
        assert_eq!(u256_from_decimal(&amount).unwrap(), U256::from(wei));
        assert_eq!(decimal_from_u256(U256::from(wei)), amount);
    }

    #[test]
    fn max_value_survives() {
        let amount = decimal_from_u256(U256::MAX);
        assert_eq!(u256_from_decimal(&amount).unwrap(), U256::MAX);
    }

    #[test]
    fn rejects_unrepresentable_amounts() {
        assert!(u256_from_decimal(&BigDecimal::from_str("-1").unwrap()).is_err());
        assert!(u256_from_decimal(&BigDecimal::from_str("0.0000000000000000001").unwrap()).is_err());
        let too_large = decimal_from_u256(U256::MAX) + BigDecimal::from(1);
        assert!(u256_from_decimal(&too_large).is_err());
    }
}
