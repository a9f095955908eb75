//! Fixed precision decimal arithmetic.
//!
//! Every operation computes the exact result and then keeps `DECIMAL_PRECISION` significant digits, rounding toward
//! negative infinity, the same way token amounts are truncated on chain. Chaining operations therefore rounds once per
//! operation, never at the end only.

use std::{fmt, num::NonZeroU64, str::FromStr};

use anyhow::Result;
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use serde::de::{self, Deserializer, Visitor};

use crate::{constants::*, errors::*, require};

const PRECISION: NonZeroU64 = match NonZeroU64::new(DECIMAL_PRECISION) {
    Some(precision) => precision,
    None => panic!("decimal precision must be non-zero"),
};

/// Builds the decimal `value * 10^-scale`, e.g. `decimal(8_633, 2)` is `86.33`.
pub fn decimal(value: u64, scale: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(value), scale)
}

/// Builds a decimal out of an amount expressed in basis points.
pub fn from_bps(bps: u64) -> BigDecimal {
    decimal(bps, 4)
}

/// Rounds the given value to the working precision.
pub fn round(value: BigDecimal) -> BigDecimal {
    value.with_precision_round(PRECISION, RoundingMode::Floor)
}

pub fn add(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    round(a + b)
}

pub fn sub(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    round(a - b)
}

pub fn mul(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    round(a * b)
}

/// Divides `a` by `b` keeping the working precision.
///
/// The quotient is computed with integer division on the unscaled values, after shifting the dividend enough for the
/// integer quotient to hold more significant digits than the working precision. The result is then the exact floor of
/// the real quotient, with no intermediate rounding.
///
/// # Arguments:
///
/// - `a` - The dividend.
/// - `b` - The divisor, which cannot be zero.
///
pub fn div(a: &BigDecimal, b: &BigDecimal) -> Result<BigDecimal> {
    require!(!b.is_zero(), ERROR_DIVISION_BY_ZERO);

    if a.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let (numerator, numerator_scale) = a.as_bigint_and_exponent();
    let (denominator, denominator_scale) = b.as_bigint_and_exponent();

    let shift = (DECIMAL_PRECISION as i64 + 1 + b.digits() as i64 - a.digits() as i64).max(0);
    let shifted = numerator * num_traits::pow(BigInt::from(10u8), shift as usize);

    let mut quotient = &shifted / &denominator;
    let remainder = &shifted % &denominator;

    // integer division truncates toward zero, step down for negative inexact quotients
    if !remainder.is_zero() && remainder.sign() != denominator.sign() {
        quotient -= BigInt::from(1u8);
    }

    Ok(round(BigDecimal::new(quotient, numerator_scale - denominator_scale + shift)))
}

/// Whether the value is strictly below zero.
pub fn is_negative(value: &BigDecimal) -> bool {
    value.sign() == Sign::Minus
}

/// Converts an on-chain token amount (18 decimals) into a decimal token amount, exactly.
pub fn from_wei(wei: &BigUint) -> BigDecimal {
    BigDecimal::new(BigInt::from(wei.clone()), TOKEN_DECIMALS)
}

/// Converts a decimal token amount into its on-chain amount (18 decimals).
///
/// # Notes:
///
/// - Fails if the amount is negative or carries more decimals than the token.
///
pub fn to_wei(amount: &BigDecimal) -> Result<BigUint> {
    require!(!is_negative(amount), ERROR_NEGATIVE_AMOUNT);

    let scaled = amount.with_scale_round(TOKEN_DECIMALS, RoundingMode::Floor);
    require!(&scaled == amount, ERROR_AMOUNT_TOO_PRECISE);

    let (wei, _) = scaled.into_bigint_and_exponent();
    wei.to_biguint().ok_or_else(|| anyhow::anyhow!(ERROR_NEGATIVE_AMOUNT))
}

/// Deserializes a decimal from its text, or from an integer. Floating point numbers are rejected since they cannot
/// carry an exact decimal value.
pub fn deserialize_exact<'de, D>(deserializer: D) -> std::result::Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ExactDecimalVisitor)
}

struct ExactDecimalVisitor;

impl Visitor<'_> for ExactDecimalVisitor {
    type Value = BigDecimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal string or an integer")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<BigDecimal, E> {
        BigDecimal::from_str(value.trim()).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<BigDecimal, E> {
        Ok(BigDecimal::from(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<BigDecimal, E> {
        Ok(BigDecimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, _value: f64) -> std::result::Result<BigDecimal, E> {
        Err(E::custom(ERROR_INEXACT_DECIMAL))
    }
}
