use anyhow::Result;
use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{commons::*, constants::*, decimal::*, events::*, models::*};

/// Gets the amount of discount tokens an account needs to get the full discount on its debt, using the default
/// discount threshold of one token.
///
/// # Arguments:
///
/// - `debt_balance` - The account debt, in GHO.
/// - `gho_per_discount_token` - The amount of GHO discounted per discount token held.
///
pub fn needed_discount_tokens(debt_balance: &BigDecimal, gho_per_discount_token: &BigDecimal) -> Result<BigDecimal> {
    needed_discount_tokens_with_threshold(debt_balance, gho_per_discount_token, &BigDecimal::from(DISCOUNT_THRESHOLD))
}

/// Gets the amount of discount tokens an account needs to get the full discount on its debt.
///
/// # Arguments:
///
/// - `debt_balance` - The account debt, in GHO.
/// - `gho_per_discount_token` - The amount of GHO discounted per discount token held.
/// - `discount_threshold` - Debts, and discount token requirements, at or below it are not discounted.
///
/// # Notes:
///
/// - A debt at or below the threshold needs no discount tokens at all.
/// - A requirement below the threshold is treated as zero as well.
///
pub fn needed_discount_tokens_with_threshold(debt_balance: &BigDecimal, gho_per_discount_token: &BigDecimal, discount_threshold: &BigDecimal) -> Result<BigDecimal> {
    require_non_negative(debt_balance)?;
    require_non_negative(gho_per_discount_token)?;
    require_non_negative(discount_threshold)?;

    if debt_balance <= discount_threshold {
        return Ok(BigDecimal::zero());
    }

    let needed = div(debt_balance, gho_per_discount_token)?;
    if &needed < discount_threshold {
        return Ok(BigDecimal::zero());
    }

    Ok(needed)
}

/// Checks whether an account holds strictly more discount tokens than it needs. When it does, the excess can be
/// released from the account.
///
/// # Arguments:
///
/// - `balances` - The account balances.
/// - `needed_amount` - The amount of discount tokens the account needs.
///
pub fn should_release_excess_discount_tokens(balances: &AccountBalances, needed_amount: &BigDecimal) -> bool {
    let should_release = &balances.discount_token_balance > needed_amount;
    if should_release {
        excess_discount_tokens_event(&balances.discount_token_balance, needed_amount);
    }
    should_release
}

/// Checks an account end to end: computes the discount tokens its debt needs and whether it holds an excess.
/// Returns the needed amount along with the decision.
///
pub fn check_excess_discount_tokens(balances: &AccountBalances, gho_per_discount_token: &BigDecimal) -> Result<(BigDecimal, bool)> {
    require_valid_balances(balances)?;
    let needed = needed_discount_tokens(&balances.debt_balance, gho_per_discount_token)?;
    let should_release = should_release_excess_discount_tokens(balances, &needed);
    Ok((needed, should_release))
}
