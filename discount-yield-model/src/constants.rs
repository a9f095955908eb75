/// The BPS unit
pub const BPS: u64 = 10_000;

/// The number of significant digits kept after every decimal operation
pub const DECIMAL_PRECISION: u64 = 18;

/// The decimals of stkAave and GHO
pub const TOKEN_DECIMALS: i64 = 18;

/// The amount of seconds in a year (365 days)
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Debts and discount token requirements at or below this amount are not discounted (1 token)
pub const DISCOUNT_THRESHOLD: u64 = 1;

/// The amount of GHO that gets discounted per stkAave held
pub const GHO_DISCOUNTED_PER_DISCOUNT_TOKEN: u64 = 100;

/// The renting rate multiplier below the utilization threshold (x1)
pub const BASE_MULTIPLIER: u64 = 1;

/// The utilization above which the renting rate multiplier kicks in (75%)
pub const UTILIZATION_THRESHOLD_BPS: u64 = 7_500;

/// The multiplier added per unit of utilization over the threshold (100% utilization => x2)
pub const EXTRA_MULTIPLIER_PER_UNIT_OVER_THRESHOLD: u64 = 4;

/// The yearly renting fee (10%)
pub const RENTING_FEE_YEARLY_RATE_BPS: u64 = 1_000;

/// The protocol fee taken from renting fees (10%)
pub const PROTOCOL_FEE_RATE_BPS: u64 = 1_000;

/// The reference GHO borrow APY (2%)
pub const GHO_YEARLY_APY_BPS: u64 = 200;

/// The maximum GHO borrow interest rate discount (20%)
pub const MAX_INTEREST_RATE_DISCOUNT_BPS: u64 = 2_000;

/// The reference stkAave deposited in the vault
pub const VAULT_TVL: u64 = 80_000;

/// The reference stkAave price in USD cents (86.33)
pub const DISCOUNT_TOKEN_PRICE_CENTS: u64 = 8_633;

/// The reference GHO price in USD cents (1.00)
pub const GHO_PRICE_CENTS: u64 = 100;

/// The reference rented amount increment between two sweep samples
pub const UTILIZATION_STEP: u64 = 1_000;

/// The maximum fractional rate accepted for fees, discounts and thresholds (100%)
pub const MAX_RATE_BPS: u64 = BPS;
