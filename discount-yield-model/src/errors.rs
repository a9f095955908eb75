/// Returns early with an error built from a static message when the condition does not hold.
#[macro_export]
macro_rules! require {
    ($condition:expr, $message:expr $(,)?) => {
        if !$condition {
            return ::core::result::Result::Err(::anyhow::anyhow!($message));
        }
    };
}

pub const ERROR_DIVISION_BY_ZERO: &str = "division by zero";

pub const ERROR_NEGATIVE_AMOUNT: &str = "amounts cannot be negative";

pub const ERROR_NEGATIVE_RATE_PARAMETER: &str = "rate parameters cannot be negative";

pub const ERROR_INVALID_VAULT_TVL: &str = "vault TVL must be greater than zero";

pub const ERROR_INVALID_SECONDS_PER_YEAR: &str = "seconds per year must be greater than zero";

pub const ERROR_INVALID_GHO_PER_DISCOUNT_TOKEN: &str = "GHO per discount token must be greater than zero";

pub const ERROR_INVALID_DISCOUNT_TOKEN_PRICE: &str = "discount token price must be greater than zero";

pub const ERROR_INVALID_GHO_PRICE: &str = "GHO price must be greater than zero";

pub const ERROR_INVALID_UTILIZATION_THRESHOLD: &str = "utilization threshold must be between zero and one";

pub const ERROR_INVALID_PROTOCOL_FEE_RATE: &str = "protocol fee rate must be between zero and one";

pub const ERROR_INVALID_MAX_INTEREST_RATE_DISCOUNT: &str = "max interest rate discount must be between zero and one";

pub const ERROR_INVALID_UTILIZATION_STEP: &str = "utilization step must be greater than zero";

pub const ERROR_AMOUNT_TOO_PRECISE: &str = "amount has more decimals than the token supports";

pub const ERROR_INEXACT_DECIMAL: &str = "decimals must be written as strings, floating point numbers are not exact";

pub const ERROR_RENTED_AMOUNT_ABOVE_TVL: &str = "rented amount cannot exceed the vault TVL";
