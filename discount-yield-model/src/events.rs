use bigdecimal::BigDecimal;
use tracing::debug;

use crate::models::UtilizationSample;

/// Event emitted when an account holds more discount tokens than its debt needs. Callers acting on the decision log
/// their own action.
pub fn excess_discount_tokens_event(discount_token_balance: &BigDecimal, needed_amount: &BigDecimal) {
    debug!(balance = %discount_token_balance, needed = %needed_amount, "excess discount tokens");
}

/// Event emitted when the utilization reaches the threshold and the renting rate gets multiplied.
pub fn renting_multiplier_event(utilization_rate: &BigDecimal, multiplier: &BigDecimal) {
    debug!(utilization = %utilization_rate, multiplier = %multiplier, "renting multiplier applied");
}

/// Event emitted for every computed sweep sample.
pub fn utilization_sample_event(sample: &UtilizationSample) {
    debug!(
        rented = %sample.rented_amount,
        utilization = %sample.utilization_rate,
        yearly_renting_rate = %sample.yearly_renting_rate,
        holder_apr = %sample.holder_apr,
        "utilization sample"
    );
}
