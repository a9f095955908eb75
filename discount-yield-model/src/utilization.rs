use anyhow::Result;
use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

use crate::{commons::*, decimal::*, errors::*, events::*, models::*, require};

// Renting Rate Model
//
// rate_per_second(u) ^
//                    │
//   base * (b + e·(1 - t)) +                                   +
//                    │                                .
//                    │                        .
//                    │                .
//       base * b     +───────────────+
//                    │               │
//                   0└───────────────+──────────────────────────+──>
//                    0               t                          1   u
//
// where `base` is the yearly renting fee translated to a per second basis, `b` the base multiplier, `e` the extra
// multiplier per unit of utilization over the threshold `t`.

/// Computes the renting rate per second at the given utilization.
///
/// # Arguments:
///
/// - `params` - The rate parameters.
/// - `utilization_rate` - The vault utilization, as a fraction.
///
pub fn renting_rate_per_second(params: &RateParameters, utilization_rate: &BigDecimal) -> Result<BigDecimal> {
    let base_rate = div(&params.renting_fee_yearly_rate, &params.seconds_per_year)?;
    Ok(multiplied_rate(params, &base_rate, utilization_rate))
}

fn multiplied_rate(params: &RateParameters, base_rate: &BigDecimal, utilization_rate: &BigDecimal) -> BigDecimal {
    if utilization_rate < &params.utilization_threshold {
        return base_rate.clone();
    }

    let over_threshold = sub(utilization_rate, &params.utilization_threshold);
    let extra = mul(&params.extra_multiplier_per_unit_over_threshold, &over_threshold);
    let multiplier = add(&params.base_multiplier, &extra);
    renting_multiplier_event(utilization_rate, &multiplier);

    mul(base_rate, &multiplier)
}

/// A sweep over the rented amount of a vault, from zero up to its TVL. The sweep is lazy and can be iterated as many
/// times as needed, each iteration recomputing its samples from scratch.
#[derive(Clone, Debug)]
pub struct UtilizationSweep {
    params: RateParameters,
    step: BigDecimal,
    base_rate: BigDecimal,
    discounted_borrow_rate: BigDecimal,
}

/// Builds a sweep of utilization samples, one every `step` rented tokens, while the rented amount does not exceed the
/// vault TVL.
///
/// # Arguments:
///
/// - `params` - The rate parameters, validated here once for the whole sweep.
/// - `step` - The rented amount increment between samples.
///
pub fn compute_utilization_sweep(params: RateParameters, step: BigDecimal) -> Result<UtilizationSweep> {
    UtilizationSweep::new(params, step)
}

impl UtilizationSweep {
    pub fn new(params: RateParameters, step: BigDecimal) -> Result<Self> {
        require_valid_rate_parameters(&params)?;
        require_valid_utilization_step(&step)?;

        let base_rate = div(&params.renting_fee_yearly_rate, &params.seconds_per_year)?;
        let undiscounted = sub(&BigDecimal::one(), &params.max_interest_rate_discount);
        let discounted_borrow_rate = mul(&params.gho_yearly_apy, &undiscounted);

        Ok(UtilizationSweep { params, step, base_rate, discounted_borrow_rate })
    }

    pub fn params(&self) -> &RateParameters {
        &self.params
    }

    pub fn step(&self) -> &BigDecimal {
        &self.step
    }

    /// The number of samples the sweep yields, counted without computing them.
    pub fn sample_count(&self) -> usize {
        let mut count = 0usize;
        let mut rented = BigDecimal::zero();
        while rented <= self.params.vault_tvl {
            count += 1;
            rented = add(&rented, &self.step);
        }
        count
    }

    pub fn iter(&self) -> UtilizationSweepIter<'_> {
        UtilizationSweepIter { sweep: self, rented: BigDecimal::zero() }
    }

    /// Computes a single sample at the given rented amount.
    ///
    /// # Arguments:
    ///
    /// - `rented_amount` - The amount of discount tokens rented out of the vault, at most the vault TVL.
    ///
    /// # Notes:
    ///
    /// - The total earned over a year is evaluated at the rate of the current utilization only, it does not integrate
    ///   the rate along the utilization path.
    ///
    pub fn sample_at(&self, rented_amount: &BigDecimal) -> Result<UtilizationSample> {
        require_non_negative(rented_amount)?;
        require!(rented_amount <= &self.params.vault_tvl, ERROR_RENTED_AMOUNT_ABOVE_TVL);

        let params = &self.params;
        let utilization_rate = div(rented_amount, &params.vault_tvl)?;
        let rate_per_second = multiplied_rate(params, &self.base_rate, &utilization_rate);

        let yearly_rate = mul(&rate_per_second, &params.seconds_per_year);
        let yearly_renting_rate = div(&yearly_rate, &params.gho_per_discount_token)?;

        let total_earned = mul(&yearly_rate, rented_amount);
        let after_fee = sub(&BigDecimal::one(), &params.protocol_fee_rate);
        let total_earned_after_fee = mul(&total_earned, &after_fee);
        let earned_per_deposited_unit = div(&total_earned_after_fee, &params.vault_tvl)?;
        let earned_value = mul(&earned_per_deposited_unit, &params.price_of_gho);
        let holder_apr = div(&earned_value, &params.price_of_discount_token)?;

        let adjusted_borrow_rate = add(&yearly_renting_rate, &self.discounted_borrow_rate);

        let sample = UtilizationSample {
            rented_amount: rented_amount.clone(),
            utilization_rate,
            renting_rate_per_second: rate_per_second,
            yearly_renting_rate,
            vanilla_borrow_rate: params.gho_yearly_apy.clone(),
            discounted_borrow_rate: self.discounted_borrow_rate.clone(),
            adjusted_borrow_rate,
            holder_apr,
        };
        utilization_sample_event(&sample);

        Ok(sample)
    }
}

impl<'a> IntoIterator for &'a UtilizationSweep {
    type Item = Result<UtilizationSample>;
    type IntoIter = UtilizationSweepIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the samples of a [`UtilizationSweep`].
pub struct UtilizationSweepIter<'a> {
    sweep: &'a UtilizationSweep,
    rented: BigDecimal,
}

impl Iterator for UtilizationSweepIter<'_> {
    type Item = Result<UtilizationSample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rented > self.sweep.params.vault_tvl {
            return None;
        }

        let sample = self.sweep.sample_at(&self.rented);
        self.rented = add(&self.rented, &self.sweep.step);
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;

    use super::*;

    fn d(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn reference_sweep() -> UtilizationSweep {
        compute_utilization_sweep(RateParameters::default(), d("1000")).unwrap()
    }

    #[test_case("80000", "1000", 81 ; "step divides tvl")]
    #[test_case("10", "2.5", 5 ; "fractional step")]
    #[test_case("10", "3", 4 ; "step does not divide tvl")]
    #[test_case("5", "10", 1 ; "step above tvl")]
    fn sweep_length(tvl: &str, step: &str, expected: usize) {
        let params = RateParameters { vault_tvl: d(tvl), ..Default::default() };
        let sweep = compute_utilization_sweep(params, d(step)).unwrap();
        assert_eq!(sweep.sample_count(), expected);
        assert_eq!(sweep.iter().count(), expected);
    }

    #[test]
    fn sweep_is_restartable() {
        let sweep = reference_sweep();
        let first: Vec<_> = sweep.iter().collect::<Result<_>>().unwrap();
        let second: Vec<_> = sweep.iter().collect::<Result<_>>().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_step_is_rejected() {
        assert!(compute_utilization_sweep(RateParameters::default(), d("0")).is_err());
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let params = RateParameters { vault_tvl: d("0"), ..Default::default() };
        assert!(compute_utilization_sweep(params, d("1000")).is_err());
    }

    #[test]
    fn first_sample_has_no_yield() {
        let sample = reference_sweep().iter().next().unwrap().unwrap();
        assert_eq!(sample.rented_amount, BigDecimal::zero());
        assert_eq!(sample.utilization_rate, BigDecimal::zero());
        assert_eq!(sample.holder_apr, BigDecimal::zero());
        assert_eq!(sample.vanilla_borrow_rate, d("0.02"));
        assert_eq!(sample.discounted_borrow_rate, d("0.016"));
    }

    #[test]
    fn full_utilization_doubles_the_rate() {
        let sweep = reference_sweep();
        let last = sweep.iter().last().unwrap().unwrap();
        assert_eq!(last.utilization_rate, BigDecimal::one());

        let base = renting_rate_per_second(sweep.params(), &BigDecimal::zero()).unwrap();
        assert_eq!(last.renting_rate_per_second, mul(&base, &d("2")));

        // 0.2 yearly over 100 GHO per token, floored
        assert_eq!(last.yearly_renting_rate, d("0.00199999999999999999"));
        assert!((d("0.002") - &last.yearly_renting_rate) < d("0.000000000000000001"));
    }

    #[test]
    fn rate_is_flat_below_threshold_and_increasing_above() {
        let params = RateParameters::default();
        let base = renting_rate_per_second(&params, &BigDecimal::zero()).unwrap();
        for utilization in ["0.1", "0.5", "0.7499"] {
            assert_eq!(renting_rate_per_second(&params, &d(utilization)).unwrap(), base);
        }

        let mut previous = renting_rate_per_second(&params, &d("0.75")).unwrap();
        assert_eq!(previous, base);
        for utilization in ["0.8", "0.85", "0.9", "0.95", "1"] {
            let rate = renting_rate_per_second(&params, &d(utilization)).unwrap();
            assert!(rate > previous);
            previous = rate;
        }
    }

    #[test]
    fn utilization_is_monotonic_and_bounded() {
        let sweep = reference_sweep();
        let samples: Vec<_> = sweep.iter().collect::<Result<_>>().unwrap();
        for pair in samples.windows(2) {
            assert!(pair[1].utilization_rate >= pair[0].utilization_rate);
        }
        for sample in &samples {
            assert!(sample.utilization_rate >= BigDecimal::zero());
            assert!(sample.utilization_rate <= BigDecimal::one());
        }
    }

    #[test_case("80000.000000000000001" ; "one unit above tvl")]
    #[test_case("81000" ; "one step above tvl")]
    fn rented_amount_above_tvl_is_rejected(rented: &str) {
        let err = reference_sweep().sample_at(&d(rented)).unwrap_err();
        assert_eq!(err.to_string(), ERROR_RENTED_AMOUNT_ABOVE_TVL);
    }

    #[test]
    fn rented_amount_at_tvl_is_full_utilization() {
        let sample = reference_sweep().sample_at(&d("80000")).unwrap();
        assert_eq!(sample.utilization_rate, BigDecimal::one());
    }

    #[test]
    fn adjusted_rate_adds_renting_to_discounted_rate() {
        let sample = reference_sweep().sample_at(&d("40000")).unwrap();
        assert_eq!(sample.adjusted_borrow_rate, add(&sample.yearly_renting_rate, &sample.discounted_borrow_rate));
    }
}
