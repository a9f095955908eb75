use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use clap::Parser;
use discount_yield_model::{constants::UTILIZATION_STEP, RateParameters};

/// Simulates the stkAave renting rates and the dstkAave holder APR over the whole utilization range of the vault.
#[derive(Parser, Clone, Debug)]
#[command(version, about)]
pub struct Cli {
    /// JSON file holding the rate parameters. Flags below override its values.
    #[arg(long)]
    pub parameters: Option<PathBuf>,

    /// Rented amount increment between two samples.
    #[arg(long, default_value_t = BigDecimal::from(UTILIZATION_STEP))]
    pub step: BigDecimal,

    /// Writes the series to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Only writes the CSV series, without the text report.
    #[arg(long, requires = "csv")]
    pub quiet: bool,

    #[arg(long)]
    pub base_multiplier: Option<BigDecimal>,

    /// Utilization from which the renting rate gets multiplied, as a fraction.
    #[arg(long)]
    pub utilization_threshold: Option<BigDecimal>,

    #[arg(long)]
    pub seconds_per_year: Option<BigDecimal>,

    /// Yearly renting fee, as a fraction.
    #[arg(long)]
    pub renting_fee_yearly_rate: Option<BigDecimal>,

    #[arg(long)]
    pub extra_multiplier_per_unit_over_threshold: Option<BigDecimal>,

    #[arg(long)]
    pub protocol_fee_rate: Option<BigDecimal>,

    #[arg(long)]
    pub gho_per_discount_token: Option<BigDecimal>,

    #[arg(long)]
    pub gho_yearly_apy: Option<BigDecimal>,

    #[arg(long)]
    pub max_interest_rate_discount: Option<BigDecimal>,

    /// Total stkAave deposited in the vault.
    #[arg(long)]
    pub vault_tvl: Option<BigDecimal>,

    #[arg(long)]
    pub price_of_discount_token: Option<BigDecimal>,

    #[arg(long)]
    pub price_of_gho: Option<BigDecimal>,
}

impl Cli {
    /// Builds the rate parameters: defaults, then the parameters file, then the flags.
    pub fn rate_parameters(&self) -> Result<RateParameters> {
        let base = match &self.parameters {
            Some(path) => {
                let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
            },
            None => RateParameters::default(),
        };
        Ok(self.apply_overrides(base))
    }

    fn apply_overrides(&self, mut params: RateParameters) -> RateParameters {
        let overrides = [
            (&self.base_multiplier, &mut params.base_multiplier),
            (&self.utilization_threshold, &mut params.utilization_threshold),
            (&self.seconds_per_year, &mut params.seconds_per_year),
            (&self.renting_fee_yearly_rate, &mut params.renting_fee_yearly_rate),
            (&self.extra_multiplier_per_unit_over_threshold, &mut params.extra_multiplier_per_unit_over_threshold),
            (&self.protocol_fee_rate, &mut params.protocol_fee_rate),
            (&self.gho_per_discount_token, &mut params.gho_per_discount_token),
            (&self.gho_yearly_apy, &mut params.gho_yearly_apy),
            (&self.max_interest_rate_discount, &mut params.max_interest_rate_discount),
            (&self.vault_tvl, &mut params.vault_tvl),
            (&self.price_of_discount_token, &mut params.price_of_discount_token),
            (&self.price_of_gho, &mut params.price_of_gho),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value.clone();
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["renting-simulation"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_to_reference_parameters() {
        let cli = parse(&[]);
        assert_eq!(cli.rate_parameters().unwrap(), RateParameters::default());
        assert_eq!(cli.step, BigDecimal::from(1000));
    }

    #[test]
    fn flags_override_parameters() {
        let cli = parse(&["--vault-tvl", "120000", "--utilization-threshold", "0.8"]);
        let params = cli.rate_parameters().unwrap();
        assert_eq!(params.vault_tvl, BigDecimal::from(120_000));
        assert_eq!(params.utilization_threshold, BigDecimal::from_str("0.8").unwrap());
        assert_eq!(params.gho_yearly_apy, RateParameters::default().gho_yearly_apy);
    }

    #[test]
    fn parameters_file_then_flags() {
        let mut params = RateParameters::default();
        params.vault_tvl = BigDecimal::from(5);
        params.price_of_gho = BigDecimal::from_str("0.99").unwrap();

        let path = std::env::temp_dir().join(format!("renting-simulation-params-{}.json", std::process::id()));
        fs::write(&path, serde_json::to_string(&params).unwrap()).unwrap();

        let cli = parse(&["--parameters", path.to_str().unwrap(), "--vault-tvl", "10"]);
        let loaded = cli.rate_parameters().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.vault_tvl, BigDecimal::from(10));
        assert_eq!(loaded.price_of_gho, BigDecimal::from_str("0.99").unwrap());
    }

    #[test]
    fn parameters_file_rejects_float_numbers() {
        let mut raw = serde_json::to_value(RateParameters::default()).unwrap();
        raw["protocolFeeRate"] = serde_json::json!(0.1);
        raw["priceOfDiscountToken"] = serde_json::json!(86.33);

        let path = std::env::temp_dir().join(format!("renting-simulation-float-params-{}.json", std::process::id()));
        fs::write(&path, raw.to_string()).unwrap();

        let cli = parse(&["--parameters", path.to_str().unwrap()]);
        let result = cli.rate_parameters();
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn parameters_file_keeps_decimal_strings_exact() {
        let mut raw = serde_json::to_value(RateParameters::default()).unwrap();
        raw["protocolFeeRate"] = serde_json::json!("0.1");
        raw["vaultTvl"] = serde_json::json!(90000);

        let path = std::env::temp_dir().join(format!("renting-simulation-exact-params-{}.json", std::process::id()));
        fs::write(&path, raw.to_string()).unwrap();

        let cli = parse(&["--parameters", path.to_str().unwrap()]);
        let loaded = cli.rate_parameters();
        fs::remove_file(&path).unwrap();

        let loaded = loaded.unwrap();
        assert_eq!(loaded.protocol_fee_rate, BigDecimal::from_str("0.1").unwrap());
        assert_eq!(loaded.vault_tvl, BigDecimal::from(90_000));
    }

    #[test]
    fn quiet_needs_csv() {
        assert!(Cli::try_parse_from(["renting-simulation", "--quiet"]).is_err());
    }
}
