use std::io::Write;

use anyhow::Result;
use bigdecimal::BigDecimal;
use discount_yield_model::{decimal::mul, UtilizationSample};
use serde::Serialize;

/// Converts a rate into a percentage, without trailing zeros.
pub fn percent(rate: &BigDecimal) -> BigDecimal {
    mul(rate, &BigDecimal::from(100)).normalized()
}

/// Writes the warning printed ahead of every simulation.
pub fn write_disclaimer<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "! Attention !")?;
    writeln!(out, "Calculations where made based on arbitrary values")?;
    writeln!(out, "and renting yearly rate is based on an estimation of the total borrowed GHO")?;
    writeln!(out)?;
    Ok(())
}

/// Writes the text report of a single sample.
pub fn write_sample<W: Write>(out: &mut W, sample: &UtilizationSample) -> Result<()> {
    writeln!(out, "Rented Amount: {}", sample.rented_amount.normalized())?;
    writeln!(out, "Utilization: {}%", percent(&sample.utilization_rate))?;
    writeln!(out, "Yearly Renting Rate: {}%", percent(&sample.yearly_renting_rate))?;
    writeln!(out, "Vanilla Borrow Rate: {}%", percent(&sample.vanilla_borrow_rate))?;
    writeln!(out, "Discounted Borrow Rate: {}%", percent(&sample.discounted_borrow_rate))?;
    writeln!(out, "Adjusted Renting Rate: {}%", percent(&sample.adjusted_borrow_rate))?;
    writeln!(out, "Estimated dstkAave APR: {}%", percent(&sample.holder_apr))?;
    writeln!(out)?;
    writeln!(out, "----------")?;
    writeln!(out)?;
    Ok(())
}

/// One row of the chart series, every rate as a percentage.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct ChartRow {
    pub rented_amount: BigDecimal,
    pub utilization_pct: BigDecimal,
    pub yearly_renting_rate_pct: BigDecimal,
    pub vanilla_borrow_rate_pct: BigDecimal,
    pub discounted_borrow_rate_pct: BigDecimal,
    pub adjusted_borrow_rate_pct: BigDecimal,
    pub holder_apr_pct: BigDecimal,
}

impl From<&UtilizationSample> for ChartRow {
    fn from(sample: &UtilizationSample) -> Self {
        ChartRow {
            rented_amount: sample.rented_amount.normalized(),
            utilization_pct: percent(&sample.utilization_rate),
            yearly_renting_rate_pct: percent(&sample.yearly_renting_rate),
            vanilla_borrow_rate_pct: percent(&sample.vanilla_borrow_rate),
            discounted_borrow_rate_pct: percent(&sample.discounted_borrow_rate),
            adjusted_borrow_rate_pct: percent(&sample.adjusted_borrow_rate),
            holder_apr_pct: percent(&sample.holder_apr),
        }
    }
}

/// Chart series writer, one CSV row per sample behind a header row.
pub struct ChartWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> ChartWriter<W> {
    pub fn new(out: W) -> Self {
        ChartWriter { writer: csv::Writer::from_writer(out), rows: 0 }
    }

    pub fn write(&mut self, sample: &UtilizationSample) -> Result<()> {
        self.writer.serialize(ChartRow::from(sample))?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes the series and returns the number of rows written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.rows)
    }
}
