mod args;
mod constants;
mod report;

use std::{fs::File, io};

use anyhow::{Context, Result};
use clap::Parser;
use discount_yield_model::compute_utilization_sweep;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{args::Cli, constants::DEFAULT_LOG_FILTER, report::*};

/// Installs the stderr subscriber. The filter comes from `RUST_LOG`, `info` when unset.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let params = cli.rate_parameters()?;
    let sweep = compute_utilization_sweep(params, cli.step.clone())?;
    info!(samples = sweep.sample_count(), step = %sweep.step(), tvl = %sweep.params().vault_tvl, "simulating");

    let mut chart = match &cli.csv {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Some(ChartWriter::new(file))
        },
        None => None,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !cli.quiet {
        write_disclaimer(&mut out)?;
    }

    for sample in &sweep {
        let sample = sample?;
        if !cli.quiet {
            write_sample(&mut out, &sample)?;
        }
        if let Some(chart) = chart.as_mut() {
            chart.write(&sample)?;
        }
    }

    if let (Some(chart), Some(path)) = (chart, &cli.csv) {
        let rows = chart.finish()?;
        info!(rows, path = %path.display(), "chart series written");
    }

    Ok(())
}
