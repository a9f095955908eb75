use alloy::primitives::Address;
use anyhow::Result;
use bigdecimal::BigDecimal;
use clap::Parser;
use discount_yield_model::constants::GHO_DISCOUNTED_PER_DISCOUNT_TOKEN;
use dullahan_keeper::{logging::init_tracing, pods::free_excess_stkaave, ChainClient, NetworkArgs};

/// Frees the stkAave a pod holds in excess of what its GHO debt needs for the full discount.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    /// The pod to check.
    #[arg(long)]
    pod: Address,

    /// GHO discounted per stkAave held.
    #[arg(long, default_value_t = BigDecimal::from(GHO_DISCOUNTED_PER_DISCOUNT_TOKEN))]
    gho_per_discount_token: BigDecimal,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = cli.network.into_config()?;
    let client = ChainClient::connect(&config)?;

    let report = free_excess_stkaave(&client, cli.pod, &cli.gho_per_discount_token).await?;

    println!("Pod balance : {}", report.balances.discount_token_balance);
    println!("Needed balance : {}", report.needed);
    match report.outcome {
        Some(outcome) => {
            println!("Too much stkAAVE in the pod");
            println!();
            println!("{outcome}");
            println!();
        }
        None => println!("No excess stkAAVE in the pod"),
    }

    Ok(())
}
