use alloy::primitives::Address;
use anyhow::Result;
use bigdecimal::BigDecimal;
use clap::Parser;
use dullahan_keeper::{
    constants::{DEFAULT_DEPOSIT_AMOUNT, DEPOSIT_SETTLE_DELAY},
    logging::init_tracing,
    vault::deposit,
    ChainClient, NetworkArgs,
};

/// Deposits stkAave into the vault.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    /// Amount to deposit, in whole stkAave.
    #[arg(long, default_value_t = BigDecimal::from(DEFAULT_DEPOSIT_AMOUNT))]
    amount: BigDecimal,

    /// Account credited with the shares. Defaults to the signer.
    #[arg(long)]
    receiver: Option<Address>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = ChainClient::connect(&cli.network.into_config()?)?;
    let receiver = cli.receiver.unwrap_or_else(|| client.signer());

    let report = deposit(&client, &cli.amount, receiver, DEPOSIT_SETTLE_DELAY).await?;

    println!("Approve");
    println!("{}", report.approval);
    println!();
    if let Some(outcome) = report.deposit {
        println!("Deposit");
        println!("{outcome}");
        println!();
    }

    Ok(())
}
