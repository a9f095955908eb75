use anyhow::Result;
use clap::Parser;
use dullahan_keeper::{logging::init_tracing, vault::harvest, ChainClient, NetworkArgs};

/// Harvests the stkAave rewards of the vault.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = ChainClient::connect(&cli.network.into_config()?)?;

    let outcome = harvest(&client).await?;
    println!("{outcome}");
    println!();

    Ok(())
}
