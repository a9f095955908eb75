use anyhow::Result;
use clap::Parser;
use dullahan_keeper::{logging::init_tracing, reserve::process_reserve, ChainClient, NetworkArgs};

/// Has the pod manager process its reserve.
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

    let outcome = process_reserve(&client).await?;
    println!("{outcome}");
    println!();

    Ok(())
}
