use anyhow::Result;
use clap::Parser;
use dullahan_keeper::{logging::init_tracing, pods::scan_pod_liquidations, ChainClient, NetworkArgs};

/// Lists the liquidable pods of the pod manager, and liquidates them on demand.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    /// Send a liquidation for every liquidable pod.
    #[arg(long)]
    liquidate: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = ChainClient::connect(&cli.network.into_config()?)?;

    for found in scan_pod_liquidations(&client, cli.liquidate).await? {
        println!("Pod {} is liquidable ({})", found.index, found.pod);
        if let Some(outcome) = found.liquidation {
            println!("{outcome}");
            println!();
        }
    }

    Ok(())
}
