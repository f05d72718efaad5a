use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;
use walletbank::interfaces::rpc::client::BankClient;
use walletbank::interfaces::script::commands::run_script;

#[derive(Parser)]
#[command(author, version, about = "Replays S/O/X/F commands from stdin against a Bank", long_about = None)]
struct Cli {
    /// Wallet the commands act on
    wallet_id: String,

    /// Bank address, e.g. 127.0.0.1:5000 or http://127.0.0.1:5000
    address: String,

    /// Report ignored commands and failed calls on stderr
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug {
        "walletbank=debug,bank_client=debug"
    } else {
        "walletbank=warn,bank_client=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut client = BankClient::connect(&cli.address).await.into_diagnostic()?;
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(&mut client, &cli.wallet_id, stdin, &mut out)
        .await
        .into_diagnostic()?;

    Ok(())
}
