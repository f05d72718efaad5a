use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read, Write};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use walletbank::application::protocol::OrderProtocol;
use walletbank::config::BankConfig;
use walletbank::domain::ports::{OrderTableBox, WalletLedgerBox};
use walletbank::infrastructure::in_memory::{InMemoryOrderTable, InMemoryWalletLedger};
use walletbank::interfaces::rpc::server::BankServer;
use walletbank::interfaces::rpc::service::BankService;
use walletbank::interfaces::seed::wallet_reader::WalletSeedReader;

#[derive(Parser)]
#[command(author, version, about = "Bank service holding wallets and payment orders", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(value_parser = clap::value_parser!(u16).range(2048..=65535))]
    port: u16,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind: IpAddr,

    /// Wallet seed file with `<wallet_id> <balance>` lines. Read from stdin when omitted.
    #[arg(long)]
    wallets: Option<PathBuf>,

    /// Refuse reads and orders for wallets that were not seeded
    #[arg(long, env = "BANK_REQUIRE_REGISTERED")]
    require_registered: bool,

    /// Seconds open connections may keep running after end_execution
    #[arg(long, env = "BANK_GRACE_SECS", default_value_t = BankConfig::DEFAULT_GRACE.as_secs())]
    grace_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("walletbank=info,bank=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BankConfig::default()
        .with_registered_wallets(cli.require_registered)
        .with_shutdown_grace(Duration::from_secs(cli.grace_secs));

    let ledger: WalletLedgerBox = Box::new(InMemoryWalletLedger::new());
    let orders: OrderTableBox = Box::new(InMemoryOrderTable::new());
    let protocol = Arc::new(OrderProtocol::new(ledger, orders, config));

    // Seed wallets
    let source: Box<dyn Read> = match &cli.wallets {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };
    let mut seeded = 0usize;
    for wallet in WalletSeedReader::new(source).wallets() {
        match wallet {
            Ok(wallet) => {
                protocol
                    .seed_wallet(wallet.id, wallet.balance)
                    .await
                    .into_diagnostic()?;
                seeded += 1;
            }
            Err(e) => warn!(error = %e, "skipping wallet seed line"),
        }
    }
    info!(wallets = seeded, "wallets seeded");

    let service = BankService::new(protocol.clone());
    let server = BankServer::bind((cli.bind, cli.port), service)
        .await
        .into_diagnostic()?;
    server.run().await.into_diagnostic()?;

    for order in protocol.pending_orders().await.into_diagnostic()? {
        info!(
            order = %order.id,
            wallet = %order.wallet_id,
            amount = order.requested_amount.value(),
            "order left pending"
        );
    }

    // Output final balances
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for wallet in protocol.wallets().await.into_diagnostic()? {
        writeln!(out, "{} {}", wallet.id, wallet.balance).into_diagnostic()?;
    }
    out.flush().into_diagnostic()?;

    Ok(())
}
