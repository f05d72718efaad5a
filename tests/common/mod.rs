#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use walletbank::application::protocol::OrderProtocol;
use walletbank::config::BankConfig;
use walletbank::domain::wallet::{Balance, WalletId};
use walletbank::error::Result;
use walletbank::infrastructure::in_memory::{InMemoryOrderTable, InMemoryWalletLedger};
use walletbank::interfaces::rpc::server::BankServer;
use walletbank::interfaces::rpc::service::BankService;

pub fn wallet(id: &str) -> WalletId {
    WalletId::parse(id).expect("valid wallet id")
}

pub async fn bank_with(config: BankConfig, seeds: &[(&str, i64)]) -> Arc<OrderProtocol> {
    let protocol = OrderProtocol::new(
        Box::new(InMemoryWalletLedger::new()),
        Box::new(InMemoryOrderTable::new()),
        config,
    );
    for (id, balance) in seeds {
        protocol
            .seed_wallet(wallet(id), Balance::new(*balance).expect("valid balance"))
            .await
            .expect("seed wallet");
    }
    Arc::new(protocol)
}

pub async fn bank(seeds: &[(&str, i64)]) -> Arc<OrderProtocol> {
    bank_with(BankConfig::default(), seeds).await
}

pub async fn service(seeds: &[(&str, i64)]) -> BankService {
    BankService::new(bank(seeds).await)
}

pub async fn balance_of(protocol: &OrderProtocol, id: &str) -> i64 {
    protocol
        .get_balance(&wallet(id))
        .await
        .expect("balance")
        .value()
}

/// Starts a server on an ephemeral local port.
pub async fn spawn_server(protocol: Arc<OrderProtocol>) -> (SocketAddr, JoinHandle<Result<()>>) {
    let server = BankServer::bind("127.0.0.1:0", BankService::new(protocol))
        .await
        .expect("bind server");
    let addr = server.local_addr().expect("local addr");
    (addr, tokio::spawn(server.run()))
}
