use std::time::Duration;
use tokio::net::TcpStream;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Endpoint;
use walletbank::config::BankConfig;
use walletbank::domain::order::OrderId;
use walletbank::error::BankError;
use walletbank::interfaces::rpc::client::BankClient;
use walletbank::interfaces::rpc::messages::{BalanceRequest, BalanceResponse, Status};
use walletbank::interfaces::rpc::pb::bank::v1::bank_client::BankClient as BankGrpcClient;
use walletbank::interfaces::script::commands::run_script;

mod common;

#[tokio::test]
async fn test_client_round_trip() {
    let bank = common::bank(&[("W1", 100), ("W2", 10)]).await;
    let (addr, server) = common::spawn_server(bank.clone()).await;

    let mut client = BankClient::connect(addr).await.unwrap();
    assert_eq!(client.get_balance("W1").await.unwrap(), 100);

    let order_id = client.create_payment_order("W1", 40).await.unwrap();
    assert_eq!(order_id, 1);
    assert_eq!(
        client.transfer(order_id, 40, "W1").await.unwrap(),
        Status::Ok.code()
    );
    assert_eq!(
        client.transfer(order_id, 40, "W1").await.unwrap(),
        Status::AlreadyResolved.code()
    );
    assert_eq!(client.get_balance("W1").await.unwrap(), 60);

    let order_id = client.create_payment_order("W2", 50).await.unwrap();
    assert_eq!(
        client.transfer(order_id, 50, "W2").await.unwrap(),
        Status::InsufficientFunds.code()
    );
    client.create_payment_order("W2", 5).await.unwrap();

    assert_eq!(client.end_execution().await.unwrap(), 1);
    drop(client);

    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server stops after end_execution")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_empty_wallet_id_fails_the_call() {
    let bank = common::bank(&[("W1", 100)]).await;
    let (addr, _server) = common::spawn_server(bank).await;

    let mut client = BankClient::connect(addr).await.unwrap();
    let result = client.create_payment_order("", 10).await;
    assert!(matches!(result, Err(BankError::RemoteFault(_))));

    // The connection stays usable after a fault.
    assert_eq!(client.create_payment_order("W1", 10).await.unwrap(), 1);
}

/// `BalanceRequest` with its wallet id sent as raw bytes.
#[derive(Clone, PartialEq, prost::Message)]
struct RawBalanceRequest {
    #[prost(bytes = "vec", tag = "1")]
    wallet_id: Vec<u8>,
}

#[tokio::test]
async fn test_undecodable_request_fails_only_that_call() {
    let bank = common::bank(&[("W1", 100)]).await;
    let (addr, _server) = common::spawn_server(bank).await;

    let channel = Endpoint::from_shared(format!("http://{addr}"))
        .unwrap()
        .connect()
        .await
        .unwrap();
    let mut grpc = tonic::client::Grpc::new(channel.clone());
    grpc.ready().await.unwrap();
    let result: Result<tonic::Response<BalanceResponse>, tonic::Status> = grpc
        .unary(
            tonic::Request::new(RawBalanceRequest {
                wallet_id: b"\xff\xfe garbage".to_vec(),
            }),
            PathAndQuery::from_static("/bank.v1.Bank/GetBalance"),
            tonic::codec::ProstCodec::default(),
        )
        .await;
    assert!(result.is_err(), "got {result:?}");

    // The same connection still serves well-formed calls.
    let mut client = BankGrpcClient::new(channel);
    let reply = client
        .get_balance(BalanceRequest {
            wallet_id: "W1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(reply.into_inner().balance, 100);
}

#[tokio::test]
async fn test_oversized_request_is_refused() {
    let bank = common::bank(&[("W1", 100)]).await;
    let (addr, _server) = common::spawn_server(bank).await;

    let mut client = BankClient::connect(addr).await.unwrap();
    let huge = "W".repeat(8 * 1024 * 1024);
    assert!(matches!(
        client.get_balance(&huge).await,
        Err(BankError::RemoteFault(_))
    ));
    assert_eq!(client.get_balance("W1").await.unwrap(), 100);
}

#[tokio::test]
async fn test_script_stops_at_finish() {
    let bank = common::bank(&[("W1", 100)]).await;
    let (addr, server) = common::spawn_server(bank.clone()).await;

    let mut client = BankClient::connect(addr).await.unwrap();
    let mut input: &[u8] = b"F\nS\nO 5\n";
    let mut out = Vec::new();
    run_script(&mut client, "W1", &mut input, &mut out)
        .await
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0\n");
    assert_eq!(input, b"S\nO 5\n");

    drop(client);
    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server stops after end_execution")
        .unwrap()
        .unwrap();
    assert!(bank.order(OrderId::FIRST).await.is_err());
}

#[tokio::test]
async fn test_connections_are_served_concurrently() {
    let bank = common::bank(&[("W1", 1_000)]).await;
    let (addr, _server) = common::spawn_server(bank.clone()).await;

    // An idle connection must not hold up others.
    let _idle = TcpStream::connect(addr).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        handles.push(tokio::spawn(async move {
            let mut client = BankClient::connect(addr).await.unwrap();
            let order_id = client.create_payment_order("W1", 10).await.unwrap();
            client.transfer(order_id, 10, "W1").await.unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), Status::Ok.code());
    }
    assert_eq!(common::balance_of(&bank, "W1").await, 920);
}

#[tokio::test]
async fn test_server_stops_with_lingering_clients() {
    let config = BankConfig::default().with_shutdown_grace(Duration::from_millis(100));
    let bank = common::bank_with(config, &[]).await;
    let (addr, server) = common::spawn_server(bank).await;

    let _lingering = BankClient::connect(addr).await.unwrap();
    let mut client = BankClient::connect(addr).await.unwrap();
    assert_eq!(client.end_execution().await.unwrap(), 0);

    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server does not wait on idle clients")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_unregistered_wallet_reads_as_not_found() {
    let config = BankConfig::default().with_registered_wallets(true);
    let bank = common::bank_with(config, &[("W1", 5)]).await;
    let (addr, _server) = common::spawn_server(bank).await;

    let mut client = BankClient::connect(addr).await.unwrap();
    assert_eq!(client.get_balance("ghost").await.unwrap(), -1);
    assert_eq!(
        client.create_payment_order("ghost", 1).await.unwrap(),
        Status::NotFound.code()
    );
    assert_eq!(client.get_balance("W1").await.unwrap(), 5);
}
