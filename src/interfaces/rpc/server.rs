use super::messages::{
    BalanceRequest, BalanceResponse, EndExecutionRequest, EndExecutionResponse, OrderResponse,
    PaymentOrderRequest, TransferRequest, TransferResponse,
};
use super::pb::bank::v1::bank_server::{Bank, BankServer as BankGrpcServer};
use super::service::BankService;
use crate::application::protocol::ProcessState;
use crate::error::{BankError, Result};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::watch;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};
use tracing::{info, warn};

/// gRPC binding of [`BankService`].
#[derive(Clone)]
pub struct BankRpc {
    service: BankService,
}

impl BankRpc {
    pub fn new(service: BankService) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl Bank for BankRpc {
    async fn get_balance(
        &self,
        request: Request<BalanceRequest>,
    ) -> std::result::Result<Response<BalanceResponse>, Status> {
        let response = self
            .service
            .get_balance(request.into_inner())
            .await
            .map_err(bank_error_to_status)?;
        Ok(Response::new(response))
    }

    async fn create_payment_order(
        &self,
        request: Request<PaymentOrderRequest>,
    ) -> std::result::Result<Response<OrderResponse>, Status> {
        let response = self
            .service
            .create_payment_order(request.into_inner())
            .await
            .map_err(bank_error_to_status)?;
        Ok(Response::new(response))
    }

    async fn transfer(
        &self,
        request: Request<TransferRequest>,
    ) -> std::result::Result<Response<TransferResponse>, Status> {
        let response = self
            .service
            .transfer(request.into_inner())
            .await
            .map_err(bank_error_to_status)?;
        Ok(Response::new(response))
    }

    async fn end_execution(
        &self,
        request: Request<EndExecutionRequest>,
    ) -> std::result::Result<Response<EndExecutionResponse>, Status> {
        let response = self
            .service
            .end_execution(request.into_inner())
            .await
            .map_err(bank_error_to_status)?;
        Ok(Response::new(response))
    }
}

fn bank_error_to_status(err: BankError) -> Status {
    warn!(error = %err, "request failed");
    match err {
        BankError::MalformedRequest(message) => Status::invalid_argument(message),
        BankError::Rejected(rejection) => Status::failed_precondition(rejection.to_string()),
        other => Status::internal(other.to_string()),
    }
}

/// Serves the Bank procedures over gRPC.
///
/// Once the Bank starts draining the server stops accepting connections and
/// lets in-flight calls finish. Whatever is still running after the configured
/// grace period is dropped.
pub struct BankServer {
    listener: TcpListener,
    service: BankService,
    grace: Duration,
}

impl BankServer {
    pub async fn bind(addr: impl ToSocketAddrs, service: BankService) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let grace = service.protocol().config().shutdown_grace;
        Ok(Self {
            listener,
            service,
            grace,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Runs until `end_execution` is called and open calls wind down.
    pub async fn run(self) -> Result<()> {
        let Self {
            listener,
            service,
            grace,
        } = self;
        info!(addr = %listener.local_addr()?, "bank listening");

        let state = service.protocol().subscribe();
        let serve = Server::builder()
            .add_service(BankGrpcServer::new(BankRpc::new(service)))
            .serve_with_incoming_shutdown(
                TcpListenerStream::new(listener),
                draining(state.clone()),
            );
        tokio::pin!(serve);

        tokio::select! {
            served = &mut serve => served?,
            _ = draining(state) => {
                info!("stopped accepting connections");
                match tokio::time::timeout(grace, &mut serve).await {
                    Ok(served) => served?,
                    Err(_) => warn!("grace period elapsed, aborting open connections"),
                }
            }
        }
        Ok(())
    }
}

/// Resolves once the Bank is draining, or once nothing can change its state.
async fn draining(mut state: watch::Receiver<ProcessState>) {
    let _ = state
        .wait_for(|state| *state == ProcessState::Draining)
        .await;
}
