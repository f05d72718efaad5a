use super::messages::{BalanceRequest, EndExecutionRequest, PaymentOrderRequest, TransferRequest};
use super::pb::bank::v1::bank_client::BankClient as BankGrpcClient;
use crate::error::{BankError, Result};
use std::fmt;
use tonic::transport::Channel;

/// A gRPC connection to a Bank server.
///
/// Calls that fail as a whole come back as [`BankError::RemoteFault`];
/// protocol outcomes are returned as status codes.
pub struct BankClient {
    inner: BankGrpcClient<Channel>,
}

impl BankClient {
    /// Connects to `address`, given as `host:port` or as a full `http://` URI.
    pub async fn connect(address: impl fmt::Display) -> Result<Self> {
        let address = address.to_string();
        let endpoint = if address.contains("://") {
            address
        } else {
            format!("http://{address}")
        };
        let inner = BankGrpcClient::connect(endpoint).await?;
        Ok(Self { inner })
    }

    pub async fn get_balance(&mut self, wallet_id: &str) -> Result<i32> {
        let request = BalanceRequest {
            wallet_id: wallet_id.to_string(),
        };
        let response = self.inner.get_balance(request).await.map_err(remote_fault)?;
        Ok(response.into_inner().balance)
    }

    /// Returns the new order id, or a negative status code.
    pub async fn create_payment_order(&mut self, wallet_id: &str, amount: i32) -> Result<i32> {
        let request = PaymentOrderRequest {
            wallet_id: wallet_id.to_string(),
            amount,
        };
        let response = self
            .inner
            .create_payment_order(request)
            .await
            .map_err(remote_fault)?;
        Ok(response.into_inner().status)
    }

    pub async fn transfer(
        &mut self,
        order_id: i32,
        confirmation_amount: i32,
        wallet_id: &str,
    ) -> Result<i32> {
        let request = TransferRequest {
            order_id,
            confirmation_amount,
            wallet_id: wallet_id.to_string(),
        };
        let response = self.inner.transfer(request).await.map_err(remote_fault)?;
        Ok(response.into_inner().status)
    }

    pub async fn end_execution(&mut self) -> Result<i32> {
        let response = self
            .inner
            .end_execution(EndExecutionRequest {})
            .await
            .map_err(remote_fault)?;
        Ok(response.into_inner().pending_orders)
    }
}

fn remote_fault(status: tonic::Status) -> BankError {
    BankError::RemoteFault(format!("{:?}: {}", status.code(), status.message()))
}
