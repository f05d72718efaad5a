use super::messages::{
    BalanceRequest, BalanceResponse, EndExecutionRequest, EndExecutionResponse, OrderResponse,
    PaymentOrderRequest, Status, TransferRequest, TransferResponse,
};
use crate::application::protocol::OrderProtocol;
use crate::domain::order::OrderId;
use crate::domain::wallet::WalletId;
use crate::error::{BankError, Rejection, Result};
use std::sync::Arc;
use tracing::debug;

/// RPC-facing façade over [`OrderProtocol`].
///
/// Validates request shape, forwards to the protocol and turns rejections into
/// status codes. Anything else is returned as an error and fails the call.
#[derive(Clone)]
pub struct BankService {
    protocol: Arc<OrderProtocol>,
}

impl BankService {
    pub fn new(protocol: Arc<OrderProtocol>) -> Self {
        Self { protocol }
    }

    pub fn protocol(&self) -> &Arc<OrderProtocol> {
        &self.protocol
    }

    pub async fn get_balance(&self, req: BalanceRequest) -> Result<BalanceResponse> {
        debug!(wallet = %req.wallet_id, "get_balance");
        let wallet = WalletId::parse(req.wallet_id)?;
        let balance = match self.protocol.get_balance(&wallet).await {
            Ok(balance) => i32::try_from(balance.value())
                .map_err(|_| BankError::BalanceOverflow(wallet.to_string()))?,
            Err(BankError::Rejected(Rejection::UnknownWallet)) => Status::NotFound.code(),
            Err(e) => return Err(e),
        };
        Ok(BalanceResponse { balance })
    }

    pub async fn create_payment_order(&self, req: PaymentOrderRequest) -> Result<OrderResponse> {
        debug!(wallet = %req.wallet_id, amount = req.amount, "create_payment_order");
        let wallet = WalletId::parse(req.wallet_id)?;
        match self
            .protocol
            .create_order(wallet, i64::from(req.amount))
            .await
        {
            Ok(id) => Ok(OrderResponse::created(id)),
            Err(BankError::Rejected(rejection)) => Ok(OrderResponse::rejected(rejection.into())),
            Err(e) => Err(e),
        }
    }

    pub async fn transfer(&self, req: TransferRequest) -> Result<TransferResponse> {
        debug!(
            order = req.order_id,
            amount = req.confirmation_amount,
            wallet = %req.wallet_id,
            "transfer"
        );
        let wallet = WalletId::parse(req.wallet_id)?;
        let Some(order_id) = OrderId::new(req.order_id) else {
            return Ok(TransferResponse::with_status(Status::NotFound));
        };
        match self
            .protocol
            .transfer(order_id, i64::from(req.confirmation_amount), &wallet)
            .await
        {
            Ok(_) => Ok(TransferResponse::with_status(Status::Ok)),
            Err(BankError::Rejected(rejection)) => Ok(TransferResponse::with_status(rejection.into())),
            Err(e) => Err(e),
        }
    }

    pub async fn end_execution(&self, _req: EndExecutionRequest) -> Result<EndExecutionResponse> {
        let report = self.protocol.end_execution().await?;
        // Order ids are positive i32s, so the count always fits.
        let pending_orders = i32::try_from(report.pending_orders).unwrap_or(i32::MAX);
        Ok(EndExecutionResponse { pending_orders })
    }
}
