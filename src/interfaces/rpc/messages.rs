//! Wire records for the four Bank procedures.
//!
//! The records themselves are the protobuf messages of `bank.v1`. This module
//! adds the status codes carried in their `status` fields.

use crate::domain::order::OrderId;
use crate::error::Rejection;

pub use super::pb::bank::v1::{
    BalanceRequest, BalanceResponse, EndExecutionRequest, EndExecutionResponse, OrderResponse,
    PaymentOrderRequest, TransferRequest, TransferResponse,
};

impl OrderResponse {
    pub fn created(id: OrderId) -> Self {
        Self { status: id.value() }
    }

    pub fn rejected(status: Status) -> Self {
        Self {
            status: status.code(),
        }
    }

    /// The new order id, or the status that refused the order.
    pub fn outcome(&self) -> std::result::Result<OrderId, Option<Status>> {
        OrderId::new(self.status).ok_or_else(|| Status::from_code(self.status))
    }
}

impl TransferResponse {
    pub fn with_status(status: Status) -> Self {
        Self {
            status: status.code(),
        }
    }

    pub fn outcome(&self) -> Option<Status> {
        Status::from_code(self.status)
    }
}

/// Status codes carried in `status` fields.
///
/// The first three keep the codes clients of the Bank already rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    AmountMismatch,
    WalletMismatch,
    InsufficientFunds,
    AlreadyResolved,
    InvalidAmount,
    NotAccepting,
}

impl Status {
    pub const ALL: [Status; 8] = [
        Status::Ok,
        Status::NotFound,
        Status::AmountMismatch,
        Status::WalletMismatch,
        Status::InsufficientFunds,
        Status::AlreadyResolved,
        Status::InvalidAmount,
        Status::NotAccepting,
    ];

    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::NotFound => -1,
            Status::AmountMismatch => -2,
            Status::WalletMismatch => -3,
            Status::InsufficientFunds => -4,
            Status::AlreadyResolved => -5,
            Status::InvalidAmount => -6,
            Status::NotAccepting => -7,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }
}

impl From<Rejection> for Status {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::InvalidAmount => Status::InvalidAmount,
            Rejection::NotAccepting => Status::NotAccepting,
            Rejection::OrderNotFound | Rejection::UnknownWallet => Status::NotFound,
            Rejection::WalletMismatch => Status::WalletMismatch,
            Rejection::AmountMismatch => Status::AmountMismatch,
            Rejection::AlreadyResolved => Status::AlreadyResolved,
            Rejection::InsufficientFunds => Status::InsufficientFunds,
        }
    }
}
