use super::wallet::{Amount, WalletId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the order table. Positive and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i32);

impl OrderId {
    pub const FIRST: Self = Self(1);

    /// Wraps a wire value. Non-positive ids can never name an order.
    pub fn new(value: i32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Pending,
    Completed,
    Rejected,
}

/// Terminal outcome applied by [`crate::domain::ports::OrderTable::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Completed,
    Rejected,
}

impl From<Resolution> for OrderState {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Completed => OrderState::Completed,
            Resolution::Rejected => OrderState::Rejected,
        }
    }
}

/// A reservation for a future debit of a fixed amount against one wallet.
///
/// `requested_amount` and `wallet_id` are fixed at creation. `state` moves
/// from `Pending` to a terminal state at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub wallet_id: WalletId,
    pub requested_amount: Amount,
    pub state: OrderState,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn new(id: OrderId, wallet_id: WalletId, requested_amount: Amount) -> Self {
        Self {
            id,
            wallet_id,
            requested_amount,
            state: OrderState::Pending,
            created_at: Utc::now(),
            resolved_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == OrderState::Pending
    }

    /// Applies the terminal transition. Returns `false`, leaving the order
    /// untouched, if it was already resolved.
    pub fn resolve(&mut self, resolution: Resolution) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.state = resolution.into();
        self.resolved_at = Some(Utc::now());
        true
    }
}
