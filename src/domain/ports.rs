use super::order::{Order, OrderId, Resolution};
use super::wallet::{Amount, Balance, Wallet, WalletId};
use crate::error::Result;
use async_trait::async_trait;

/// Per-wallet balances. Every mutation is atomic for its wallet.
#[async_trait]
pub trait WalletLedger: Send + Sync {
    /// Sets a wallet's balance, creating the wallet if needed.
    async fn open(&self, wallet: WalletId, balance: Balance) -> Result<()>;
    /// Current balance, or `None` for a wallet never seen.
    async fn balance(&self, wallet: &WalletId) -> Result<Option<Balance>>;
    /// Debits iff the balance covers `amount`; fails with
    /// `InsufficientFunds` and no side effect otherwise.
    async fn debit(&self, wallet: &WalletId, amount: Amount) -> Result<Balance>;
    async fn credit(&self, wallet: &WalletId, amount: Amount) -> Result<Balance>;
    async fn wallets(&self) -> Result<Vec<Wallet>>;
}

/// Every payment order ever created, keyed by id.
#[async_trait]
pub trait OrderTable: Send + Sync {
    async fn create(&self, wallet: WalletId, amount: Amount) -> Result<OrderId>;
    async fn get(&self, id: OrderId) -> Result<Order>;
    /// Moves a pending order to its terminal state exactly once.
    async fn resolve(&self, id: OrderId, resolution: Resolution) -> Result<Order>;
    async fn count_pending(&self) -> Result<usize>;
    async fn pending(&self) -> Result<Vec<Order>>;
}

pub type WalletLedgerBox = Box<dyn WalletLedger>;
pub type OrderTableBox = Box<dyn OrderTable>;
