use crate::domain::order::{Order, OrderId, Resolution};
use crate::domain::ports::{OrderTable, WalletLedger};
use crate::domain::wallet::{Amount, Balance, Wallet, WalletId};
use crate::error::{BankError, Rejection, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

/// A thread-safe in-memory wallet ledger.
///
/// Uses a sharded `DashMap`, so mutations on different wallets do not contend
/// while a read-modify-write on one wallet runs under its entry lock.
#[derive(Default, Clone)]
pub struct InMemoryWalletLedger {
    wallets: Arc<DashMap<WalletId, Balance>>,
}

impl InMemoryWalletLedger {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletLedger for InMemoryWalletLedger {
    async fn open(&self, wallet: WalletId, balance: Balance) -> Result<()> {
        self.wallets.insert(wallet, balance);
        Ok(())
    }

    async fn balance(&self, wallet: &WalletId) -> Result<Option<Balance>> {
        Ok(self.wallets.get(wallet).map(|balance| *balance))
    }

    async fn debit(&self, wallet: &WalletId, amount: Amount) -> Result<Balance> {
        // A wallet never seen holds nothing.
        let mut balance = self
            .wallets
            .get_mut(wallet)
            .ok_or(Rejection::InsufficientFunds)?;
        let updated = balance
            .checked_debit(amount)
            .ok_or(Rejection::InsufficientFunds)?;
        *balance = updated;
        Ok(updated)
    }

    async fn credit(&self, wallet: &WalletId, amount: Amount) -> Result<Balance> {
        let overflow = || BankError::BalanceOverflow(wallet.to_string());
        match self.wallets.entry(wallet.clone()) {
            Entry::Occupied(mut entry) => {
                let updated = entry.get().checked_credit(amount).ok_or_else(overflow)?;
                entry.insert(updated);
                Ok(updated)
            }
            Entry::Vacant(entry) => {
                let updated = Balance::ZERO.checked_credit(amount).ok_or_else(overflow)?;
                entry.insert(updated);
                Ok(updated)
            }
        }
    }

    async fn wallets(&self) -> Result<Vec<Wallet>> {
        let mut wallets: Vec<Wallet> = self
            .wallets
            .iter()
            .map(|entry| Wallet::new(entry.key().clone(), *entry.value()))
            .collect();
        wallets.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(wallets)
    }
}

/// A thread-safe in-memory order table.
///
/// Ids come from an atomic counter and are never reused. Each order's
/// terminal transition runs under its `DashMap` entry lock.
#[derive(Clone)]
pub struct InMemoryOrderTable {
    orders: Arc<DashMap<OrderId, Order>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryOrderTable {
    /// Creates a new, empty order table handing out ids from 1.
    pub fn new() -> Self {
        Self::starting_at(OrderId::FIRST)
    }

    /// Creates an empty table whose first order gets `first`.
    pub fn starting_at(first: OrderId) -> Self {
        Self {
            orders: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI32::new(first.value())),
        }
    }
}

impl Default for InMemoryOrderTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderTable for InMemoryOrderTable {
    async fn create(&self, wallet: WalletId, amount: Amount) -> Result<OrderId> {
        let raw = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|_| BankError::OrderIdsExhausted)?;
        let id = OrderId::new(raw).ok_or(BankError::OrderIdsExhausted)?;
        self.orders.insert(id, Order::new(id, wallet, amount));
        Ok(id)
    }

    async fn get(&self, id: OrderId) -> Result<Order> {
        self.orders
            .get(&id)
            .map(|order| order.clone())
            .ok_or_else(|| Rejection::OrderNotFound.into())
    }

    async fn resolve(&self, id: OrderId, resolution: Resolution) -> Result<Order> {
        let mut order = self.orders.get_mut(&id).ok_or(Rejection::OrderNotFound)?;
        if !order.resolve(resolution) {
            return Err(Rejection::AlreadyResolved.into());
        }
        Ok(order.clone())
    }

    async fn count_pending(&self) -> Result<usize> {
        Ok(self
            .orders
            .iter()
            .filter(|entry| entry.value().is_pending())
            .count())
    }

    async fn pending(&self) -> Result<Vec<Order>> {
        let mut pending: Vec<Order> = self
            .orders
            .iter()
            .filter(|entry| entry.value().is_pending())
            .map(|entry| entry.value().clone())
            .collect();
        pending.sort_by_key(|order| order.id);
        Ok(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderState;

    fn wallet(id: &str) -> WalletId {
        WalletId::parse(id).unwrap()
    }

    fn amount(value: i64) -> Amount {
        Amount::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_in_memory_ledger_open_and_read() {
        let ledger = InMemoryWalletLedger::new();
        ledger
            .open(wallet("W1"), Balance::new(100).unwrap())
            .await
            .unwrap();

        assert_eq!(
            ledger.balance(&wallet("W1")).await.unwrap(),
            Balance::new(100)
        );
        assert!(ledger.balance(&wallet("W2")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_ledger_debit() {
        let ledger = InMemoryWalletLedger::new();
        ledger
            .open(wallet("W1"), Balance::new(100).unwrap())
            .await
            .unwrap();

        let updated = ledger.debit(&wallet("W1"), amount(40)).await.unwrap();
        assert_eq!(updated, Balance::new(60).unwrap());

        let result = ledger.debit(&wallet("W1"), amount(61)).await;
        assert!(matches!(
            result,
            Err(BankError::Rejected(Rejection::InsufficientFunds))
        ));
        assert_eq!(
            ledger.balance(&wallet("W1")).await.unwrap(),
            Balance::new(60)
        );
    }

    #[tokio::test]
    async fn test_in_memory_ledger_debit_unknown_wallet() {
        let ledger = InMemoryWalletLedger::new();
        let result = ledger.debit(&wallet("ghost"), amount(1)).await;
        assert!(matches!(
            result,
            Err(BankError::Rejected(Rejection::InsufficientFunds))
        ));
        assert!(ledger.balance(&wallet("ghost")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_ledger_credit() {
        let ledger = InMemoryWalletLedger::new();
        assert_eq!(
            ledger.credit(&wallet("W1"), amount(5)).await.unwrap(),
            Balance::new(5).unwrap()
        );
        assert_eq!(
            ledger.credit(&wallet("W1"), amount(5)).await.unwrap(),
            Balance::new(10).unwrap()
        );

        ledger.open(wallet("W2"), Balance::MAX).await.unwrap();
        let result = ledger.credit(&wallet("W2"), amount(1)).await;
        assert!(matches!(result, Err(BankError::BalanceOverflow(_))));
        assert_eq!(ledger.balance(&wallet("W2")).await.unwrap(), Some(Balance::MAX));
    }

    #[tokio::test]
    async fn test_in_memory_ledger_wallets_sorted() {
        let ledger = InMemoryWalletLedger::new();
        ledger.open(wallet("b"), Balance::ZERO).await.unwrap();
        ledger.open(wallet("a"), Balance::ZERO).await.unwrap();

        let ids: Vec<String> = ledger
            .wallets()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.id.to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_in_memory_order_table_ids_increase() {
        let table = InMemoryOrderTable::new();
        let first = table.create(wallet("W1"), amount(10)).await.unwrap();
        let second = table.create(wallet("W1"), amount(20)).await.unwrap();
        assert_eq!(first.value(), 1);
        assert_eq!(second.value(), 2);

        let order = table.get(second).await.unwrap();
        assert_eq!(order.requested_amount, amount(20));
        assert_eq!(order.state, OrderState::Pending);
        assert_eq!(table.count_pending().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_in_memory_order_table_resolve_once() {
        let table = InMemoryOrderTable::new();
        let id = table.create(wallet("W1"), amount(10)).await.unwrap();

        let order = table.resolve(id, Resolution::Rejected).await.unwrap();
        assert_eq!(order.state, OrderState::Rejected);

        let again = table.resolve(id, Resolution::Completed).await;
        assert!(matches!(
            again,
            Err(BankError::Rejected(Rejection::AlreadyResolved))
        ));
        assert_eq!(
            table.get(id).await.unwrap().state,
            OrderState::Rejected
        );
        assert_eq!(table.count_pending().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_in_memory_order_table_unknown_order() {
        let table = InMemoryOrderTable::new();
        let id = OrderId::new(42).unwrap();
        assert!(matches!(
            table.get(id).await,
            Err(BankError::Rejected(Rejection::OrderNotFound))
        ));
        assert!(matches!(
            table.resolve(id, Resolution::Completed).await,
            Err(BankError::Rejected(Rejection::OrderNotFound))
        ));
    }

    #[tokio::test]
    async fn test_in_memory_order_table_exhaustion() {
        let table = InMemoryOrderTable::starting_at(OrderId::new(i32::MAX - 1).unwrap());
        let last = table.create(wallet("W1"), amount(1)).await.unwrap();
        assert_eq!(last.value(), i32::MAX - 1);

        let result = table.create(wallet("W1"), amount(1)).await;
        assert!(matches!(result, Err(BankError::OrderIdsExhausted)));
        assert_eq!(table.count_pending().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_in_memory_order_table_pending_listing() {
        let table = InMemoryOrderTable::new();
        let a = table.create(wallet("W1"), amount(1)).await.unwrap();
        let b = table.create(wallet("W2"), amount(2)).await.unwrap();
        let c = table.create(wallet("W3"), amount(3)).await.unwrap();
        table.resolve(b, Resolution::Completed).await.unwrap();

        let ids: Vec<OrderId> = table
            .pending()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![a, c]);
    }
}
