use crate::config::BankConfig;
use crate::domain::order::{Order, OrderId, Resolution};
use crate::domain::ports::{OrderTableBox, WalletLedgerBox};
use crate::domain::wallet::{Amount, Balance, Wallet, WalletId};
use crate::error::{BankError, Rejection, Result};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock, watch};
use tracing::{debug, info, warn};

/// Whether the Bank still takes new payment orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Accepting,
    Draining,
}

/// Point-in-time result of [`OrderProtocol::end_execution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainReport {
    pub pending_orders: usize,
    /// `true` only for the call that moved the Bank into `Draining`.
    pub initiated: bool,
}

/// The order lifecycle and transfer protocol.
///
/// `OrderProtocol` owns neither wallets nor orders: it coordinates the
/// injected ledger and order table. Transfers on one order are serialized by a
/// per-order settlement lock held across validation, debit and resolution, so
/// only one of several racing confirmations can reach the ledger. Transfers on
/// different orders never share a lock.
pub struct OrderProtocol {
    ledger: WalletLedgerBox,
    orders: OrderTableBox,
    config: BankConfig,
    gate: RwLock<ProcessState>,
    state_tx: watch::Sender<ProcessState>,
    settlement_locks: DashMap<OrderId, Arc<Mutex<()>>>,
}

impl OrderProtocol {
    /// Creates a new `OrderProtocol` accepting orders.
    ///
    /// # Arguments
    ///
    /// * `ledger` - The store for wallet balances.
    /// * `orders` - The store for payment orders.
    /// * `config` - Wallet registration policy.
    pub fn new(ledger: WalletLedgerBox, orders: OrderTableBox, config: BankConfig) -> Self {
        let (state_tx, _) = watch::channel(ProcessState::Accepting);
        Self {
            ledger,
            orders,
            config,
            gate: RwLock::new(ProcessState::Accepting),
            state_tx,
            settlement_locks: DashMap::new(),
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// Seeds a wallet with an initial balance.
    pub async fn seed_wallet(&self, wallet: WalletId, balance: Balance) -> Result<()> {
        debug!(wallet = %wallet, %balance, "seeding wallet");
        self.ledger.open(wallet, balance).await
    }

    /// Reads a wallet balance.
    ///
    /// Unknown wallets read as zero unless the Bank requires registration, in
    /// which case they are rejected with `UnknownWallet`.
    pub async fn get_balance(&self, wallet: &WalletId) -> Result<Balance> {
        match self.ledger.balance(wallet).await? {
            Some(balance) => Ok(balance),
            None if self.config.require_registered_wallets => {
                Err(Rejection::UnknownWallet.into())
            }
            None => Ok(Balance::ZERO),
        }
    }

    /// Registers a pending payment order. No funds move until
    /// [`OrderProtocol::transfer`] confirms it.
    pub async fn create_order(&self, wallet: WalletId, amount: i64) -> Result<OrderId> {
        // Held for the whole creation so `end_execution` counts it.
        let gate = self.gate.read().await;
        if *gate == ProcessState::Draining {
            return Err(Rejection::NotAccepting.into());
        }
        let amount = Amount::new(amount)?;
        if self.config.require_registered_wallets && self.ledger.balance(&wallet).await?.is_none()
        {
            return Err(Rejection::UnknownWallet.into());
        }

        let id = self.orders.create(wallet.clone(), amount).await?;
        debug!(order = %id, wallet = %wallet, amount = amount.value(), "payment order created");
        Ok(id)
    }

    /// Confirms a pending order and debits its wallet.
    ///
    /// Preconditions are checked in order (exists, pending, same wallet, exact
    /// amount) before the ledger is touched; failing one leaves all state
    /// untouched. A failed debit resolves the order as `Rejected` and reports
    /// `InsufficientFunds`.
    pub async fn transfer(
        &self,
        order_id: OrderId,
        confirmation_amount: i64,
        wallet: &WalletId,
    ) -> Result<Order> {
        // Unknown ids never get a settlement lock.
        self.orders.get(order_id).await?;
        let lock = self.settlement_lock(order_id);
        let settled = {
            let _settling = lock.lock().await;
            self.settle(order_id, confirmation_amount, wallet).await
        };

        // A resolved order never settles again, so its lock can go.
        if matches!(
            settled,
            Ok(_)
                | Err(BankError::Rejected(
                    Rejection::AlreadyResolved | Rejection::InsufficientFunds
                ))
        ) {
            self.settlement_locks.remove(&order_id);
        }
        settled
    }

    async fn settle(
        &self,
        order_id: OrderId,
        confirmation_amount: i64,
        wallet: &WalletId,
    ) -> Result<Order> {
        let order = self.orders.get(order_id).await?;
        if !order.is_pending() {
            return Err(Rejection::AlreadyResolved.into());
        }
        if order.wallet_id != *wallet {
            return Err(Rejection::WalletMismatch.into());
        }
        if order.requested_amount.value() != confirmation_amount {
            return Err(Rejection::AmountMismatch.into());
        }

        match self.ledger.debit(wallet, order.requested_amount).await {
            Ok(balance) => {
                let order = self.orders.resolve(order_id, Resolution::Completed).await?;
                debug!(order = %order_id, wallet = %wallet, %balance, "payment order completed");
                Ok(order)
            }
            Err(BankError::Rejected(Rejection::InsufficientFunds)) => {
                self.orders.resolve(order_id, Resolution::Rejected).await?;
                warn!(order = %order_id, wallet = %wallet, "payment order rejected for insufficient funds");
                Err(Rejection::InsufficientFunds.into())
            }
            Err(e) => Err(e),
        }
    }

    /// Stops accepting new orders and reports how many are still pending.
    ///
    /// Idempotent. Waits for creations already admitted, but never for
    /// transfers: the count is a snapshot, not a guarantee.
    pub async fn end_execution(&self) -> Result<DrainReport> {
        let mut gate = self.gate.write().await;
        let initiated = *gate == ProcessState::Accepting;
        *gate = ProcessState::Draining;
        let pending_orders = self.orders.count_pending().await?;
        drop(gate);

        if initiated {
            info!(pending_orders, "end of execution requested, draining");
            self.state_tx.send_replace(ProcessState::Draining);
        }
        Ok(DrainReport {
            pending_orders,
            initiated,
        })
    }

    /// Current process state.
    pub async fn state(&self) -> ProcessState {
        *self.gate.read().await
    }

    /// Subscribes to process state changes.
    pub fn subscribe(&self) -> watch::Receiver<ProcessState> {
        self.state_tx.subscribe()
    }

    pub async fn wallets(&self) -> Result<Vec<Wallet>> {
        self.ledger.wallets().await
    }

    pub async fn order(&self, order_id: OrderId) -> Result<Order> {
        self.orders.get(order_id).await
    }

    pub async fn pending_orders(&self) -> Result<Vec<Order>> {
        self.orders.pending().await
    }

    fn settlement_lock(&self, order_id: OrderId) -> Arc<Mutex<()>> {
        self.settlement_locks
            .entry(order_id)
            .or_default()
            .value()
            .clone()
    }
}
