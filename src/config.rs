use std::time::Duration;

/// Policy knobs for a running Bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    /// When set, wallets must be seeded before they can be read or ordered
    /// against. Otherwise unknown wallets read as balance 0.
    pub require_registered_wallets: bool,
    /// How long open connections may keep running after `end_execution`.
    pub shutdown_grace: Duration,
}

impl BankConfig {
    pub const DEFAULT_GRACE: Duration = Duration::from_secs(5);

    pub fn with_registered_wallets(mut self, required: bool) -> Self {
        self.require_registered_wallets = required;
        self
    }

    pub fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            require_registered_wallets: false,
            shutdown_grace: Self::DEFAULT_GRACE,
        }
    }
}
