use crate::error::{BankError, Rejection, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, non-blank identifier of a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletId(String);

impl WalletId {
    pub fn parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BankError::MalformedRequest(
                "wallet_id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A wallet balance in whole units.
///
/// Balances travel as `int32` on the wire, so the ledger never lets one grow
/// past [`Balance::MAX`]. They are never negative once committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(i64);

impl Balance {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i32::MAX as i64);

    /// Builds a balance for seeding. Negative or oversized values are refused.
    pub fn new(value: i64) -> Option<Self> {
        (0..=Self::MAX.0).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Subtracts `amount` if enough funds are present.
    pub fn checked_debit(self, amount: Amount) -> Option<Self> {
        (self.0 >= amount.0).then(|| Self(self.0 - amount.0))
    }

    /// Adds `amount` unless the result would pass [`Balance::MAX`].
    pub fn checked_credit(self, amount: Amount) -> Option<Self> {
        self.0
            .checked_add(amount.0)
            .filter(|sum| *sum <= Self::MAX.0)
            .map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive amount requested by a payment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Amount(i64);

impl Amount {
    pub fn new(value: i64) -> Result<Self> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(Rejection::InvalidAmount.into())
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Amount {
    type Error = BankError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A named balance holder as reported by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub balance: Balance,
}

impl Wallet {
    pub fn new(id: WalletId, balance: Balance) -> Self {
        Self { id, balance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_id_rejects_blank() {
        assert!(WalletId::parse("W1").is_ok());
        assert!(matches!(
            WalletId::parse(""),
            Err(BankError::MalformedRequest(_))
        ));
        assert!(matches!(
            WalletId::parse("   "),
            Err(BankError::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_amount_validation() {
        assert_eq!(Amount::new(1).unwrap().value(), 1);
        assert!(matches!(
            Amount::new(0),
            Err(BankError::Rejected(Rejection::InvalidAmount))
        ));
        assert!(matches!(
            Amount::new(-5),
            Err(BankError::Rejected(Rejection::InvalidAmount))
        ));
    }

    #[test]
    fn test_balance_bounds() {
        assert_eq!(Balance::new(0), Some(Balance::ZERO));
        assert!(Balance::new(-1).is_none());
        assert_eq!(Balance::new(i32::MAX as i64), Some(Balance::MAX));
        assert!(Balance::new(i32::MAX as i64 + 1).is_none());
    }

    #[test]
    fn test_checked_debit() {
        let balance = Balance::new(100).unwrap();
        let forty = Amount::new(40).unwrap();
        assert_eq!(balance.checked_debit(forty), Balance::new(60));
        assert_eq!(
            balance.checked_debit(Amount::new(100).unwrap()),
            Some(Balance::ZERO)
        );
        assert!(balance.checked_debit(Amount::new(101).unwrap()).is_none());
    }

    #[test]
    fn test_checked_credit_respects_cap() {
        let near_cap = Balance::new(i32::MAX as i64 - 1).unwrap();
        assert_eq!(near_cap.checked_credit(Amount::new(1).unwrap()), Some(Balance::MAX));
        assert!(near_cap.checked_credit(Amount::new(2).unwrap()).is_none());
    }

    #[test]
    fn test_amount_deserialization_rejects_non_positive() {
        let amount: Amount = serde_json::from_str("7").unwrap();
        assert_eq!(amount.value(), 7);
        assert!(serde_json::from_str::<Amount>("0").is_err());
    }
}
