//! Application layer containing the order lifecycle orchestration.
//!
//! This module defines the `OrderProtocol`, which coordinates the wallet
//! ledger and the order table. It is the only place enforcing rules that span
//! both stores.

pub mod protocol;
