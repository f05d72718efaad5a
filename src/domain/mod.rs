//! Domain model: wallets, payment orders and the storage ports the order
//! protocol is written against.

pub mod order;
pub mod ports;
pub mod wallet;
