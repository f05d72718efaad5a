//! The Bank procedures over gRPC.

pub mod client;
pub mod messages;
pub mod pb;
pub mod server;
pub mod service;
