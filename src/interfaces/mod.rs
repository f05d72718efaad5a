//! Adapters between the Bank and the outside world: the gRPC service and
//! client, the wallet seed input and the client command script.

pub mod rpc;
pub mod script;
pub mod seed;
