//! Protobuf messages and gRPC stubs for `proto/bank/v1/bank.proto`.

pub mod bank {
    pub mod v1 {
        include!("generated/bank.v1.rs");
    }
}
