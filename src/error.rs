use thiserror::Error;

/// Client-caused outcomes of a Bank procedure.
///
/// These never fail the remote call: the façade reports them as status codes
/// and shared state stays consistent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("amount must be positive")]
    InvalidAmount,
    #[error("bank is no longer accepting payment orders")]
    NotAccepting,
    #[error("payment order not found")]
    OrderNotFound,
    #[error("wallet not found")]
    UnknownWallet,
    #[error("wallet does not match the payment order")]
    WalletMismatch,
    #[error("confirmation amount does not match the payment order")]
    AmountMismatch,
    #[error("payment order already resolved")]
    AlreadyResolved,
    #[error("insufficient funds")]
    InsufficientFunds,
}

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("Invalid wallet seed: {0}")]
    InvalidSeed(String),
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("Remote fault: {0}")]
    RemoteFault(String),
    #[error("Order id space exhausted")]
    OrderIdsExhausted,
    #[error("Balance of wallet {0} would exceed the ledger limit")]
    BalanceOverflow(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Transport error: {0}")]
    TransportError(#[from] tonic::transport::Error),
}

impl BankError {
    /// Returns the rejection carried by this error, if it is one.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            BankError::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BankError>;
