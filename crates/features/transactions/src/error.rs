/// Transactions slice error type.
#[derive(Debug, thiserror::Error)]
pub enum TransactionsError {
    #[error("Transactions error: {message}")]
    Internal { message: String },
}
