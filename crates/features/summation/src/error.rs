/// Summation slice error type.
#[derive(Debug, thiserror::Error)]
pub enum SummationError {
    #[error("Summation error: {message}")]
    Internal { message: String },
}
