//! Transaction tracking feature slice.

mod error;
mod ledger;
mod models;
pub mod routes;

pub use crate::error::TransactionsError;
pub use crate::ledger::Ledger;
pub use crate::models::{CreateTransaction, Transaction};

use agk_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;

/// Transactions feature state.
#[derive(Debug, Clone)]
pub struct Transactions {
    inner: Arc<TransactionsInner>,
}

/// Transactions feature inner state.
#[derive(Debug, Default)]
pub struct TransactionsInner {
    pub ledger: Ledger,
}

impl Transactions {
    #[must_use]
    pub fn new(inner: TransactionsInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Transactions {
    type Target = TransactionsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Transactions {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the transactions feature.
///
/// # Errors
/// Returns an error if the slice state cannot be constructed.
pub fn init() -> Result<InitializedSlice, TransactionsError> {
    tracing::info!("Transactions slice initialized");

    let inner = TransactionsInner::default();

    let slice = Transactions::new(inner);
    Ok(InitializedSlice::new(slice))
}
