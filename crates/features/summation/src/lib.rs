//! Transaction summation and analysis feature slice.

mod error;
mod report;
pub mod routes;

pub use crate::error::SummationError;
pub use crate::report::SummationReport;

use agk_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;

/// Summation feature state.
///
/// Stateless by itself; reports are derived from the transactions ledger on demand.
#[derive(Debug, Clone)]
pub struct Summation {
    inner: Arc<SummationInner>,
}

/// Summation feature inner state.
#[derive(Debug, Default)]
pub struct SummationInner {}

impl Summation {
    #[must_use]
    pub fn new(inner: SummationInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Summation {
    type Target = SummationInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Summation {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the summation feature.
///
/// # Errors
/// Returns an error if the slice state cannot be constructed.
pub fn init() -> Result<InitializedSlice, SummationError> {
    tracing::info!("Summation slice initialized");

    let inner = SummationInner::default();

    let slice = Summation::new(inner);
    Ok(InitializedSlice::new(slice))
}
