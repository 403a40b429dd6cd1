//! Facade crate for Agramkow API features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] during bootstrap to register feature slices; extend as new slices appear.

pub use agk_domain as domain;
pub use agk_kernel as kernel;

pub mod server {
    pub mod router {
        pub use agk_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use agk_summation as summation;
    pub use agk_transactions as transactions;

    /// Compiled-in features.
    pub const ENABLED: &[&str] = &["transactions", "summation"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init() -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Transaction tracking
    slices.push(features::transactions::init()?);

    // Summation / analysis
    slices.push(features::summation::init()?);

    Ok(slices)
}
