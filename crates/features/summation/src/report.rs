use serde::Serialize;
use utoipa::ToSchema;

/// Aggregate view over every tracked transaction.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummationReport {
    /// Number of tracked transactions
    pub count: usize,
    /// Net sum of all amounts
    pub total: f64,
    /// Sum of positive amounts
    pub credits: f64,
    /// Absolute sum of negative amounts
    pub debits: f64,
}

impl SummationReport {
    /// Aggregates the given amounts into a report.
    #[must_use]
    pub fn from_amounts(amounts: &[f64]) -> Self {
        let mut total = 0.0;
        let mut credits = 0.0;
        let mut debits = 0.0;

        for &amount in amounts {
            total += amount;
            if amount >= 0.0 {
                credits += amount;
            } else {
                debits += -amount;
            }
        }

        Self { count: amounts.len(), total, credits, debits }
    }
}
