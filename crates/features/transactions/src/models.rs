use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tracked transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: String,
    /// Human-readable description
    pub description: String,
    /// Signed amount; positive for credits, negative for debits
    pub amount: f64,
    /// Moment the transaction occurred
    pub occurred_at: DateTime<Utc>,
}

/// Payload for recording a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTransaction {
    /// Human-readable description
    pub description: String,
    /// Signed amount; positive for credits, negative for debits
    pub amount: f64,
    /// Defaults to the current time when omitted
    #[serde(default)]
    pub occurred_at: Option<DateTime<Utc>>,
}
