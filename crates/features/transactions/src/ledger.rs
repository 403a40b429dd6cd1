use crate::models::{CreateTransaction, Transaction};
use agk_kernel::safe_nanoid;
use chrono::Utc;
use parking_lot::RwLock;

/// In-memory transaction store.
///
/// Append-only for the process lifetime; nothing is persisted across restarts.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: RwLock<Vec<Transaction>>,
}

impl Ledger {
    /// Records a new transaction and returns the stored entry.
    pub fn record(&self, request: CreateTransaction) -> Transaction {
        let transaction = Transaction {
            id: safe_nanoid!(),
            description: request.description,
            amount: request.amount,
            occurred_at: request.occurred_at.unwrap_or_else(Utc::now),
        };

        self.entries.write().push(transaction.clone());
        transaction
    }

    /// Looks up a transaction by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Transaction> {
        self.entries.read().iter().find(|entry| entry.id == id).cloned()
    }

    /// Returns all recorded transactions in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Transaction> {
        self.entries.read().clone()
    }

    /// Returns the recorded amounts in insertion order.
    #[must_use]
    pub fn amounts(&self) -> Vec<f64> {
        self.entries.read().iter().map(|entry| entry.amount).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(description: &str, amount: f64) -> CreateTransaction {
        CreateTransaction { description: description.to_owned(), amount, occurred_at: None }
    }

    #[test]
    fn record_assigns_unique_ids() {
        let ledger = Ledger::default();
        let first = ledger.record(request("coffee", -3.5));
        let second = ledger.record(request("salary", 1500.0));

        assert_ne!(first.id, second.id);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn get_finds_recorded_entry() {
        let ledger = Ledger::default();
        let stored = ledger.record(request("coffee", -3.5));

        let found = ledger.get(&stored.id).expect("entry present");
        assert_eq!(found, stored);
        assert!(ledger.get("missing").is_none());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let ledger = Ledger::default();
        ledger.record(request("first", 1.0));
        ledger.record(request("second", 2.0));
        ledger.record(request("third", 3.0));

        let descriptions: Vec<_> =
            ledger.list().into_iter().map(|entry| entry.description).collect();
        assert_eq!(descriptions, ["first", "second", "third"]);
        assert_eq!(ledger.amounts(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn explicit_timestamp_is_kept() {
        let ledger = Ledger::default();
        let at = Utc.with_ymd_and_hms(2025, 6, 14, 10, 30, 0).single().expect("valid timestamp");

        let stored = ledger.record(CreateTransaction {
            description: "backfilled".to_owned(),
            amount: -5.0,
            occurred_at: Some(at),
        });

        assert_eq!(stored.occurred_at, at);
    }
}
