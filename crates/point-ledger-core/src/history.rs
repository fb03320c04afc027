//! Transaction history types.
//!
//! Every successful balance change appends exactly one record. Records are never edited or
//! removed, so replaying them in insertion order from zero yields the current balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{TransactionId, UserId};

/// An immutable history entry describing one balance change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Sequence id assigned by the store.
    pub id: TransactionId,

    /// The user whose balance changed.
    pub user_id: UserId,

    /// Magnitude of the change. Always positive; the direction comes from `kind`.
    pub amount: i64,

    /// Whether points were added or removed.
    pub kind: TransactionKind,

    /// Copied from the `updated_at` of the account snapshot this change produced.
    pub recorded_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// The balance delta this record represents.
    #[must_use]
    pub const fn signed_amount(&self) -> i64 {
        match self.kind {
            TransactionKind::Charge => self.amount,
            TransactionKind::Use => -self.amount,
        }
    }
}

/// Direction of a balance change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Points were added.
    Charge,

    /// Points were spent.
    Use,
}

impl TransactionKind {
    /// Check if this kind adds points.
    #[must_use]
    pub const fn is_credit(self) -> bool {
        matches!(self, Self::Charge)
    }

    /// Check if this kind removes points.
    #[must_use]
    pub const fn is_debit(self) -> bool {
        matches!(self, Self::Use)
    }
}

/// Rebuild a balance by applying records in order, starting from zero.
#[must_use]
pub fn replay_balance<'a, I>(records: I) -> i64
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    records
        .into_iter()
        .map(TransactionRecord::signed_amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, amount: i64, kind: TransactionKind) -> TransactionRecord {
        TransactionRecord {
            id: TransactionId::new(id),
            user_id: UserId::new(1),
            amount,
            kind,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn use_record_is_negative_delta() {
        let tx = record(1, 300, TransactionKind::Use);
        assert_eq!(tx.amount, 300);
        assert_eq!(tx.signed_amount(), -300);
    }

    #[test]
    fn transaction_kind_is_credit_debit() {
        assert!(TransactionKind::Charge.is_credit());
        assert!(!TransactionKind::Charge.is_debit());
        assert!(TransactionKind::Use.is_debit());
        assert!(!TransactionKind::Use.is_credit());
    }

    #[test]
    fn replay_applies_records_in_order() {
        let history = vec![
            record(1, 1000, TransactionKind::Charge),
            record(2, 500, TransactionKind::Use),
            record(3, 2000, TransactionKind::Charge),
        ];
        assert_eq!(replay_balance(&history), 2500);
        assert_eq!(replay_balance(&Vec::<TransactionRecord>::new()), 0);
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&TransactionKind::Charge).unwrap();
        assert_eq!(json, "\"charge\"");
    }
}
