//! Account snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// A point balance snapshot for a user.
///
/// Snapshots are immutable values: a mutation stores a new snapshot rather than editing the old
/// one, so a copy handed to a caller never changes underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The user this balance belongs to.
    pub user_id: UserId,

    /// Current balance in points. Never negative.
    pub balance: i64,

    /// When the balance was last written (or when the snapshot was created, for a user that has
    /// never been written).
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a zero-balance snapshot stamped with the current time.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            balance: 0,
            updated_at: Utc::now(),
        }
    }

    /// Check if the balance covers a deduction of `amount`.
    #[must_use]
    pub fn has_sufficient_balance(&self, amount: i64) -> bool {
        self.balance >= amount
    }
}
