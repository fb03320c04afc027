//! In-memory storage implementation.
//!
//! This module provides the `MemoryStore` implementation of the `AccountStore` trait. Both
//! collections live in sharded concurrent maps, so operations on different users proceed in
//! parallel.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use point_ledger_core::{Account, TransactionId, TransactionKind, TransactionRecord, UserId};

use crate::AccountStore;

/// Process-local storage backed by concurrent hash maps.
#[derive(Debug)]
pub struct MemoryStore {
    accounts: DashMap<UserId, Account>,
    history: DashMap<UserId, Vec<TransactionRecord>>,
    next_transaction_id: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store. The first appended record gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            history: DashMap::new(),
            next_transaction_id: AtomicU64::new(1),
        }
    }

    /// Number of accounts that have been written at least once.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for MemoryStore {
    // =========================================================================
    // Account Operations
    // =========================================================================

    fn read_account(&self, user_id: UserId) -> Account {
        self.accounts
            .get(&user_id)
            .map_or_else(|| Account::new(user_id), |entry| *entry.value())
    }

    fn write_account(&self, user_id: UserId, balance: i64) -> Account {
        let now = Utc::now();
        let mut slot = self.accounts.entry(user_id).or_insert(Account {
            user_id,
            balance,
            updated_at: now,
        });

        // A wall clock stepping backwards must not reorder a user's snapshots.
        let updated_at = now.max(slot.updated_at);
        *slot = Account {
            user_id,
            balance,
            updated_at,
        };
        *slot
    }

    // =========================================================================
    // History Operations
    // =========================================================================

    fn append_history(
        &self,
        user_id: UserId,
        amount: i64,
        kind: TransactionKind,
        recorded_at: DateTime<Utc>,
    ) -> TransactionRecord {
        // The id is taken while the user's entry is held so per-user order matches id order.
        let mut entries = self.history.entry(user_id).or_default();
        let id = TransactionId::new(self.next_transaction_id.fetch_add(1, Ordering::Relaxed));

        let record = TransactionRecord {
            id,
            user_id,
            amount,
            kind,
            recorded_at,
        };
        entries.push(record.clone());

        tracing::trace!(%user_id, transaction_id = %id, amount, ?kind, "History record appended");

        record
    }

    fn read_history(&self, user_id: UserId) -> Vec<TransactionRecord> {
        self.history
            .get(&user_id)
            .map(|entries| entries.value().clone())
            .unwrap_or_default()
    }
}
