//! Storage layer for the point ledger.
//!
//! This crate holds account snapshots and the append-only transaction history. It applies no
//! business rules: balances are written exactly as given and history is appended exactly as
//! given. Validation and per-user serialization belong to the engine.
//!
//! # Example
//!
//! ```
//! use point_ledger_core::{TransactionKind, UserId};
//! use point_ledger_store::{AccountStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let user_id = UserId::new(1);
//!
//! let account = store.write_account(user_id, 1000);
//! store.append_history(user_id, 1000, TransactionKind::Charge, account.updated_at);
//!
//! assert_eq!(store.read_account(user_id).balance, 1000);
//! assert_eq!(store.read_history(user_id).len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod memory;

pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use point_ledger_core::{Account, TransactionKind, TransactionRecord, UserId};

/// The storage trait defining the primitives the engine builds on.
///
/// Each call is atomic on its own; none of them fail. Composing several calls into one
/// indivisible update is the caller's job.
pub trait AccountStore: Send + Sync {
    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Get the current snapshot for a user.
    ///
    /// A user that has never been written gets a zero-balance snapshot stamped with the call
    /// time. Nothing is stored as a side effect.
    fn read_account(&self, user_id: UserId) -> Account;

    /// Replace the user's snapshot with `{user_id, balance, now}` and return it.
    ///
    /// The balance is not validated.
    fn write_account(&self, user_id: UserId, balance: i64) -> Account;

    // =========================================================================
    // History Operations
    // =========================================================================

    /// Append a record, assigning it the next sequence id.
    fn append_history(
        &self,
        user_id: UserId,
        amount: i64,
        kind: TransactionKind,
        recorded_at: DateTime<Utc>,
    ) -> TransactionRecord;

    /// List every record for a user in insertion order.
    ///
    /// The returned vector is an owned copy.
    fn read_history(&self, user_id: UserId) -> Vec<TransactionRecord>;
}
