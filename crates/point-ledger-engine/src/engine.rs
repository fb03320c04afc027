//! The balance-mutation engine.

use point_ledger_core::{Account, LedgerError, Result, TransactionKind, TransactionRecord, UserId};
use point_ledger_store::AccountStore;

use crate::locks::UserLocks;

/// Validates amounts and serializes each user's read-modify-write against the store.
///
/// `charge` and `use_points` run their read, write and history append inside the user's
/// exclusive section. Reads go straight to the store and never wait on a section.
#[derive(Debug)]
pub struct LedgerEngine<S> {
    store: S,
    locks: UserLocks,
}

impl<S: AccountStore> LedgerEngine<S> {
    /// Create an engine over `store`.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: UserLocks::new(),
        }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current balance snapshot. A user never written to reads as zero.
    #[must_use]
    pub fn get_balance(&self, user_id: UserId) -> Account {
        self.store.read_account(user_id)
    }

    /// Every history record for the user, oldest first.
    #[must_use]
    pub fn get_history(&self, user_id: UserId) -> Vec<TransactionRecord> {
        self.store.read_history(user_id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `amount` points to the user's balance.
    ///
    /// # Errors
    ///
    /// - `LedgerError::InvalidAmount` if `amount` is not positive.
    /// - `LedgerError::BalanceOverflow` if the new balance does not fit in an `i64`.
    pub fn charge(&self, user_id: UserId, amount: i64) -> Result<Account> {
        ensure_positive(amount)?;

        let result: Result<Account> = self.locks.with_user(user_id, || {
            let current = self.store.read_account(user_id);
            let balance = current
                .balance
                .checked_add(amount)
                .ok_or(LedgerError::BalanceOverflow {
                    balance: current.balance,
                    amount,
                })?;
            Ok(self.commit(user_id, balance, amount, TransactionKind::Charge))
        });

        match &result {
            Ok(account) => {
                tracing::debug!(%user_id, amount, balance = account.balance, "Points charged");
            }
            Err(err) => tracing::warn!(%user_id, amount, error = %err, "Charge rejected"),
        }
        result
    }

    /// Deduct `amount` points from the user's balance.
    ///
    /// # Errors
    ///
    /// - `LedgerError::InvalidAmount` if `amount` is not positive.
    /// - `LedgerError::InsufficientBalance` if the balance is lower than `amount`.
    pub fn use_points(&self, user_id: UserId, amount: i64) -> Result<Account> {
        ensure_positive(amount)?;

        let result: Result<Account> = self.locks.with_user(user_id, || {
            let current = self.store.read_account(user_id);
            if !current.has_sufficient_balance(amount) {
                return Err(LedgerError::InsufficientBalance {
                    balance: current.balance,
                    required: amount,
                });
            }
            let balance = current.balance - amount;
            Ok(self.commit(user_id, balance, amount, TransactionKind::Use))
        });

        match &result {
            Ok(account) => {
                tracing::debug!(%user_id, amount, balance = account.balance, "Points used");
            }
            Err(err) => tracing::warn!(%user_id, amount, error = %err, "Point use rejected"),
        }
        result
    }

    /// Write the new balance, then record it with the written snapshot's timestamp.
    ///
    /// Must only be called from inside the user's exclusive section.
    fn commit(&self, user_id: UserId, balance: i64, amount: i64, kind: TransactionKind) -> Account {
        let account = self.store.write_account(user_id, balance);
        self.store.append_history(user_id, amount, kind, account.updated_at);
        account
    }

    // =========================================================================
    // Lock Maintenance
    // =========================================================================

    /// Release the per-user mutexes of users with no operation in flight.
    ///
    /// Returns how many were released. Safe to call at any time.
    pub fn prune_idle_locks(&self) -> usize {
        let removed = self.locks.prune_idle();
        if removed > 0 {
            tracing::info!(removed, remaining = self.locks.len(), "Pruned idle user locks");
        }
        removed
    }

    /// Number of users that currently have a mutex allocated.
    #[must_use]
    pub fn tracked_locks(&self) -> usize {
        self.locks.len()
    }
}

fn ensure_positive(amount: i64) -> Result<()> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount { amount });
    }
    Ok(())
}
