//! Error types for the point ledger.

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors returned by balance mutations.
///
/// Every variant is raised before anything is written, so a failed operation leaves both the
/// balance and the history untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The requested amount was zero or negative.
    #[error("invalid amount: {amount} (must be greater than zero)")]
    InvalidAmount {
        /// The rejected amount.
        amount: i64,
    },

    /// The balance does not cover the requested deduction.
    #[error("insufficient balance: balance={balance}, required={required}")]
    InsufficientBalance {
        /// Balance at the time of the check.
        balance: i64,
        /// Amount that was requested.
        required: i64,
    },

    /// Crediting the amount would overflow the balance.
    #[error("balance overflow: balance={balance}, amount={amount}")]
    BalanceOverflow {
        /// Balance at the time of the check.
        balance: i64,
        /// Amount that was requested.
        amount: i64,
    },
}
