//! Balance-mutation engine for the point ledger.
//!
//! The engine owns the business rules: amounts must be positive, a balance never goes below
//! zero, and every successful change is written to the store together with one history record.
//!
//! # Concurrency
//!
//! Each user id has its own exclusive section. Inside it, `charge` and `use_points` read the
//! balance, compute the new one, write it and append history as one indivisible step, so
//! concurrent updates to the same account are never lost. Different users never wait on each
//! other, and `get_balance` / `get_history` never wait at all.
//!
//! # Example
//!
//! ```
//! use point_ledger_core::{LedgerError, UserId};
//! use point_ledger_engine::LedgerEngine;
//! use point_ledger_store::MemoryStore;
//!
//! let engine = LedgerEngine::new(MemoryStore::new());
//! let user = UserId::new(1);
//!
//! engine.charge(user, 1000)?;
//! let account = engine.use_points(user, 300)?;
//! assert_eq!(account.balance, 700);
//!
//! assert!(matches!(
//!     engine.use_points(user, 1000),
//!     Err(LedgerError::InsufficientBalance { .. })
//! ));
//! # Ok::<(), LedgerError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod locks;

pub use engine::LedgerEngine;
pub use locks::UserLocks;
