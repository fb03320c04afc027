//! Core types for the point ledger.
//!
//! This crate provides the types shared by the store, the engine and the HTTP layer:
//!
//! - **Identifiers**: `UserId`, `TransactionId`
//! - **Accounts**: `Account`
//! - **History**: `TransactionRecord`, `TransactionKind`
//! - **Errors**: `LedgerError`
//!
//! # Points
//!
//! Balances and amounts are whole points stored as `i64`. Amounts arrive signed so that a
//! non-positive request can be rejected with a typed error instead of failing to parse; a stored
//! balance and a stored record amount are never negative.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod account;
pub mod error;
pub mod history;
pub mod ids;

pub use account::Account;
pub use error::{LedgerError, Result};
pub use history::{replay_balance, TransactionKind, TransactionRecord};
pub use ids::{IdError, TransactionId, UserId};
