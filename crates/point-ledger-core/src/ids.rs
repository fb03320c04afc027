//! Identifier types for the point ledger.
//!
//! Both identifiers are non-negative integers. User ids are supplied by callers and never
//! generated here; transaction ids are a sequence assigned by the store at insertion time.
//!
//! # Macro-based ID Types
//!
//! The `integer_id_type!` macro reduces boilerplate for the integer newtypes, ensuring consistent
//! implementation of serialization, parsing, and display traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to define a `u64`-backed identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `u64` with implementations for:
/// - `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - `Serialize`, `Deserialize` (as a bare number)
/// - `FromStr`, `Display`, `Debug`
/// - `From<u64>`, `Into<u64>`
///
/// # Example
///
/// ```ignore
/// integer_id_type!(MyId, "A custom identifier type.");
/// let id = MyId::new(7);
/// let parsed: MyId = "7".parse().unwrap();
/// ```
macro_rules! integer_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create an identifier from its numeric value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Return the numeric value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| IdError::InvalidInteger(s.to_string()))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

integer_id_type!(UserId, "A user identifier.\n\nUser ids are supplied by the caller; an account exists implicitly for every id.");
integer_id_type!(TransactionId, "A transaction record identifier.\n\nAssigned by the store from a monotonically increasing sequence starting at 1.");

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not a non-negative integer.
    #[error("invalid identifier: {0:?} is not a non-negative integer")]
    InvalidInteger(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parses_from_str() {
        let parsed = UserId::from_str("42").unwrap();
        assert_eq!(parsed, UserId::new(42));
        assert_eq!(parsed.to_string(), "42");
    }

    #[test]
    fn user_id_rejects_negative() {
        let err = UserId::from_str("-1").unwrap_err();
        assert_eq!(err, IdError::InvalidInteger("-1".into()));
    }

    #[test]
    fn user_id_rejects_garbage() {
        assert!(UserId::from_str("abc").is_err());
        assert!(UserId::from_str("").is_err());
    }

    #[test]
    fn user_id_serializes_as_number() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
        let parsed: UserId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, UserId::new(7));
    }

    #[test]
    fn transaction_ids_order_numerically() {
        assert!(TransactionId::new(2) > TransactionId::new(1));
        assert_eq!(format!("{:?}", TransactionId::new(3)), "TransactionId(3)");
    }
}
