//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use point_ledger_core::LedgerError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Route does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Amount was zero or negative.
    #[error("invalid amount: {amount} (must be greater than zero)")]
    InvalidAmount {
        /// The rejected amount.
        amount: i64,
    },

    /// Balance does not cover the requested use.
    #[error("insufficient balance: balance={balance}, required={required}")]
    InsufficientBalance {
        /// Current balance.
        balance: i64,
        /// Requested amount.
        required: i64,
    },

    /// Charge would overflow the balance.
    #[error("balance overflow: balance={balance}, amount={amount}")]
    BalanceOverflow {
        /// Current balance.
        balance: i64,
        /// Requested amount.
        amount: i64,
    },
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", None),
            Self::InvalidAmount { amount } => (
                StatusCode::BAD_REQUEST,
                "invalid_amount",
                Some(serde_json::json!({ "amount": amount })),
            ),
            Self::InsufficientBalance { balance, required } => (
                StatusCode::PAYMENT_REQUIRED,
                "insufficient_balance",
                Some(serde_json::json!({
                    "balance": balance,
                    "required": required
                })),
            ),
            Self::BalanceOverflow { balance, amount } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "balance_overflow",
                Some(serde_json::json!({
                    "balance": balance,
                    "amount": amount
                })),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidAmount { amount } => Self::InvalidAmount { amount },
            LedgerError::InsufficientBalance { balance, required } => {
                Self::InsufficientBalance { balance, required }
            }
            LedgerError::BalanceOverflow { balance, amount } => {
                Self::BalanceOverflow { balance, amount }
            }
        }
    }
}
