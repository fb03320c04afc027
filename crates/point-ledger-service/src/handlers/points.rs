//! Point balance and history handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use point_ledger_core::{Account, TransactionKind, TransactionRecord, UserId};

use crate::error::ApiError;
use crate::state::AppState;

/// Balance response.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// User ID.
    pub user_id: u64,
    /// Balance in points.
    pub balance: i64,
    /// Last update timestamp (RFC 3339).
    pub updated_at: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            user_id: account.user_id.get(),
            balance: account.balance,
            updated_at: account.updated_at.to_rfc3339(),
        }
    }
}

/// Transaction response.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: u64,
    /// Amount in points (always positive).
    pub amount: i64,
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Timestamp of the balance snapshot this transaction produced.
    pub recorded_at: String,
}

impl From<&TransactionRecord> for TransactionResponse {
    fn from(tx: &TransactionRecord) -> Self {
        Self {
            id: tx.id.get(),
            amount: tx.amount,
            kind: tx.kind,
            recorded_at: tx.recorded_at.to_rfc3339(),
        }
    }
}

/// History response.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// User ID.
    pub user_id: u64,
    /// Transactions, oldest first.
    pub transactions: Vec<TransactionResponse>,
}

/// Charge or use request.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    /// Amount in points.
    pub amount: i64,
}

/// Get the current balance.
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Json<AccountResponse> {
    let account = state.ledger.get_balance(user_id);
    Json(AccountResponse::from(&account))
}

/// List the transaction history.
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Json<HistoryResponse> {
    let transactions = state
        .ledger
        .get_history(user_id)
        .iter()
        .map(TransactionResponse::from)
        .collect();

    Json(HistoryResponse {
        user_id: user_id.get(),
        transactions,
    })
}

/// Charge points.
pub async fn charge(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state.ledger.charge(user_id, body.amount)?;
    Ok(Json(AccountResponse::from(&account)))
}

/// Use points.
pub async fn use_points(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state.ledger.use_points(user_id, body.amount)?;
    Ok(Json(AccountResponse::from(&account)))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".into())
}
