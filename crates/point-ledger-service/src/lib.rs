//! Point ledger HTTP API service.
//!
//! A thin request layer over the ledger engine: path parameters and JSON bodies are turned into
//! `get_balance`, `get_history`, `charge` and `use_points` calls, and ledger errors are turned
//! into 4xx responses with a JSON error envelope.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Axum handlers are async by signature even when the body is not.
#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::{spawn_lock_pruner, AppState, PointLedger};
