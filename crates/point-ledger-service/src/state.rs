//! Application state.

use std::sync::Arc;
use std::time::Duration;

use point_ledger_engine::LedgerEngine;
use point_ledger_store::MemoryStore;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::config::ServiceConfig;

/// The engine as deployed by this service.
pub type PointLedger = LedgerEngine<MemoryStore>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The balance-mutation engine.
    pub ledger: Arc<PointLedger>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(ledger: Arc<PointLedger>, config: ServiceConfig) -> Self {
        Self { ledger, config }
    }

    /// Create a state around a fresh in-memory ledger.
    #[must_use]
    pub fn in_memory(config: ServiceConfig) -> Self {
        Self::new(Arc::new(LedgerEngine::new(MemoryStore::new())), config)
    }

    /// Start the background lock pruner if the configuration asks for one.
    pub fn spawn_maintenance(&self) -> Option<JoinHandle<()>> {
        let Some(every) = self.config.lock_prune_interval() else {
            tracing::debug!("Lock pruning disabled");
            return None;
        };
        Some(spawn_lock_pruner(Arc::clone(&self.ledger), every))
    }
}

/// Periodically drop per-user locks that no operation is holding.
pub fn spawn_lock_pruner(ledger: Arc<PointLedger>, every: Duration) -> JoinHandle<()> {
    tracing::info!(interval_seconds = every.as_secs(), "Lock pruning enabled");

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = ledger.prune_idle_locks();
            tracing::debug!(removed, remaining = ledger.tracked_locks(), "Lock prune pass");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use point_ledger_core::UserId;

    #[tokio::test(start_paused = true)]
    async fn pruner_releases_idle_locks() {
        let state = AppState::in_memory(ServiceConfig {
            lock_prune_interval_seconds: Some(60),
            ..ServiceConfig::default()
        });
        state.ledger.charge(UserId::new(1), 10).unwrap();
        state.ledger.charge(UserId::new(2), 10).unwrap();
        assert_eq!(state.ledger.tracked_locks(), 2);

        let handle = state.spawn_maintenance().unwrap();
        tokio::time::sleep(Duration::from_secs(61)).await;

        assert_eq!(state.ledger.tracked_locks(), 0);
        assert_eq!(state.ledger.get_balance(UserId::new(1)).balance, 10);
        handle.abort();
    }

    #[tokio::test]
    async fn maintenance_disabled_by_default() {
        let state = AppState::in_memory(ServiceConfig::default());
        assert!(state.spawn_maintenance().is_none());
    }
}
