//! Per-user exclusive sections.
//!
//! Each user id maps to its own mutex, created the first time the user is locked. Sections for
//! different users never contend; sections for the same user run one at a time in the order they
//! acquire the mutex.

use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;

use point_ledger_core::UserId;

/// Lazily populated map from user id to that user's mutex.
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl UserLocks {
    /// Create an empty lock map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the exclusive section for `user_id`.
    ///
    /// The section is released when `f` returns, whatever it returns.
    pub fn with_user<T>(&self, user_id: UserId, f: impl FnOnce() -> T) -> T {
        // The map shard is released before waiting on the user's mutex.
        let lock = Arc::clone(self.locks.entry(user_id).or_default().value());
        // The mutex guards no data, so a panic in an earlier section leaves nothing to repair.
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }

    /// Drop the mutexes of users with no section in flight. Returns how many were removed.
    ///
    /// A handle is only cloned out of the map under the shard's write lock, and `retain` holds
    /// the same lock, so a mutex with a strong count of one cannot be picked up concurrently.
    pub fn prune_idle(&self) -> usize {
        let mut removed = 0;
        self.locks.retain(|_, lock| {
            let in_use = Arc::strong_count(lock) > 1;
            if !in_use {
                removed += 1;
            }
            in_use
        });
        removed
    }

    /// Number of users that currently have a mutex allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Check if no user has a mutex allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::time::Duration;

    #[test]
    fn lock_is_created_on_first_use() {
        let locks = UserLocks::new();
        assert!(locks.is_empty());

        let value = locks.with_user(UserId::new(1), || 42);
        assert_eq!(value, 42);
        assert_eq!(locks.len(), 1);

        locks.with_user(UserId::new(1), || ());
        assert_eq!(locks.len(), 1);
    }

    #[test]
    fn same_user_sections_do_not_overlap() {
        let locks = UserLocks::new();
        let inside = AtomicUsize::new(0);
        let max_inside = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..20 {
                        locks.with_user(UserId::new(7), || {
                            let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                            max_inside.fetch_max(now, Ordering::SeqCst);
                            std::thread::sleep(Duration::from_micros(50));
                            inside.fetch_sub(1, Ordering::SeqCst);
                        });
                    }
                });
            }
        });

        assert_eq!(max_inside.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn different_users_run_concurrently() {
        let locks = UserLocks::new();
        // Both sections must be entered at once for the barrier to open.
        let both_inside = Barrier::new(2);

        std::thread::scope(|scope| {
            for user in [1, 2] {
                let locks = &locks;
                let both_inside = &both_inside;
                scope.spawn(move || {
                    locks.with_user(UserId::new(user), || {
                        both_inside.wait();
                    });
                });
            }
        });

        assert_eq!(locks.len(), 2);
    }

    #[test]
    fn prune_removes_only_idle_locks() {
        let locks = UserLocks::new();
        locks.with_user(UserId::new(1), || ());
        locks.with_user(UserId::new(2), || ());

        let entered = Barrier::new(2);
        let release = Barrier::new(2);

        std::thread::scope(|scope| {
            scope.spawn(|| {
                locks.with_user(UserId::new(2), || {
                    entered.wait();
                    release.wait();
                });
            });

            entered.wait();
            // User 2 is mid-section; only user 1 can go.
            assert_eq!(locks.prune_idle(), 1);
            assert_eq!(locks.len(), 1);
            release.wait();
        });

        assert_eq!(locks.prune_idle(), 1);
        assert!(locks.is_empty());
    }

    #[test]
    fn section_released_after_error() {
        let locks = UserLocks::new();
        let failed: Result<(), &str> = locks.with_user(UserId::new(3), || Err("nope"));
        assert!(failed.is_err());

        // Would deadlock if the first section were still held.
        let ok: Result<i32, &str> = locks.with_user(UserId::new(3), || Ok(1));
        assert_eq!(ok, Ok(1));
    }
}
