//! Per-user anchor storage.
//!
//! The store is volatile: it lives as long as the process and nothing is
//! written to disk.
//!
//! ## Concurrency contract
//!
//! `get` and `put` are individually atomic but a `get` followed by a `put` is
//! not: two callers doing that for the same user can interleave and one write
//! is lost. [`LocationStore::modify`] runs the whole read-decide-write step for
//! one user with no other writer in between, and is what the tracker uses.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::state::UserLocationState;

/// Key-value store of user anchors, keyed by user id.
pub trait LocationStore: Send + Sync {
    fn get(&self, user_id: &str) -> Option<UserLocationState>;

    /// Insert or replace the state stored under `state.user_id`.
    fn put(&self, state: UserLocationState);

    /// Atomically read the state for `user_id` and, when `f` returns `Some`,
    /// replace it.
    fn modify(
        &self,
        user_id: &str,
        f: &mut dyn FnMut(Option<&UserLocationState>) -> Option<UserLocationState>,
    );

    /// Keep only the states for which `keep` returns true. Returns how many
    /// were removed.
    fn retain(&self, keep: &mut dyn FnMut(&UserLocationState) -> bool) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `HashMap` behind a mutex.
#[derive(Debug, Default)]
pub struct InMemoryLocationStore {
    states: Mutex<HashMap<String, UserLocationState>>,
}

impl InMemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-written entry, so a
    // poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, UserLocationState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LocationStore for InMemoryLocationStore {
    fn get(&self, user_id: &str) -> Option<UserLocationState> {
        self.lock().get(user_id).cloned()
    }

    fn put(&self, state: UserLocationState) {
        self.lock().insert(state.user_id.clone(), state);
    }

    fn modify(
        &self,
        user_id: &str,
        f: &mut dyn FnMut(Option<&UserLocationState>) -> Option<UserLocationState>,
    ) {
        let mut states = self.lock();
        if let Some(next) = f(states.get(user_id)) {
            states.insert(user_id.to_string(), next);
        }
    }

    fn retain(&self, keep: &mut dyn FnMut(&UserLocationState) -> bool) -> usize {
        let mut states = self.lock();
        let before = states.len();
        states.retain(|_, state| keep(state));
        before - states.len()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
