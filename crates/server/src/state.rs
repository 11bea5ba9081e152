//! Shared state behind the fixture's handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::options::FixtureOptions;
use crate::seed;
use crate::store::FixtureStore;

/// State shared across intercepted requests.
///
/// Cheaply cloneable via `Arc`. The store sits behind a mutex: each handler
/// locks it, runs to completion, and releases, so requests mutate the store
/// strictly one at a time - the same serial model the UI tests assume.
#[derive(Clone)]
pub struct FixtureState {
    inner: Arc<FixtureStateInner>,
}

struct FixtureStateInner {
    store: Mutex<FixtureStore>,
    options: FixtureOptions,
}

impl FixtureState {
    /// Build state for one fixture instance: seed the store and apply the
    /// initial-session option.
    #[must_use]
    pub fn new(options: FixtureOptions) -> Self {
        let mut store = FixtureStore::new(seed::seeded_users());

        if let Some(email) = options.initial_user_email.as_deref() {
            match store.seeded_by_email(email).map(|c| c.user.clone()) {
                Some(user) => store.set_session(user),
                None => tracing::warn!(email, "Initial user is not seeded; starting anonymous"),
            }
        }

        Self {
            inner: Arc::new(FixtureStateInner {
                store: Mutex::new(store),
                options,
            }),
        }
    }

    /// Lock the store for the duration of one handler.
    ///
    /// A poisoned lock is recovered rather than propagated: fixture state is
    /// test data, and the next request should still be answerable.
    #[must_use]
    pub fn store(&self) -> MutexGuard<'_, FixtureStore> {
        self.inner
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Per-instance overrides.
    #[must_use]
    pub fn options(&self) -> &FixtureOptions {
        &self.inner.options
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_anonymous_by_default() {
        let state = FixtureState::new(FixtureOptions::default());
        assert!(state.store().session().is_none());
    }

    #[test]
    fn test_initial_user_establishes_a_session() {
        let state = FixtureState::new(FixtureOptions::default().with_initial_user("a@jwt.com"));
        let store = state.store();
        let session = store.session().unwrap();
        assert_eq!(session.email, "a@jwt.com");
        assert_eq!(session.name, "Admin User");
    }

    #[test]
    fn test_unknown_initial_user_stays_anonymous() {
        let state = FixtureState::new(FixtureOptions::default().with_initial_user("ghost@jwt.com"));
        assert!(state.store().session().is_none());
    }
}
