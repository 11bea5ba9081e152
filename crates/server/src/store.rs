//! Authoritative in-memory state for a test run.
//!
//! One [`FixtureStore`] is built per router instance and discarded with it.
//! Absence is always a handled outcome: lookups return `Option`, never an
//! error. Deletion is logical, so reads filter by the deleted-ID set instead
//! of removing records.

use std::collections::HashSet;

use pizza_fixture_core::{Credentialed, User, UserId};

/// In-memory state: seeded users, registered users, the current session, and
/// logically deleted user IDs.
///
/// Seed and registered records are kept in insertion order so listings are
/// deterministic: seed declaration order, then registration order.
#[derive(Debug)]
pub struct FixtureStore {
    seeded: Vec<Credentialed>,
    registered: Vec<Credentialed>,
    session: Option<User>,
    deleted: HashSet<UserId>,
}

impl FixtureStore {
    /// Create a store over the given seed table, with no session.
    #[must_use]
    pub fn new(seeded: Vec<Credentialed>) -> Self {
        Self {
            seeded,
            registered: Vec::new(),
            session: None,
            deleted: HashSet::new(),
        }
    }

    /// The currently authenticated user, or `None` when anonymous.
    #[must_use]
    pub fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// Replace the session with the given user.
    pub fn set_session(&mut self, user: User) {
        self.session = Some(user);
    }

    /// Drop the session. Always succeeds, even when already anonymous.
    pub fn clear_session(&mut self) {
        self.session = None;
    }

    /// Look up a seeded record by email.
    #[must_use]
    pub fn seeded_by_email(&self, email: &str) -> Option<&Credentialed> {
        self.seeded.iter().find(|c| c.user.email == email)
    }

    /// Look up a registered record by email.
    #[must_use]
    pub fn registered_by_email(&self, email: &str) -> Option<&Credentialed> {
        self.registered.iter().find(|c| c.user.email == email)
    }

    /// Insert or replace the registered record for the record's email.
    ///
    /// Replacement keeps the record's original position, so listing order is
    /// unaffected by re-registration or profile updates.
    pub fn upsert_registered(&mut self, record: Credentialed) {
        match self
            .registered
            .iter_mut()
            .find(|c| c.user.email == record.user.email)
        {
            Some(existing) => *existing = record,
            None => self.registered.push(record),
        }
    }

    /// Mark a user ID as deleted. Idempotent.
    pub fn mark_deleted(&mut self, id: UserId) {
        self.deleted.insert(id);
    }

    /// Whether a user ID has been logically deleted.
    #[must_use]
    pub fn is_deleted(&self, id: UserId) -> bool {
        self.deleted.contains(&id)
    }

    /// All non-deleted users: seeded then registered, sanitized.
    #[must_use]
    pub fn list_users(&self) -> Vec<User> {
        self.seeded
            .iter()
            .chain(self.registered.iter())
            .map(|c| c.user.clone())
            .filter(|u| !self.deleted.contains(&u.id))
            .collect()
    }
}
