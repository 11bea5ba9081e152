//! User domain types.
//!
//! These types split the credentialed record the fixture stores from the
//! sanitized user it returns, so a password can never reach a response.

use serde::{Deserialize, Serialize};

use crate::types::id::UserId;
use crate::types::role::Role;

/// A user as returned to callers.
///
/// Deliberately has no password field: only [`Credentialed`] carries one, and
/// `Credentialed` is not serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, the lookup key for both seeded and registered users.
    pub email: String,
    /// Roles held, in declaration order.
    pub roles: Vec<Role>,
}

/// A user paired with the password that authenticates it.
///
/// The shape shared by the seed table and the registered-user table, so login
/// can check either uniformly. Never leaves the store as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentialed {
    /// Plain-text fixture password; compared by string equality.
    pub password: String,
    /// The sanitized user behind the credential.
    pub user: User,
}
