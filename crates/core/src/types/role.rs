//! User role model.

use serde::{Deserialize, Serialize};

/// A role held by a user.
///
/// Roles are tagged on the wire by their `role` field:
///
/// ```json
/// { "role": "diner" }
/// { "role": "franchisee", "objectId": "99" }
/// { "role": "admin" }
/// ```
///
/// The `objectId` on a franchisee is the franchise the user administers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Role {
    /// An ordinary customer.
    Diner,
    /// Operates one franchise, identified by `objectId`.
    Franchisee {
        #[serde(rename = "objectId", skip_serializing_if = "Option::is_none")]
        object_id: Option<String>,
    },
    /// Full access to user and franchise management.
    Admin,
}

impl Role {
    /// A franchisee role bound to the given franchise identifier.
    #[must_use]
    pub fn franchisee(object_id: impl Into<String>) -> Self {
        Self::Franchisee {
            object_id: Some(object_id.into()),
        }
    }
}
