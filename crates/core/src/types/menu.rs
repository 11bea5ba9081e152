//! Menu item type.

use serde::{Deserialize, Serialize};

use crate::types::id::MenuItemId;

/// A pizza on the menu.
///
/// Immutable fixture data; tests may override the whole list per instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Menu item ID.
    pub id: MenuItemId,
    /// Pizza name shown on the menu.
    pub title: String,
    /// Image file reference.
    pub image: String,
    /// Fractional price, serialized as a plain JSON number.
    pub price: f64,
    /// One-line marketing copy.
    pub description: String,
}
