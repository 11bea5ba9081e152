//! Order and order-history types.
//!
//! Order-adjacent IDs cross the wire as strings, not numbers, so these
//! structs keep them as `String` rather than reusing the numeric newtypes.

use serde::{Deserialize, Serialize};

/// A single line item in an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Menu item ordered.
    pub menu_id: String,
    /// Description as shown at checkout.
    pub description: String,
    /// Line price.
    pub price: f64,
}

/// A completed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub id: String,
    /// Franchise the order was placed with.
    pub franchise_id: String,
    /// Store the order was placed at.
    pub store_id: String,
    /// Order timestamp, RFC 3339 with milliseconds.
    pub date: String,
    /// Line items, in the order they were added.
    pub items: Vec<OrderItem>,
}

/// A diner's order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistory {
    /// History record ID.
    pub id: String,
    /// The diner this history belongs to.
    pub diner_id: String,
    /// Past orders, oldest first.
    pub orders: Vec<Order>,
}
