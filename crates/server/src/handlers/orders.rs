//! Order handlers: history, purchase, payment verification.

use serde_json::{Value, json};

use pizza_fixture_core::OrderHistory;

use crate::error::FixtureError;
use crate::handlers::{Intercepted, Reply};
use crate::options::FixtureOptions;
use crate::seed::{ORDER_DATE, ORDER_ID, PAYMENT_TOKEN};
use crate::store::FixtureStore;

/// GET /api/order - the current diner's order history.
///
/// Uses the configured override when present, else an empty history scoped
/// to the session's id (`"0"` when anonymous).
///
/// # Errors
///
/// None; the signature matches the other handlers.
pub fn history(store: &FixtureStore, options: &FixtureOptions) -> Result<Reply, FixtureError> {
    let history = options.order_history.clone().unwrap_or_else(|| OrderHistory {
        id: "history-1".to_string(),
        diner_id: store
            .session()
            .map_or_else(|| "0".to_string(), |user| user.id.to_string()),
        orders: Vec::new(),
    });

    Ok(Reply::ok(json!(history)))
}

/// POST /api/order - accept a purchase.
///
/// Echoes the submitted order field-for-field, stamped with the fixed order
/// id and date, paired with an opaque payment token. Deliberately does not
/// append to any history; every submission is independent.
///
/// # Errors
///
/// [`FixtureError::BadRequest`] when the body is not a JSON object.
pub fn submit(request: &Intercepted) -> Result<Reply, FixtureError> {
    let body: Value = request.json()?;
    let Value::Object(mut order) = body else {
        return Err(FixtureError::BadRequest);
    };

    order.insert("id".to_string(), json!(ORDER_ID));
    order.insert("date".to_string(), json!(ORDER_DATE));

    Ok(Reply::ok(json!({ "order": order, "jwt": PAYMENT_TOKEN })))
}

/// POST /api/order/verify - payment verification, always valid.
///
/// # Errors
///
/// None; the signature matches the other handlers.
pub fn verify() -> Result<Reply, FixtureError> {
    Ok(Reply::ok(
        json!({ "message": "valid", "payload": { "orderId": 23 } }),
    ))
}
