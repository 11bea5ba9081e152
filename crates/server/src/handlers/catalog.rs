//! Catalog handlers: menu and franchise data.
//!
//! Stateless constant handlers; each answers with the per-instance override
//! when one is configured and the built-in default otherwise.

use serde_json::json;

use crate::error::FixtureError;
use crate::handlers::Reply;
use crate::options::FixtureOptions;
use crate::seed;

/// GET /api/order/menu - the pizza menu.
///
/// # Errors
///
/// None; the signature matches the other handlers.
pub fn menu(options: &FixtureOptions) -> Result<Reply, FixtureError> {
    let menu = options.menu.clone().unwrap_or_else(seed::default_menu);
    Ok(Reply::ok(json!(menu)))
}

/// GET /api/franchise - the franchise listing.
///
/// # Errors
///
/// None; the signature matches the other handlers.
pub fn franchise_list(options: &FixtureOptions) -> Result<Reply, FixtureError> {
    let list = options
        .franchise_list
        .clone()
        .unwrap_or_else(seed::default_franchise_list);
    Ok(Reply::ok(json!(list)))
}

/// GET /api/franchise/{id} - franchises for one franchisee.
///
/// Falls back to the franchise listing's entries when no per-franchisee
/// override is configured.
///
/// # Errors
///
/// None; the signature matches the other handlers.
pub fn franchise_by_id(options: &FixtureOptions) -> Result<Reply, FixtureError> {
    let franchises = options.franchises_by_user.clone().unwrap_or_else(|| {
        options
            .franchise_list
            .clone()
            .unwrap_or_else(seed::default_franchise_list)
            .franchises
    });
    Ok(Reply::ok(json!(franchises)))
}
