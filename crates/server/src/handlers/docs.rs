//! API documentation handler.

use serde::Serialize;
use serde_json::json;

use pizza_fixture_core::MenuItem;

use crate::error::FixtureError;
use crate::handlers::Reply;
use crate::seed;

/// One documented endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsEndpoint {
    pub requires_auth: bool,
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub response: Vec<MenuItem>,
}

/// GET /api/docs - a fixed single-endpoint description document.
///
/// Always documents the default menu, even when a test overrides the menu
/// route itself.
///
/// # Errors
///
/// None; the signature matches the other handlers.
pub fn docs() -> Result<Reply, FixtureError> {
    let endpoints = vec![DocsEndpoint {
        requires_auth: false,
        method: "GET",
        path: "/api/order/menu",
        description: "Get menu",
        example: "curl /api/order/menu",
        response: seed::default_menu(),
    }];

    Ok(Reply::ok(json!({ "endpoints": endpoints })))
}
