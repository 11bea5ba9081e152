//! Per-route handlers.
//!
//! A handler is a plain function from (request view, store, overrides) to a
//! canned JSON [`Reply`]. Handlers run synchronously and to completion while
//! holding the store; the async boundary lives in the router, not here.

pub mod auth;
pub mod catalog;
pub mod docs;
pub mod orders;
pub mod users;

use axum::Json;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FixtureError;
use crate::matcher::{Endpoint, query_param};
use crate::options::FixtureOptions;
use crate::store::FixtureStore;

/// The parts of an intercepted request a handler can see.
#[derive(Debug, Clone)]
pub struct Intercepted {
    /// Request verb.
    pub method: Method,
    /// Request path, no query string.
    pub path: String,
    /// Raw query string, without the leading `?`.
    pub query: String,
    /// Raw request body.
    pub body: Vec<u8>,
    /// Numeric id captured from the path, for `{id}` routes.
    pub path_id: Option<i64>,
}

impl Intercepted {
    /// Deserialize the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::BadRequest`] when the body is not the JSON the
    /// route expects, so the caller still observes a well-formed failure.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FixtureError> {
        serde_json::from_slice(&self.body).map_err(|err| {
            tracing::debug!(path = %self.path, error = %err, "Rejecting malformed body");
            FixtureError::BadRequest
        })
    }

    /// First value of the named query parameter, percent-decoded.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<String> {
        query_param(&self.query, key)
    }
}

/// A canned JSON response.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    /// A 200 reply with the given JSON body.
    #[must_use]
    pub const fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    /// A reply with an explicit status.
    #[must_use]
    pub const fn with_status(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Run the handler for a matched endpoint.
///
/// Errors are folded into replies here so every declared route fulfills the
/// interception, success or failure.
pub fn dispatch(
    endpoint: Endpoint,
    request: &Intercepted,
    store: &mut FixtureStore,
    options: &FixtureOptions,
) -> Reply {
    let result = match endpoint {
        Endpoint::Login => auth::login(store, request),
        Endpoint::Register => auth::register(store, request),
        Endpoint::Logout => auth::logout(store),
        Endpoint::CurrentUser => auth::current_user(store),
        Endpoint::ListUsers => users::list(store, request),
        Endpoint::UpdateUser => users::update(store, request),
        Endpoint::DeleteUser => users::delete(store, request),
        Endpoint::Menu => catalog::menu(options),
        Endpoint::FranchiseList => catalog::franchise_list(options),
        Endpoint::FranchiseById => catalog::franchise_by_id(options),
        Endpoint::OrderHistory => orders::history(store, options),
        Endpoint::SubmitOrder => orders::submit(request),
        Endpoint::VerifyOrder => orders::verify(),
        Endpoint::Docs => docs::docs(),
        Endpoint::MethodNotAllowed => Err(FixtureError::MethodNotAllowed),
    };

    result.unwrap_or_else(FixtureError::into_reply)
}
