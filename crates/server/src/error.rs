//! Handler error taxonomy.
//!
//! Every failure leaves the fixture as a status-bearing `{message}` JSON
//! body. Handlers never panic and never reject a request at the transport
//! level; a caller always observes a normal failed-request flow.

use axum::http::StatusCode;
use thiserror::Error;

use crate::handlers::Reply;

/// Failures a handler can produce.
///
/// Absent data (no session, no registration) is not an error: handlers
/// represent it as `null` or an empty value in a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// Login credentials did not match a seeded or registered user.
    #[error("Unauthorized")]
    Unauthorized,

    /// The verb is not implemented on a declared route.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request body was not the JSON the route expects.
    #[error("bad request")]
    BadRequest,
}

impl FixtureError {
    /// HTTP status this error responds with.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
        }
    }

    /// Render as a `{message}` reply.
    #[must_use]
    pub fn into_reply(self) -> Reply {
        Reply::with_status(self.status(), serde_json::json!({ "message": self.to_string() }))
    }
}
