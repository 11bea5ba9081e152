//! Composition root: wires the store, rule table, and handlers into an axum
//! service.
//!
//! The fixture deliberately does not use axum's per-path routing for the API
//! surface: requests land in a single fallback handler that walks the
//! ordered rule table, so matching policy (first declared wins, unmatched
//! falls through) stays in one place and under test.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, Intercepted, Reply};
use crate::matcher;
use crate::options::FixtureOptions;
use crate::state::FixtureState;

/// Largest request body the fixture will read.
const BODY_LIMIT: usize = 1 << 20;

/// The fixture router: a programmable stand-in for the JWT Pizza backend.
pub struct FixtureRouter {
    state: FixtureState,
}

impl FixtureRouter {
    /// Build a fixture over fresh state with the given overrides.
    #[must_use]
    pub fn new(options: FixtureOptions) -> Self {
        Self {
            state: FixtureState::new(options),
        }
    }

    /// Turn the fixture into a servable axum router.
    ///
    /// CORS is wide open: the UI under test runs on another origin.
    #[must_use]
    pub fn into_router(self) -> Router {
        Router::new()
            .route("/health", get(health))
            .fallback(intercept)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state)
    }
}

impl Default for FixtureRouter {
    fn default() -> Self {
        Self::new(FixtureOptions::default())
    }
}

/// Liveness check, outside the rule table.
async fn health() -> &'static str {
    "ok"
}

/// Intercept one request: match it against the rule table and dispatch, or
/// let it fall through.
async fn intercept(State(state): State<FixtureState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let path = parts.uri.path().to_string();
    let query = parts.uri.query().unwrap_or("").to_string();

    let body = match axum::body::to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) => bytes.to_vec(),
        Err(err) => {
            tracing::debug!(%path, error = %err, "Failed to read request body");
            return Reply::with_status(
                StatusCode::BAD_REQUEST,
                json!({ "message": "bad request" }),
            )
            .into_response();
        }
    };

    let Some(matched) = matcher::match_request(&parts.method, &path, &query) else {
        // No rule claims the request: the standalone rendition of letting it
        // fall through to the real network.
        tracing::debug!(method = %parts.method, %path, "Unmatched request");
        return Reply::with_status(StatusCode::NOT_FOUND, json!({ "message": "unmatched" }))
            .into_response();
    };

    let intercepted = Intercepted {
        method: parts.method,
        path,
        query,
        body,
        path_id: matched.path_id,
    };

    let mut store = state.store();
    handlers::dispatch(matched.endpoint, &intercepted, &mut store, state.options()).into_response()
}
