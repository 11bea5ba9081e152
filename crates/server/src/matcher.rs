//! Route matching: an ordered rule table, first declared match wins.
//!
//! Each rule is a predicate over (method, path, query string) paired with the
//! endpoint that handles it. Patterns are a closed set of match kinds - exact
//! path, numeric-id path suffix, query-parameter presence - so matching is
//! total: a request either hits a rule or falls through to the unmatched
//! response, never an error.
//!
//! Unsupported verbs on declared routes are ordinary low-priority rules
//! mapping to [`Endpoint::MethodNotAllowed`], so the 405 policy lives in this
//! table rather than inside each handler.

use std::sync::LazyLock;

use axum::http::Method;
use regex::Regex;

static USER_BY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/api/user/(\d+)$").expect("static pattern is valid"));

static FRANCHISE_BY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/api/franchise/(\d+)$").expect("static pattern is valid"));

/// Every handler the fixture knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    Logout,
    CurrentUser,
    ListUsers,
    UpdateUser,
    DeleteUser,
    Menu,
    VerifyOrder,
    OrderHistory,
    SubmitOrder,
    FranchiseById,
    FranchiseList,
    Docs,
    /// The verb is not implemented on an otherwise-declared route.
    MethodNotAllowed,
}

/// Method predicate for a rule.
#[derive(Debug, Clone)]
pub enum MethodRule {
    /// Matches any verb.
    Any,
    /// Matches exactly one verb.
    Exact(Method),
}

/// Path predicate for a rule.
#[derive(Debug, Clone)]
pub enum PathPattern {
    /// The path equals this string.
    Exact(&'static str),
    /// The path is a known prefix followed by one numeric id segment; the id
    /// is captured for the handler.
    NumericId(&'static LazyLock<Regex>),
}

/// Query-string predicate for a rule.
#[derive(Debug, Clone)]
pub enum QueryRule {
    /// Matches any query string, including none.
    Any,
    /// Matches only when the named query parameter is present.
    HasParam(&'static str),
}

/// One row of the routing table.
#[derive(Debug, Clone)]
pub struct RouteRule {
    pub method: MethodRule,
    pub path: PathPattern,
    pub query: QueryRule,
    pub endpoint: Endpoint,
}

/// A matched rule: which handler, plus the captured path id when the pattern
/// carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch {
    pub endpoint: Endpoint,
    pub path_id: Option<i64>,
}

impl RouteRule {
    const fn new(
        method: MethodRule,
        path: PathPattern,
        query: QueryRule,
        endpoint: Endpoint,
    ) -> Self {
        Self {
            method,
            path,
            query,
            endpoint,
        }
    }

    fn matches(&self, method: &Method, path: &str, query: &str) -> Option<RouteMatch> {
        match &self.method {
            MethodRule::Any => {}
            MethodRule::Exact(expected) => {
                if method != expected {
                    return None;
                }
            }
        }

        match &self.query {
            QueryRule::Any => {}
            QueryRule::HasParam(key) => {
                if !has_query_param(query, key) {
                    return None;
                }
            }
        }

        let path_id = match &self.path {
            PathPattern::Exact(expected) => {
                if path != *expected {
                    return None;
                }
                None
            }
            PathPattern::NumericId(pattern) => {
                let captures = pattern.captures(path)?;
                Some(captures.get(1)?.as_str().parse::<i64>().ok()?)
            }
        };

        Some(RouteMatch {
            endpoint: self.endpoint,
            path_id,
        })
    }
}

/// The routing table, evaluated top to bottom.
#[must_use]
pub fn rules() -> &'static [RouteRule] {
    use Endpoint::*;
    use MethodRule::{Any, Exact};

    static RULES: LazyLock<Vec<RouteRule>> = LazyLock::new(|| {
        vec![
            RouteRule::new(
                Exact(Method::PUT),
                PathPattern::Exact("/api/auth"),
                QueryRule::Any,
                Login,
            ),
            RouteRule::new(
                Exact(Method::POST),
                PathPattern::Exact("/api/auth"),
                QueryRule::Any,
                Register,
            ),
            RouteRule::new(
                Exact(Method::DELETE),
                PathPattern::Exact("/api/auth"),
                QueryRule::Any,
                Logout,
            ),
            RouteRule::new(
                Any,
                PathPattern::Exact("/api/auth"),
                QueryRule::Any,
                MethodNotAllowed,
            ),
            RouteRule::new(
                Any,
                PathPattern::Exact("/api/user/me"),
                QueryRule::Any,
                CurrentUser,
            ),
            RouteRule::new(
                Exact(Method::GET),
                PathPattern::Exact("/api/user"),
                QueryRule::HasParam("page"),
                ListUsers,
            ),
            RouteRule::new(
                Any,
                PathPattern::Exact("/api/user"),
                QueryRule::HasParam("page"),
                MethodNotAllowed,
            ),
            RouteRule::new(
                Exact(Method::PUT),
                PathPattern::NumericId(&USER_BY_ID),
                QueryRule::Any,
                UpdateUser,
            ),
            RouteRule::new(
                Exact(Method::DELETE),
                PathPattern::NumericId(&USER_BY_ID),
                QueryRule::Any,
                DeleteUser,
            ),
            RouteRule::new(
                Any,
                PathPattern::NumericId(&USER_BY_ID),
                QueryRule::Any,
                MethodNotAllowed,
            ),
            RouteRule::new(
                Any,
                PathPattern::Exact("/api/order/menu"),
                QueryRule::Any,
                Menu,
            ),
            RouteRule::new(
                Any,
                PathPattern::Exact("/api/order/verify"),
                QueryRule::Any,
                VerifyOrder,
            ),
            RouteRule::new(
                Exact(Method::GET),
                PathPattern::Exact("/api/order"),
                QueryRule::Any,
                OrderHistory,
            ),
            RouteRule::new(
                Exact(Method::POST),
                PathPattern::Exact("/api/order"),
                QueryRule::Any,
                SubmitOrder,
            ),
            RouteRule::new(
                Any,
                PathPattern::Exact("/api/order"),
                QueryRule::Any,
                MethodNotAllowed,
            ),
            RouteRule::new(
                Any,
                PathPattern::NumericId(&FRANCHISE_BY_ID),
                QueryRule::Any,
                FranchiseById,
            ),
            RouteRule::new(
                Any,
                PathPattern::Exact("/api/franchise"),
                QueryRule::Any,
                FranchiseList,
            ),
            RouteRule::new(
                Any,
                PathPattern::Exact("/api/docs"),
                QueryRule::Any,
                Docs,
            ),
        ]
    });

    &RULES
}

/// Match a request against the table. `None` means no rule claimed it and
/// the request falls through.
#[must_use]
pub fn match_request(method: &Method, path: &str, query: &str) -> Option<RouteMatch> {
    rules()
        .iter()
        .find_map(|rule| rule.matches(method, path, query))
}

/// Whether the query string carries the named parameter.
#[must_use]
pub fn has_query_param(query: &str, key: &str) -> bool {
    url::form_urlencoded::parse(query.as_bytes()).any(|(k, _)| k == key)
}

/// First value of the named query parameter, percent-decoded.
#[must_use]
pub fn query_param(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
