//! User management handlers: listing, update, logical delete.

use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use pizza_fixture_core::{Credentialed, Role, User, UserId};

use crate::error::FixtureError;
use crate::handlers::{Intercepted, Reply};
use crate::seed::{AUTH_TOKEN, REGISTERED_USER_ID};
use crate::store::FixtureStore;

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 10;

/// Update request body. Every field is optional; omitted fields fall back to
/// the current session.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub roles: Option<Vec<Role>>,
}

/// GET /api/user?page=&limit=&name= - list non-deleted users.
///
/// Filters by a `*`-wildcard pattern over name or email, then paginates.
/// `more` reports whether records exist beyond the returned page.
///
/// # Errors
///
/// None; unparseable paging parameters fall back to their defaults.
pub fn list(store: &FixtureStore, request: &Intercepted) -> Result<Reply, FixtureError> {
    let page = parse_or(request.query_param("page"), DEFAULT_PAGE);
    let limit = parse_or(request.query_param("limit"), DEFAULT_LIMIT);
    let name_filter = request
        .query_param("name")
        .unwrap_or_else(|| "*".to_string());

    let all = store.list_users();
    let filtered: Vec<User> = match compile_wildcard(&name_filter) {
        Some(pattern) => all
            .into_iter()
            .filter(|u| pattern.is_match(&u.name) || pattern.is_match(&u.email))
            .collect(),
        None => all,
    };

    let start = page.saturating_sub(1).saturating_mul(limit);
    let users: Vec<&User> = filtered.iter().skip(start).take(limit).collect();
    let more = start + users.len() < filtered.len();

    Ok(Reply::ok(json!({ "users": users, "more": more })))
}

/// PUT /api/user/{id} - merge submitted fields onto the session.
///
/// Precedence per field: submitted value, else prior session value, else a
/// fixed default. The merged user becomes the session, and a registered
/// record under the affected email is updated to match.
///
/// # Errors
///
/// [`FixtureError::BadRequest`] when the body is not valid JSON.
pub fn update(store: &mut FixtureStore, request: &Intercepted) -> Result<Reply, FixtureError> {
    let body: UpdateUserRequest = request.json()?;
    let prior = store.session().cloned();

    let merged = User {
        id: body
            .id
            .map(UserId::new)
            .or(prior.as_ref().map(|u| u.id))
            .unwrap_or(UserId::new(REGISTERED_USER_ID)),
        name: body
            .name
            .or(prior.as_ref().map(|u| u.name.clone()))
            .unwrap_or_default(),
        email: body
            .email
            .or(prior.as_ref().map(|u| u.email.clone()))
            .unwrap_or_default(),
        roles: body
            .roles
            .or(prior.map(|u| u.roles))
            .unwrap_or_else(|| vec![Role::Diner]),
    };

    store.set_session(merged.clone());

    let stored_password = store
        .registered_by_email(&merged.email)
        .map(|record| record.password.clone());
    if let Some(stored) = stored_password {
        tracing::debug!(email = %merged.email, "Updating registered record");
        store.upsert_registered(Credentialed {
            password: body.password.unwrap_or(stored),
            user: merged.clone(),
        });
    }

    Ok(Reply::ok(json!({ "user": merged, "token": AUTH_TOKEN })))
}

/// DELETE /api/user/{id} - logically delete a user.
///
/// The id joins the deleted set; records are never physically removed and
/// the session is left alone even when it names the deleted id.
///
/// # Errors
///
/// [`FixtureError::BadRequest`] when the route carries no numeric id; the
/// matcher always supplies one.
pub fn delete(store: &mut FixtureStore, request: &Intercepted) -> Result<Reply, FixtureError> {
    let id = request.path_id.ok_or(FixtureError::BadRequest)?;
    tracing::info!(user_id = id, "Deleting user");
    store.mark_deleted(UserId::new(id));
    Ok(Reply::ok(json!({ "message": "ok" })))
}

fn parse_or(value: Option<String>, default: usize) -> usize {
    value
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

/// Compile a `*`-wildcard filter into a case-insensitive, unanchored regex.
///
/// Literal segments are escaped, so only `*` is special. `*` alone (or an
/// empty filter) means no filtering.
fn compile_wildcard(filter: &str) -> Option<Regex> {
    if filter.is_empty() || filter == "*" {
        return None;
    }

    let pattern = filter
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    Regex::new(&format!("(?i){pattern}")).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::Method;
    use serde_json::{Value, json};

    use super::*;
    use crate::seed::seeded_users;

    fn list_request(query: &str) -> Intercepted {
        Intercepted {
            method: Method::GET,
            path: "/api/user".to_string(),
            query: query.to_string(),
            body: Vec::new(),
            path_id: None,
        }
    }

    fn update_request(body: Value) -> Intercepted {
        Intercepted {
            method: Method::PUT,
            path: "/api/user/42".to_string(),
            query: String::new(),
            body: body.to_string().into_bytes(),
            path_id: Some(42),
        }
    }

    fn names(reply: &Reply) -> Vec<String> {
        reply.body["users"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["name"].as_str().unwrap().to_string())
            .collect()
    }

    fn store() -> FixtureStore {
        FixtureStore::new(seeded_users())
    }

    #[test]
    fn test_list_defaults_return_all_seeded_users() {
        let reply = list(&store(), &list_request("page=1")).unwrap();
        assert_eq!(names(&reply), ["Kai Chen", "Fran Chisee", "Admin User"]);
        assert_eq!(reply.body["more"], false);
    }

    #[test]
    fn test_list_filter_matches_name_or_email_case_insensitively() {
        let store = store();

        let reply = list(&store, &list_request("page=1&name=kai")).unwrap();
        assert_eq!(names(&reply), ["Kai Chen"]);

        // f@jwt.com matches on email even though the name does not.
        let reply = list(&store, &list_request("page=1&name=F%40jwt")).unwrap();
        assert_eq!(names(&reply), ["Fran Chisee"]);

        let reply = list(&store, &list_request("page=1&name=*Chi*")).unwrap();
        assert_eq!(names(&reply), ["Fran Chisee"]);
    }

    #[test]
    fn test_list_star_filter_means_everyone() {
        let reply = list(&store(), &list_request("page=1&name=*")).unwrap();
        assert_eq!(names(&reply).len(), 3);
    }

    #[test]
    fn test_list_filter_escapes_regex_metacharacters() {
        let reply = list(&store(), &list_request("page=1&name=d%40jwt.com")).unwrap();
        assert_eq!(names(&reply), ["Kai Chen"]);

        // A dot is a literal dot, not "any character".
        let reply = list(&store(), &list_request("page=1&name=d%40jwtXcom")).unwrap();
        assert!(names(&reply).is_empty());
    }

    #[test]
    fn test_list_pagination_and_more_flag() {
        let store = store();

        let reply = list(&store, &list_request("page=1&limit=2")).unwrap();
        assert_eq!(names(&reply), ["Kai Chen", "Fran Chisee"]);
        assert_eq!(reply.body["more"], true);

        let reply = list(&store, &list_request("page=2&limit=2")).unwrap();
        assert_eq!(names(&reply), ["Admin User"]);
        assert_eq!(reply.body["more"], false);

        let reply = list(&store, &list_request("page=3&limit=2")).unwrap();
        assert!(names(&reply).is_empty());
        assert_eq!(reply.body["more"], false);
    }

    #[test]
    fn test_list_unparseable_paging_falls_back_to_defaults() {
        let reply = list(&store(), &list_request("page=abc&limit=nope")).unwrap();
        assert_eq!(names(&reply).len(), 3);
    }

    #[test]
    fn test_deleted_users_never_appear() {
        let mut store = store();
        delete(
            &mut store,
            &Intercepted {
                method: Method::DELETE,
                path: "/api/user/3".to_string(),
                query: String::new(),
                body: Vec::new(),
                path_id: Some(3),
            },
        )
        .unwrap();

        let reply = list(&store, &list_request("page=1")).unwrap();
        assert_eq!(names(&reply), ["Fran Chisee", "Admin User"]);

        // Not even a matching filter resurrects them.
        let reply = list(&store, &list_request("page=1&name=Kai")).unwrap();
        assert!(names(&reply).is_empty());
    }

    #[test]
    fn test_update_merges_only_submitted_fields() {
        let mut store = store();
        store.set_session(seeded_users()[0].user.clone());

        let reply = update(
            &mut store,
            &update_request(json!({ "id": 3, "name": "Kai Updated" })),
        )
        .unwrap();

        assert_eq!(reply.body["user"]["name"], "Kai Updated");
        assert_eq!(reply.body["user"]["email"], "d@jwt.com");
        assert_eq!(reply.body["user"]["roles"], json!([{ "role": "diner" }]));
        assert_eq!(reply.body["token"], "abcdef");
        assert_eq!(store.session().unwrap().name, "Kai Updated");
    }

    #[test]
    fn test_update_without_session_uses_named_defaults() {
        let mut store = store();
        let reply = update(&mut store, &update_request(json!({ "name": "Ghost" }))).unwrap();

        assert_eq!(reply.body["user"]["id"], 42);
        assert_eq!(reply.body["user"]["email"], "");
        assert_eq!(reply.body["user"]["roles"], json!([{ "role": "diner" }]));
    }

    #[test]
    fn test_update_rewrites_registered_record_and_password() {
        let mut store = store();
        store.upsert_registered(Credentialed {
            password: "old".to_string(),
            user: User {
                id: UserId::new(42),
                name: "Reg".to_string(),
                email: "reg@jwt.com".to_string(),
                roles: vec![Role::Diner],
            },
        });
        let registered = store.registered_by_email("reg@jwt.com").unwrap().user.clone();
        store.set_session(registered);

        update(
            &mut store,
            &update_request(json!({ "name": "Reg Two", "password": "new" })),
        )
        .unwrap();

        let record = store.registered_by_email("reg@jwt.com").unwrap();
        assert_eq!(record.user.name, "Reg Two");
        assert_eq!(record.password, "new");

        // Omitting the password keeps the stored one.
        update(&mut store, &update_request(json!({ "name": "Reg Three" }))).unwrap();
        let record = store.registered_by_email("reg@jwt.com").unwrap();
        assert_eq!(record.user.name, "Reg Three");
        assert_eq!(record.password, "new");
    }

    #[test]
    fn test_delete_does_not_clear_a_matching_session() {
        let mut store = store();
        store.set_session(seeded_users()[0].user.clone());

        delete(
            &mut store,
            &Intercepted {
                method: Method::DELETE,
                path: "/api/user/3".to_string(),
                query: String::new(),
                body: Vec::new(),
                path_id: Some(3),
            },
        )
        .unwrap();

        assert!(store.is_deleted(UserId::new(3)));
        assert_eq!(store.session().unwrap().id, UserId::new(3));
    }
}
