//! Authentication handlers: login, registration, logout, current session.

use serde::Deserialize;
use serde_json::json;

use pizza_fixture_core::{Credentialed, Role, User, UserId};

use crate::error::FixtureError;
use crate::handlers::{Intercepted, Reply};
use crate::seed::{AUTH_TOKEN, REGISTERED_USER_ID};
use crate::store::FixtureStore;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// PUT /api/auth - authenticate against seeded users, then registered users.
///
/// Success establishes the session and returns `{user, token}`. Failure
/// leaves the session untouched.
///
/// # Errors
///
/// [`FixtureError::Unauthorized`] when no record matches the credentials.
pub fn login(store: &mut FixtureStore, request: &Intercepted) -> Result<Reply, FixtureError> {
    let body: LoginRequest = request.json()?;

    let seeded = store
        .seeded_by_email(&body.email)
        .filter(|record| record.password == body.password)
        .map(|record| record.user.clone());

    let matched = seeded.or_else(|| {
        store
            .registered_by_email(&body.email)
            .filter(|record| record.password == body.password)
            .map(|record| record.user.clone())
    });

    match matched {
        Some(user) => {
            tracing::info!(email = %user.email, "Login succeeded");
            store.set_session(user.clone());
            Ok(Reply::ok(json!({ "user": user, "token": AUTH_TOKEN })))
        }
        None => {
            tracing::warn!(email = %body.email, "Login rejected");
            Err(FixtureError::Unauthorized)
        }
    }
}

/// POST /api/auth - register a new diner.
///
/// Always succeeds: no duplicate check, fixed id, diner role. The new user
/// becomes the session and is stored as a registered record so a later login
/// with the same credentials works.
///
/// # Errors
///
/// [`FixtureError::BadRequest`] when the body is not valid JSON.
pub fn register(store: &mut FixtureStore, request: &Intercepted) -> Result<Reply, FixtureError> {
    let body: RegisterRequest = request.json()?;

    let user = User {
        id: UserId::new(REGISTERED_USER_ID),
        name: body.name,
        email: body.email,
        roles: vec![Role::Diner],
    };

    tracing::info!(email = %user.email, "Registered new diner");
    store.upsert_registered(Credentialed {
        password: body.password,
        user: user.clone(),
    });
    store.set_session(user.clone());

    Ok(Reply::ok(json!({ "user": user, "token": AUTH_TOKEN })))
}

/// DELETE /api/auth - clear the session.
///
/// Never fails, even when already logged out.
///
/// # Errors
///
/// None; the signature matches the other handlers.
pub fn logout(store: &mut FixtureStore) -> Result<Reply, FixtureError> {
    store.clear_session();
    tracing::info!("Logged out");
    Ok(Reply::ok(json!({ "message": "ok" })))
}

/// GET /api/user/me - the session user, or `null` when anonymous.
///
/// # Errors
///
/// None; the signature matches the other handlers.
pub fn current_user(store: &FixtureStore) -> Result<Reply, FixtureError> {
    Ok(Reply::ok(json!(store.session())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};

    use super::*;
    use crate::seed::seeded_users;

    fn request(body: Value) -> Intercepted {
        Intercepted {
            method: Method::PUT,
            path: "/api/auth".to_string(),
            query: String::new(),
            body: body.to_string().into_bytes(),
            path_id: None,
        }
    }

    fn store() -> FixtureStore {
        FixtureStore::new(seeded_users())
    }

    #[test]
    fn test_login_seeded_user() {
        let mut store = store();
        let reply = login(
            &mut store,
            &request(json!({ "email": "d@jwt.com", "password": "a" })),
        )
        .unwrap();

        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body["token"], "abcdef");
        assert_eq!(reply.body["user"]["id"], 3);
        assert_eq!(reply.body["user"]["name"], "Kai Chen");
        assert!(reply.body["user"].get("password").is_none());
        assert_eq!(store.session().unwrap().email, "d@jwt.com");
    }

    #[test]
    fn test_login_wrong_password_leaves_session_unchanged() {
        let mut store = store();
        let err = login(
            &mut store,
            &request(json!({ "email": "d@jwt.com", "password": "wrong" })),
        )
        .unwrap_err();

        assert_eq!(err, FixtureError::Unauthorized);
        assert!(store.session().is_none());
    }

    #[test]
    fn test_login_unknown_email() {
        let mut store = store();
        let err = login(
            &mut store,
            &request(json!({ "email": "ghost@jwt.com", "password": "a" })),
        )
        .unwrap_err();
        assert_eq!(err, FixtureError::Unauthorized);
    }

    #[test]
    fn test_login_malformed_body() {
        let mut store = store();
        let mut bad = request(json!({}));
        bad.body = b"not json".to_vec();
        assert_eq!(login(&mut store, &bad).unwrap_err(), FixtureError::BadRequest);
    }

    #[test]
    fn test_register_then_login_via_registered_record() {
        let mut store = store();
        let reply = register(
            &mut store,
            &request(json!({ "name": "New User", "email": "new@jwt.com", "password": "pw" })),
        )
        .unwrap();

        assert_eq!(reply.body["user"]["id"], 42);
        assert_eq!(reply.body["user"]["roles"], json!([{ "role": "diner" }]));
        assert_eq!(store.session().unwrap().email, "new@jwt.com");

        store.clear_session();
        let reply = login(
            &mut store,
            &request(json!({ "email": "new@jwt.com", "password": "pw" })),
        )
        .unwrap();
        assert_eq!(reply.body["user"]["name"], "New User");
    }

    #[test]
    fn test_seeded_credentials_shadow_registered_ones() {
        let mut store = store();
        register(
            &mut store,
            &request(json!({ "name": "Imposter", "email": "d@jwt.com", "password": "b" })),
        )
        .unwrap();

        // The seed record still wins for its own password.
        let reply = login(
            &mut store,
            &request(json!({ "email": "d@jwt.com", "password": "a" })),
        )
        .unwrap();
        assert_eq!(reply.body["user"]["name"], "Kai Chen");

        // And the registered record answers for its password.
        let reply = login(
            &mut store,
            &request(json!({ "email": "d@jwt.com", "password": "b" })),
        )
        .unwrap();
        assert_eq!(reply.body["user"]["name"], "Imposter");
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut store = store();
        let reply = logout(&mut store).unwrap();
        assert_eq!(reply.body, json!({ "message": "ok" }));

        store.set_session(seeded_users()[0].user.clone());
        logout(&mut store).unwrap();
        assert!(store.session().is_none());
    }

    #[test]
    fn test_current_user_null_when_anonymous() {
        let store = store();
        let reply = current_user(&store).unwrap();
        assert_eq!(reply.body, Value::Null);
    }

    #[test]
    fn test_current_user_returns_session_verbatim() {
        let mut store = store();
        let user = seeded_users()[2].user.clone();
        store.set_session(user.clone());

        let reply = current_user(&store).unwrap();
        assert_eq!(reply.body, serde_json::to_value(&user).unwrap());
    }
}
