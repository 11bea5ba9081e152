//! Integration tests for the JWT Pizza fixture service.
//!
//! Each test boots its own fixture on an ephemeral port and drives it over
//! real HTTP with `reqwest`, the way the UI under test would. Instances
//! share nothing: state questions (does deletion stick? does login persist?)
//! are answered per server, never across tests.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pizza-fixture-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use pizza_fixture_server::{FixtureOptions, FixtureRouter};

/// A fixture server bound to an ephemeral local port.
pub struct TestServer {
    base_url: String,
    client: reqwest::Client,
}

impl TestServer {
    /// Boot a fixture with the given overrides and wait until it accepts
    /// connections.
    ///
    /// # Panics
    ///
    /// Panics when no local port can be bound; tests cannot proceed without
    /// a server.
    pub async fn start(options: FixtureOptions) -> Self {
        let app = FixtureRouter::new(options).into_router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind an ephemeral port");
        let addr = listener.local_addr().expect("Listener has no local address");

        tokio::spawn(async move {
            // Ends when the test's runtime shuts down.
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    /// Boot a fixture with default options.
    pub async fn start_default() -> Self {
        Self::start(FixtureOptions::default()).await
    }

    /// Absolute URL for a fixture path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// The HTTP client for this server.
    #[must_use]
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
