use std::sync::Arc;

use crate::auth::application::services::auth_gate::{AuthGate, LoginRequest};
use crate::tests::support::stubs::{MemorySessionStore, StubIdentityProvider};

/// A gate with no active session, backed by a stub provider that would
/// accept the standard test operator.
pub async fn anonymous_gate() -> AuthGate {
    AuthGate::new(
        Arc::new(StubIdentityProvider::issuing("test-token")),
        Arc::new(MemorySessionStore::default()),
    )
    .await
}

pub async fn authenticated_gate() -> AuthGate {
    let gate = anonymous_gate().await;
    login_as_operator(&gate).await;
    gate
}

/// Logs the standard test operator in and returns the bearer token.
pub async fn login_as_operator(gate: &AuthGate) -> String {
    let request =
        LoginRequest::new("owner@example.com".to_string(), "secret123".to_string()).unwrap();

    gate.login(request)
        .await
        .expect("stub login should succeed")
        .token
}
