use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Token issued by the external identity service after a successful
/// credential check.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid identifier or secret")]
    InvalidCredentials,

    #[error("Identity provider unreachable: {0}")]
    Network(String),

    #[error("Identity provider error: {0}")]
    Provider(String),
}

/// External identity service. No self-service registration; the single
/// privileged identity is provisioned out of band.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<IssuedSession, IdentityError>;
}
