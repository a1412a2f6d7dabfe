use async_trait::async_trait;

use crate::auth::application::domain::entities::Session;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session storage error: {0}")]
    Io(String),
}

/// Platform session persistence: keeps the operator session across service
/// restarts. Losing it is an inconvenience, not a failure, so the gate
/// treats every error here as non-fatal.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Option<Session>, SessionStoreError>;

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    async fn clear(&self) -> Result<(), SessionStoreError>;
}
