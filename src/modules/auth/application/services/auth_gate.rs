use std::sync::Arc;

use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::auth::application::domain::entities::Session;
use crate::auth::application::ports::outgoing::{
    identity_provider::{IdentityError, IdentityProvider},
    session_store::SessionStore,
};

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone, utoipa::ToSchema)]
pub struct LoginRequest {
    identifier: String, // Private - guaranteed valid
    secret: String,     // Private - guaranteed non-empty
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyIdentifier,
    InvalidIdentifierFormat,
    EmptySecret,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyIdentifier => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidIdentifierFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptySecret => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(identifier: String, secret: String) -> Result<Self, LoginRequestError> {
        let identifier = Self::validate_identifier(identifier)?;
        let secret = Self::validate_secret(secret)?;

        Ok(Self { identifier, secret })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    // ------------------------
    // Validation helpers
    // ------------------------

    fn validate_identifier(identifier: String) -> Result<String, LoginRequestError> {
        let identifier = identifier.trim();

        if identifier.is_empty() {
            return Err(LoginRequestError::EmptyIdentifier);
        }

        if !EmailAddress::is_valid(identifier) {
            return Err(LoginRequestError::InvalidIdentifierFormat);
        }

        Ok(identifier.to_lowercase())
    }

    fn validate_secret(secret: String) -> Result<String, LoginRequestError> {
        if secret.trim().is_empty() {
            return Err(LoginRequestError::EmptySecret);
        }

        Ok(secret)
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication service unreachable")]
    ProviderUnreachable,

    #[error("Login failed: {0}")]
    ProviderError(String),
}

// ========================= Auth Gate =============================

/// Owns the current operator session. Login delegates the credential check
/// to the external identity provider; the resulting session is published on
/// a watch channel so the sync layer and the route guard observe changes
/// without polling.
#[derive(Clone)]
pub struct AuthGate {
    inner: Arc<AuthGateInner>,
}

struct AuthGateInner {
    provider: Arc<dyn IdentityProvider>,
    sessions: Arc<dyn SessionStore>,
    current: watch::Sender<Option<Session>>,
}

impl AuthGate {
    /// Builds the gate, resuming a persisted session when one exists and has
    /// not expired.
    pub async fn new(
        provider: Arc<dyn IdentityProvider>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let restored = match sessions.load().await {
            Ok(Some(session)) if !session.is_expired() => {
                info!("Resumed persisted session for {}", session.operator);
                Some(session)
            }
            Ok(Some(_)) => {
                if let Err(e) = sessions.clear().await {
                    warn!("Failed to drop expired session: {}", e);
                }
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to restore persisted session: {}", e);
                None
            }
        };

        let (current, _) = watch::channel(restored);

        Self {
            inner: Arc::new(AuthGateInner {
                provider,
                sessions,
                current,
            }),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<Session, LoginError> {
        let issued = self
            .inner
            .provider
            .authenticate(request.identifier(), request.secret())
            .await
            .map_err(|e| match e {
                IdentityError::InvalidCredentials => LoginError::InvalidCredentials,
                IdentityError::Network(_) => LoginError::ProviderUnreachable,
                IdentityError::Provider(msg) => LoginError::ProviderError(msg),
            })?;

        let session = Session {
            token: issued.token,
            operator: request.identifier().to_string(),
            expires_at: issued.expires_at,
        };

        // Persistence failure must not undo a successful login.
        if let Err(e) = self.inner.sessions.save(&session).await {
            warn!("Failed to persist session: {}", e);
        }

        self.inner.current.send_replace(Some(session.clone()));
        info!("Operator {} logged in", session.operator);

        Ok(session)
    }

    pub async fn logout(&self) {
        if let Err(e) = self.inner.sessions.clear().await {
            warn!("Failed to clear persisted session: {}", e);
        }

        if let Some(session) = self.inner.current.send_replace(None) {
            info!("Operator {} logged out", session.operator);
        }
    }

    /// Current session, if any. Expired sessions count as absent.
    pub fn session(&self) -> Option<Session> {
        self.inner
            .current
            .borrow()
            .clone()
            .filter(|s| !s.is_expired())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.inner.current.subscribe()
    }
}
