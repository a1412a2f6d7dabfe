use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;

use super::token_claims::token_expiry;
use crate::auth::application::ports::outgoing::identity_provider::{
    IdentityError, IdentityProvider, IssuedSession,
};

#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub base_url: String,
    pub api_key: String,
}

impl IdentityConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("IDENTITY_URL").expect("IDENTITY_URL is not set in .env file"),
            api_key: env::var("IDENTITY_API_KEY")
                .expect("IDENTITY_API_KEY is not set in .env file"),
        }
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// REST client for the external identity service. One endpoint: exchange
/// `(identifier, secret)` for a session token.
#[derive(Clone)]
pub struct RestIdentityProvider {
    http: reqwest::Client,
    config: IdentityConfig,
}

impl RestIdentityProvider {
    pub fn new(http: reqwest::Client, config: IdentityConfig) -> Self {
        Self { http, config }
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    identifier: &'a str,
    secret: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<IssuedSession, IdentityError> {
        let url = format!("{}/v1/token", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(&TokenRequest { identifier, secret })
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(IdentityError::InvalidCredentials);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::Provider(format!("{}: {}", status, body)));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::Provider(e.to_string()))?;

        let expires_at = token_expiry(&body.token);

        Ok(IssuedSession {
            token: body.token,
            expires_at,
        })
    }
}
