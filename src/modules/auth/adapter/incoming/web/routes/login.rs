use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::auth::application::services::auth_gate::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Session token to present as `Authorization: Bearer <token>`.
    pub token: String,

    /// Email of the logged-in operator.
    #[schema(example = "owner@example.com")]
    pub operator: String,

    pub expires_at: Option<DateTime<Utc>>,
}

/// Operator login
///
/// Exchanges the operator's email and password for a session token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 503, description = "Identity provider unreachable")
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.login(req.into_inner()).await {
        Ok(session) => ApiResponse::success(LoginResponse {
            token: session.token,
            operator: session.operator,
            expires_at: session.expires_at,
        }),

        Err(LoginError::InvalidCredentials) => {
            warn!("Login rejected: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::ProviderUnreachable) => ApiResponse::error(
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
            "AUTH_PROVIDER_UNREACHABLE",
            "Authentication service unreachable",
        ),

        Err(LoginError::ProviderError(e)) => {
            error!("Identity provider error during login: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::auth::application::ports::outgoing::identity_provider::IdentityError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubIdentityProvider;

    #[actix_web::test]
    async fn test_login_success_returns_token() {
        let state = TestAppStateBuilder::default()
            .with_identity_provider(StubIdentityProvider::issuing("tok-123"))
            .build()
            .await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(super::login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "owner@example.com", "password": "secret123" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["token"], Value::String("tok-123".to_string()));
        assert_eq!(
            body["data"]["operator"],
            Value::String("owner@example.com".to_string())
        );
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials_is_401() {
        let state = TestAppStateBuilder::default()
            .with_identity_provider(StubIdentityProvider::failing(
                IdentityError::InvalidCredentials,
            ))
            .build()
            .await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(super::login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "owner@example.com", "password": "wrong" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_login_provider_unreachable_is_503() {
        let state = TestAppStateBuilder::default()
            .with_identity_provider(StubIdentityProvider::failing(IdentityError::Network(
                "timed out".to_string(),
            )))
            .build()
            .await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(super::login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "owner@example.com", "password": "secret123" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_login_malformed_email_is_400() {
        let state = TestAppStateBuilder::default().build().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .app_data(crate::shared::api::custom_json_config())
                .service(super::login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "nope", "password": "secret123" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
