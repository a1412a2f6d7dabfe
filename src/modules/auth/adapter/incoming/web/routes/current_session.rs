use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Current session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (status = 200, description = "Session status", body = SessionResponse)
    )
)]
#[get("/api/auth/session")]
pub async fn current_session_handler(data: web::Data<AppState>) -> impl Responder {
    match data.auth.session() {
        Some(session) => ApiResponse::success(SessionResponse {
            authenticated: true,
            operator: Some(session.operator),
            expires_at: session.expires_at,
        }),
        None => ApiResponse::success(SessionResponse {
            authenticated: false,
            operator: None,
            expires_at: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::login_as_operator;

    #[actix_web::test]
    async fn test_session_reports_unauthenticated() {
        let state = TestAppStateBuilder::default().build().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(super::current_session_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/session").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["authenticated"], Value::Bool(false));
    }

    #[actix_web::test]
    async fn test_session_reports_operator_when_logged_in() {
        let state = TestAppStateBuilder::default().build().await;
        login_as_operator(&state.auth).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(super::current_session_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/session").to_request();
        let res = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["authenticated"], Value::Bool(true));
        assert_eq!(
            body["data"]["operator"],
            Value::String("owner@example.com".to_string())
        );
    }
}
