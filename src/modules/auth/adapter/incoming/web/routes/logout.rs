use actix_web::{post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::operator::Operator;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Operator logout
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 204, description = "Session ended"),
        (status = 401, description = "No active session")
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(_operator: Operator, data: web::Data<AppState>) -> impl Responder {
    data.auth.logout().await;
    ApiResponse::no_content()
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::login_as_operator;

    #[actix_web::test]
    async fn test_logout_requires_session() {
        let state = TestAppStateBuilder::default().build().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(super::logout_handler),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_logout_ends_session() {
        let state = TestAppStateBuilder::default().build().await;
        let token = login_as_operator(&state.auth).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(super::logout_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(!state.auth.is_authenticated());
    }
}
