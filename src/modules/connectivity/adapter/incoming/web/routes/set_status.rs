use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use super::status::ConnectivityStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Host-pushed online/offline signal (the browser-event analog).
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetConnectivityRequest {
    pub online: bool,
}

/// Report an online/offline transition
#[utoipa::path(
    post,
    path = "/api/connectivity",
    tag = "connectivity",
    request_body = SetConnectivityRequest,
    responses(
        (status = 200, description = "Status recorded")
    )
)]
#[post("/api/connectivity")]
pub async fn set_connectivity_handler(
    req: web::Json<SetConnectivityRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let online = req.into_inner().online;
    if data.connectivity.set_online(online) {
        info!("Connectivity reported by host: online={}", online);
    }

    ApiResponse::success(ConnectivityStatus { online })
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_set_status_flips_monitor() {
        let state = TestAppStateBuilder::default().build().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(super::set_connectivity_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/connectivity")
            .set_json(json!({ "online": false }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(!state.connectivity.is_online());
    }
}
