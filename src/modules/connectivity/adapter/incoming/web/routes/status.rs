use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ConnectivityStatus {
    pub online: bool,
}

/// Current connectivity status
#[utoipa::path(
    get,
    path = "/api/connectivity",
    tag = "connectivity",
    responses(
        (status = 200, description = "Current online/offline status")
    )
)]
#[get("/api/connectivity")]
pub async fn connectivity_status_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(ConnectivityStatus {
        online: data.connectivity.is_online(),
    })
}
