use actix_web::{patch, web, Responder};

use super::sync_error_response;
use crate::auth::adapter::incoming::web::extractors::operator::Operator;
use crate::content::application::domain::entities::ServicePatch;
use crate::content::application::ports::incoming::content_api::ContentApi;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a service
#[utoipa::path(
    patch,
    path = "/api/content/services/{id}",
    tag = "content",
    params(("id" = String, Path, description = "Service document id")),
    responses(
        (status = 200, description = "Service updated"),
        (status = 401, description = "Not authenticated"),
        (status = 503, description = "Offline")
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/content/services/{id}")]
pub async fn update_service_handler(
    _operator: Operator,
    path: web::Path<String>,
    req: web::Json<ServicePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.update_service(&id, req.into_inner()).await {
        Ok(()) => ApiResponse::success(data.content.snapshot().services),
        Err(e) => sync_error_response(e),
    }
}
