use actix_web::{delete, web, Responder};

use super::sync_error_response;
use crate::auth::adapter::incoming::web::extractors::operator::Operator;
use crate::content::application::ports::incoming::content_api::ContentApi;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a service
#[utoipa::path(
    delete,
    path = "/api/content/services/{id}",
    tag = "content",
    params(("id" = String, Path, description = "Service document id")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 503, description = "Offline")
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/content/services/{id}")]
pub async fn delete_service_handler(
    _operator: Operator,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.delete_service(&id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => sync_error_response(e),
    }
}
