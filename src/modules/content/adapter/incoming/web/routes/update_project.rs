use actix_web::{patch, web, Responder};

use super::sync_error_response;
use crate::auth::adapter::incoming::web::extractors::operator::Operator;
use crate::content::application::domain::entities::ProjectPatch;
use crate::content::application::ports::incoming::content_api::ContentApi;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a project
#[utoipa::path(
    patch,
    path = "/api/content/projects/{id}",
    tag = "content",
    params(("id" = String, Path, description = "Project document id")),
    responses(
        (status = 200, description = "Project updated"),
        (status = 401, description = "Not authenticated"),
        (status = 503, description = "Offline")
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/content/projects/{id}")]
pub async fn update_project_handler(
    _operator: Operator,
    path: web::Path<String>,
    req: web::Json<ProjectPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.update_project(&id, req.into_inner()).await {
        Ok(()) => ApiResponse::success(data.content.snapshot().projects),
        Err(e) => sync_error_response(e),
    }
}
