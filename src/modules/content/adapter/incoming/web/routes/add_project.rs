use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use super::sync_error_response;
use crate::auth::adapter::incoming::web::extractors::operator::Operator;
use crate::content::application::domain::entities::ProjectDraft;
use crate::content::application::ports::incoming::content_api::ContentApi;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CreatedProject {
    /// Server-generated document id.
    pub id: String,
}

/// Add a project
#[utoipa::path(
    post,
    path = "/api/content/projects",
    tag = "content",
    request_body = ProjectDraft,
    responses(
        (status = 201, description = "Project created", body = CreatedProject),
        (status = 401, description = "Not authenticated"),
        (status = 503, description = "Offline")
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/content/projects")]
pub async fn add_project_handler(
    _operator: Operator,
    req: web::Json<ProjectDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.add_project(req.into_inner()).await {
        Ok(id) => ApiResponse::created(CreatedProject { id }),
        Err(e) => sync_error_response(e),
    }
}
