use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use super::sync_error_response;
use crate::auth::adapter::incoming::web::extractors::operator::Operator;
use crate::content::application::domain::entities::ServiceDraft;
use crate::content::application::ports::incoming::content_api::ContentApi;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CreatedService {
    pub id: String,
}

/// Add a service
#[utoipa::path(
    post,
    path = "/api/content/services",
    tag = "content",
    request_body = ServiceDraft,
    responses(
        (status = 201, description = "Service created", body = CreatedService),
        (status = 401, description = "Not authenticated"),
        (status = 503, description = "Offline")
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/content/services")]
pub async fn add_service_handler(
    _operator: Operator,
    req: web::Json<ServiceDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.add_service(req.into_inner()).await {
        Ok(id) => ApiResponse::created(CreatedService { id }),
        Err(e) => sync_error_response(e),
    }
}
