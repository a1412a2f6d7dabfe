use actix_web::{patch, web, Responder};

use super::sync_error_response;
use crate::auth::adapter::incoming::web::extractors::operator::Operator;
use crate::content::application::domain::entities::ProfilePatch;
use crate::content::application::ports::incoming::content_api::ContentApi;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update the profile singleton
#[utoipa::path(
    patch,
    path = "/api/content/profile",
    tag = "content",
    responses(
        (status = 200, description = "Profile updated"),
        (status = 401, description = "Not authenticated"),
        (status = 503, description = "Offline")
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/content/profile")]
pub async fn update_profile_handler(
    _operator: Operator,
    req: web::Json<ProfilePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.update_profile(req.into_inner()).await {
        Ok(()) => ApiResponse::success(data.content.snapshot().profile),
        Err(e) => sync_error_response(e),
    }
}
