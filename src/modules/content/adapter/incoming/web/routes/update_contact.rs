use actix_web::{patch, web, Responder};

use super::sync_error_response;
use crate::auth::adapter::incoming::web::extractors::operator::Operator;
use crate::content::application::domain::entities::ContactInfoPatch;
use crate::content::application::ports::incoming::content_api::ContentApi;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update the contact singleton
#[utoipa::path(
    patch,
    path = "/api/content/contact",
    tag = "content",
    responses(
        (status = 200, description = "Contact info updated"),
        (status = 401, description = "Not authenticated"),
        (status = 503, description = "Offline")
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/content/contact")]
pub async fn update_contact_handler(
    _operator: Operator,
    req: web::Json<ContactInfoPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.update_contact_info(req.into_inner()).await {
        Ok(()) => ApiResponse::success(data.content.snapshot().contact_info),
        Err(e) => sync_error_response(e),
    }
}
