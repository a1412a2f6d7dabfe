use actix_web::{get, web, Responder};

use crate::content::application::ports::incoming::content_api::ContentApi;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Full content state
///
/// The mirrored content plus sync flags, readable by any visitor.
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses(
        (status = 200, description = "Current content state",
         body = crate::content::application::ports::incoming::content_api::ContentState)
    )
)]
#[get("/api/content")]
pub async fn get_content_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.snapshot())
}
