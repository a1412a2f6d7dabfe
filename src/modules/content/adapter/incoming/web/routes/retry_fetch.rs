use actix_web::{post, web, Responder};

use crate::content::application::ports::incoming::content_api::ContentApi;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Retry loading content
///
/// Re-runs the full fetch; while offline it only reports "still offline".
#[utoipa::path(
    post,
    path = "/api/content/retry",
    tag = "content",
    responses(
        (status = 200, description = "State after the retry attempt")
    )
)]
#[post("/api/content/retry")]
pub async fn retry_fetch_handler(data: web::Data<AppState>) -> impl Responder {
    data.content.retry_fetch().await;
    ApiResponse::success(data.content.snapshot())
}
