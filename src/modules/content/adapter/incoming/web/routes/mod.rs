mod add_project;
mod add_service;
mod delete_project;
mod delete_service;
mod get_content;
mod retry_fetch;
mod update_contact;
mod update_profile;
mod update_project;
mod update_service;

pub use add_project::*;
pub use add_service::*;
pub use delete_project::*;
pub use delete_service::*;
pub use get_content::*;
pub use retry_fetch::*;
pub use update_contact::*;
pub use update_profile::*;
pub use update_project::*;
pub use update_service::*;

use actix_web::{http::StatusCode, HttpResponse};

use crate::content::application::ports::incoming::content_api::ContentSyncError;
use crate::content::application::services::content_sync::OFFLINE_MESSAGE;
use crate::shared::api::ApiResponse;

/// Uniform mapping from sync-layer failures to HTTP responses. Store detail
/// has already been logged by the sync layer; the client only sees the
/// generic message.
pub(crate) fn sync_error_response(err: ContentSyncError) -> HttpResponse {
    match err {
        ContentSyncError::NotAuthenticated => {
            ApiResponse::unauthorized("NOT_AUTHENTICATED", "Not authenticated")
        }
        ContentSyncError::Offline => ApiResponse::error(
            StatusCode::SERVICE_UNAVAILABLE,
            "OFFLINE",
            OFFLINE_MESSAGE,
        ),
        ContentSyncError::Store(_) => ApiResponse::error(
            StatusCode::BAD_GATEWAY,
            "STORE_ERROR",
            "Request failed. Please try again later.",
        ),
    }
}
