use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{LoginResponse, SessionResponse};

// Content
use crate::connectivity::adapter::incoming::web::routes::{
    ConnectivityStatus, SetConnectivityRequest,
};
use crate::content::adapter::incoming::web::routes::{CreatedProject, CreatedService};
use crate::content::application::domain::entities::{
    ContactInfo, Profile, Project, ProjectDraft, Service, ServiceDraft,
};
use crate::content::application::ports::incoming::content_api::ContentState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio Sync API",
        version = "1.0.0",
        description = "Content synchronization service for the portfolio site",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::logout_handler,
        crate::auth::adapter::incoming::web::routes::current_session_handler,

        // Content endpoints
        crate::content::adapter::incoming::web::routes::get_content_handler,
        crate::content::adapter::incoming::web::routes::retry_fetch_handler,
        crate::content::adapter::incoming::web::routes::update_profile_handler,
        crate::content::adapter::incoming::web::routes::add_project_handler,
        crate::content::adapter::incoming::web::routes::update_project_handler,
        crate::content::adapter::incoming::web::routes::delete_project_handler,
        crate::content::adapter::incoming::web::routes::add_service_handler,
        crate::content::adapter::incoming::web::routes::update_service_handler,
        crate::content::adapter::incoming::web::routes::delete_service_handler,
        crate::content::adapter::incoming::web::routes::update_contact_handler,

        // Connectivity endpoints
        crate::connectivity::adapter::incoming::web::routes::connectivity_status_handler,
        crate::connectivity::adapter::incoming::web::routes::set_connectivity_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<ContentState>,
            ErrorResponse,
            ErrorDetail,

            // Content
            ContentState,
            Profile,
            Project,
            Service,
            ContactInfo,
            ProjectDraft,
            ServiceDraft,
            CreatedProject,
            CreatedService,

            // Auth
            LoginResponse,
            SessionResponse,

            // Connectivity
            ConnectivityStatus,
            SetConnectivityRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Operator session endpoints"),
        (name = "content", description = "Content mirror and mutation endpoints"),
        (name = "connectivity", description = "Online/offline signal endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Session token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
